//! Class Catalog
//!
//! Arena of class entries. Each entry owns its dependency table, the accessor
//! definitions attached by declarations, the names its constructor accepts and
//! an optional custom initializer. Classes are addressed by [`ClassId`] and
//! link to their parent explicitly.
//!
//! ## Table lifecycle
//!
//! ```text
//! define_subclass(P)          include(C, decl)             instantiate(C)
//!        │                          │                            │
//!        ▼                          ▼                            ▼
//! ancestor tracks subclasses?  C has table?                C has table?
//!   yes → C.table = copy of     no → seed from nearest     no → seed from nearest
//!         nearest table              ancestor table             ancestor table
//!                              then overlay decl
//! ```
//!
//! A table is seeded at most once per class; after that only declarations
//! made directly on the class mutate it.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use lazydep_domain::constants::ANONYMOUS_CLASS_NAME;
use lazydep_domain::{Descriptor, Error, Result, Visibility};
use parking_lot::RwLock;
use tracing::debug;

use super::arguments::Arguments;
use super::declaration::{Declaration, dependencies};
use super::instance::Instance;
use super::table::DependencyTable;

/// Index of a class in its [`Catalog`]
///
/// Ids are plain arena indices and carry no reference to the catalog that
/// issued them. Only pass an id back to that catalog (or a clone of it):
/// another catalog rejects it with `UnknownClass` when the index is past its
/// end, and otherwise reads whatever unrelated class sits at that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    /// Arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Custom initialization run for non-dependency constructor arguments
pub type Initializer = Arc<dyn Fn(&Instance, Arguments) -> Result<()> + Send + Sync>;

struct ClassEntry {
    name: String,
    parent: Option<ClassId>,
    table: Option<DependencyTable>,
    accessors: IndexMap<String, AccessorInfo>,
    accepted: IndexSet<String>,
    tracks_subclasses: bool,
    initializer: Option<Initializer>,
}

impl ClassEntry {
    fn new(name: String, parent: Option<ClassId>) -> Self {
        Self {
            name,
            parent,
            table: None,
            accessors: IndexMap::new(),
            accepted: IndexSet::new(),
            tracks_subclasses: false,
            initializer: None,
        }
    }
}

/// Accessor visibility and the class whose declaration attached it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AccessorInfo {
    pub visibility: Visibility,
    pub owner: ClassId,
}

/// Arena of classes participating in dependency declarations
///
/// Cloning a catalog yields another handle to the same arena; instances keep
/// such a handle to reach their class table at access time.
#[derive(Clone, Default)]
pub struct Catalog {
    classes: Arc<RwLock<Vec<ClassEntry>>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes defined so far
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// Whether no class was defined yet
    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    // ------------------------------------------------------------------
    // Class definition
    // ------------------------------------------------------------------

    /// Define a root class
    pub fn define_class<S: Into<String>>(&self, name: S) -> ClassId {
        let mut classes = self.classes.write();
        let id = ClassId(classes.len());
        classes.push(ClassEntry::new(name.into(), None));
        id
    }

    /// Define an unnamed root class
    pub fn define_anonymous_class(&self) -> ClassId {
        self.define_class(ANONYMOUS_CLASS_NAME)
    }

    /// Define a subclass of `parent`
    ///
    /// When an ancestor has received a declaration, the new class starts
    /// from a copy of the nearest ancestor table. The copy happens here, once.
    pub fn define_subclass<S: Into<String>>(&self, parent: ClassId, name: S) -> Result<ClassId> {
        let mut classes = self.classes.write();
        check(&classes, parent)?;

        let id = ClassId(classes.len());
        let mut entry = ClassEntry::new(name.into(), Some(parent));

        let hooked = lineage(&classes, parent).any(|ancestor| classes[ancestor.0].tracks_subclasses);
        if hooked {
            seed_table(&mut classes, parent);
            entry.table = classes[parent.0]
                .table
                .as_ref()
                .map(DependencyTable::copy_for_subclass);
            debug!(
                class = %entry.name,
                parent = %classes[parent.0].name,
                inherited = entry.table.as_ref().map_or(0, DependencyTable::len),
                "Subclass received copy of dependency table"
            );
        }

        classes.push(entry);
        Ok(id)
    }

    /// Install the custom initializer of `class`
    ///
    /// On instantiation only the most-derived initializer runs, and it only
    /// receives arguments that are not declared dependencies. Dependency
    /// overrides are already stored when it runs, so reading an overridden
    /// dependency returns the given value without calling its provider, and
    /// a subclass initializer never needs to forward overrides to an
    /// ancestor's. Forwarding any other argument is the initializer's job.
    pub fn set_initializer<F>(&self, class: ClassId, initializer: F) -> Result<()>
    where
        F: Fn(&Instance, Arguments) -> Result<()> + Send + Sync + 'static,
    {
        let mut classes = self.classes.write();
        check(&classes, class)?;
        classes[class.0].initializer = Some(Arc::new(initializer));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    /// Declare dependencies on `class`
    ///
    /// Shorthand for [`dependencies`] followed by [`Catalog::include`].
    pub fn declare<I, K>(&self, class: ClassId, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Descriptor)>,
        K: Into<String>,
    {
        self.include(class, &dependencies(entries))
    }

    /// Apply `declaration` to `class`
    ///
    /// Merges its descriptors into the class table (seeding the table from
    /// the nearest ancestor first if the class has none), makes future
    /// subclasses copy the table, widens the accepted constructor arguments
    /// and attaches or replaces one accessor per declared name.
    pub fn include(&self, class: ClassId, declaration: &Declaration) -> Result<()> {
        let mut classes = self.classes.write();
        check(&classes, class)?;

        seed_table(&mut classes, class);

        let entry = &mut classes[class.0];
        entry
            .table
            .get_or_insert_with(DependencyTable::new)
            .merge(declaration.entries().map(|(name, d)| (name, d.clone())));
        entry.tracks_subclasses = true;

        for name in declaration.names() {
            entry.accepted.insert(name.to_string());
            entry.accessors.insert(
                name.to_string(),
                AccessorInfo {
                    visibility: declaration.visibility(),
                    owner: class,
                },
            );
        }

        debug!(
            class = %entry.name,
            names = ?declaration.names().collect::<Vec<_>>(),
            visibility = %declaration.visibility(),
            "Dependencies declared"
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Construct an instance of `class`
    ///
    /// Arguments named after a declared dependency (on `class` or any
    /// ancestor) populate that dependency's slot with the exact value given;
    /// it is never resolved afterwards. Remaining arguments go to the
    /// most-derived custom initializer, which runs once the overrides are in
    /// place. Leftover arguments without an initializer fail with
    /// `UnexpectedArguments` before any slot is written.
    pub fn instantiate(&self, class: ClassId, arguments: Arguments) -> Result<Instance> {
        let (accepted, initializer, name) = {
            let mut classes = self.classes.write();
            check(&classes, class)?;
            seed_table(&mut classes, class);

            let accepted: IndexSet<String> = lineage(&classes, class)
                .flat_map(|id| classes[id.0].accepted.iter().cloned())
                .collect();
            let initializer = lineage(&classes, class)
                .find_map(|id| classes[id.0].initializer.clone());
            (accepted, initializer, classes[class.0].name.clone())
        };

        let (overrides, rest) = arguments.partition(|arg| accepted.contains(arg));
        if initializer.is_none() && !rest.is_empty() {
            return Err(Error::UnexpectedArguments {
                class: name,
                names: rest.names().map(str::to_string).collect(),
            });
        }

        let instance = Instance::new(self.clone(), class);
        if !overrides.is_empty() {
            debug!(
                class = %name,
                overrides = ?overrides.names().collect::<Vec<_>>(),
                "Dependencies overridden at construction"
            );
        }
        for (dependency, value) in overrides {
            instance.overwrite(dependency, value);
        }

        if let Some(initializer) = initializer {
            initializer(&instance, rest)?;
        }

        Ok(instance)
    }

    /// Constructor argument names accepted for dependencies of `class`
    ///
    /// Includes names declared on ancestors, root first.
    pub fn accepted_arguments(&self, class: ClassId) -> Result<Vec<String>> {
        let classes = self.classes.read();
        check(&classes, class)?;
        let mut chain: Vec<ClassId> = lineage(&classes, class).collect();
        chain.reverse();
        let names: IndexSet<String> = chain
            .into_iter()
            .flat_map(|id| classes[id.0].accepted.iter().cloned())
            .collect();
        Ok(names.into_iter().collect())
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Name of `class`
    pub fn class_name(&self, class: ClassId) -> Result<String> {
        let classes = self.classes.read();
        check(&classes, class)?;
        Ok(classes[class.0].name.clone())
    }

    /// Parent of `class`
    pub fn parent(&self, class: ClassId) -> Result<Option<ClassId>> {
        let classes = self.classes.read();
        check(&classes, class)?;
        Ok(classes[class.0].parent)
    }

    /// Whether `class` is `ancestor` or inherits from it
    pub fn is_kind_of(&self, class: ClassId, ancestor: ClassId) -> Result<bool> {
        let classes = self.classes.read();
        check(&classes, class)?;
        check(&classes, ancestor)?;
        Ok(lineage(&classes, class).any(|id| id == ancestor))
    }

    /// Snapshot of the table owned by `class`, if it has one yet
    pub fn own_table(&self, class: ClassId) -> Result<Option<DependencyTable>> {
        let classes = self.classes.read();
        check(&classes, class)?;
        Ok(classes[class.0].table.clone())
    }

    /// Snapshot of the most-derived table reachable from `class`
    ///
    /// Empty when neither the class nor any ancestor has a table.
    pub fn table(&self, class: ClassId) -> Result<DependencyTable> {
        let classes = self.classes.read();
        check(&classes, class)?;
        Ok(nearest_table(&classes, class).cloned().unwrap_or_default())
    }

    /// Visibility of the accessor for `name` as seen from `class`
    pub fn accessor_visibility(&self, class: ClassId, name: &str) -> Result<Option<Visibility>> {
        Ok(self.accessor(class, name)?.map(|info| info.visibility))
    }

    pub(crate) fn accessor(&self, class: ClassId, name: &str) -> Result<Option<AccessorInfo>> {
        let classes = self.classes.read();
        check(&classes, class)?;
        Ok(lineage(&classes, class).find_map(|id| classes[id.0].accessors.get(name).copied()))
    }

    /// Descriptor for `name` from the most-derived table reachable from `class`
    pub(crate) fn descriptor(&self, class: ClassId, name: &str) -> Result<Descriptor> {
        let classes = self.classes.read();
        check(&classes, class)?;
        nearest_table(&classes, class)
            .and_then(|table| table.lookup(name))
            .cloned()
            .ok_or_else(|| Error::missing_descriptor(classes[class.0].name.clone(), name))
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let classes = self.classes.read();
        f.debug_struct("Catalog")
            .field(
                "classes",
                &classes.iter().map(|entry| entry.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn check(classes: &[ClassEntry], class: ClassId) -> Result<()> {
    if class.0 < classes.len() {
        Ok(())
    } else {
        Err(Error::unknown_class(class.0))
    }
}

/// `class` followed by its ancestors, nearest first
fn lineage(classes: &[ClassEntry], class: ClassId) -> impl Iterator<Item = ClassId> + '_ {
    std::iter::successors(Some(class), move |id| classes[id.0].parent)
}

fn nearest_table(classes: &[ClassEntry], class: ClassId) -> Option<&DependencyTable> {
    lineage(classes, class).find_map(|id| classes[id.0].table.as_ref())
}

/// Give `class` its own table copied from the nearest ancestor, if it has none
fn seed_table(classes: &mut [ClassEntry], class: ClassId) {
    if classes[class.0].table.is_some() {
        return;
    }
    let Some(parent) = classes[class.0].parent else {
        return;
    };
    let Some(table) = nearest_table(classes, parent).map(DependencyTable::copy_for_subclass) else {
        return;
    };
    debug!(
        class = %classes[class.0].name,
        inherited = table.len(),
        "Dependency table seeded from ancestor"
    );
    classes[class.0].table = Some(table);
}
