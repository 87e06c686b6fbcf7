//! Declarations
//!
//! A [`Declaration`] is the attachable unit produced by [`dependencies`]: a
//! named set of descriptors plus the accessor visibility that was current when
//! the unit was created. Applying it to a class merges the descriptors into
//! the class table, widens the class constructor and attaches one accessor per
//! name.

use std::any::Any;

use indexmap::IndexMap;
use lazydep_domain::{Descriptor, Result, Visibility};

use super::catalog::{Catalog, ClassId};
use crate::registry;

/// Attachable set of dependency declarations
#[derive(Debug, Clone)]
pub struct Declaration {
    entries: IndexMap<String, Descriptor>,
    visibility: Visibility,
}

impl Declaration {
    /// Empty declaration capturing the current default visibility
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            visibility: registry::visibility(),
        }
    }

    /// Declare `name` with `descriptor`, replacing an earlier entry of this unit
    pub fn with<K: Into<String>>(mut self, name: K, descriptor: Descriptor) -> Self {
        self.entries.insert(name.into(), descriptor);
        self
    }

    /// Declare `name` with a literal default
    pub fn with_value<K, T>(self, name: K, value: T) -> Self
    where
        K: Into<String>,
        T: Any + Send + Sync,
    {
        self.with(name, Descriptor::value(value))
    }

    /// Declare `name` with a deferred provider
    pub fn with_provider<K, T, F>(self, name: K, provider: F) -> Self
    where
        K: Into<String>,
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.with(name, Descriptor::provider(provider))
    }

    /// Pin the accessor visibility instead of the captured default
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Visibility given to the accessors this unit attaches
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Declared names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Declared name/descriptor pairs in order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.entries.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Number of declared names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply this unit to `class` in `catalog`
    pub fn apply(&self, catalog: &Catalog, class: ClassId) -> Result<()> {
        catalog.include(class, self)
    }
}

impl Default for Declaration {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a declaration from name/descriptor pairs
///
/// The accessor visibility is captured now, from
/// [`registry::visibility`](crate::registry::visibility).
///
/// ```ignore
/// let unit = dependencies([
///     ("foo", Descriptor::provider(|| MyFoo::new())),
///     ("bar", Descriptor::value(Bar::default())),
/// ]);
/// unit.apply(&catalog, class)?;
/// ```
pub fn dependencies<I, K>(entries: I) -> Declaration
where
    I: IntoIterator<Item = (K, Descriptor)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .fold(Declaration::new(), |unit, (name, descriptor)| unit.with(name, descriptor))
}
