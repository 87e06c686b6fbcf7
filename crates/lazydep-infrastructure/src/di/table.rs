//! Dependency Table
//!
//! Ordered mapping from dependency name to [`Descriptor`], owned by exactly
//! one class entry of a [`Catalog`](super::Catalog).

use indexmap::IndexMap;
use lazydep_domain::Descriptor;

/// Per-class mapping from dependency name to its declared descriptor
///
/// Names are unique. Insertion order is the order in which names were first
/// declared; overriding a name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct DependencyTable {
    entries: IndexMap<String, Descriptor>,
}

impl DependencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `entries` onto this table
    ///
    /// Each incoming descriptor replaces any existing one with the same name;
    /// names not mentioned are preserved.
    pub fn merge<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Descriptor)>,
        K: Into<String>,
    {
        for (name, descriptor) in entries {
            self.entries.insert(name.into(), descriptor);
        }
    }

    /// Independent copy to seed a subclass table
    ///
    /// Only the mapping is duplicated; descriptors share their literal values
    /// and provider closures with this table.
    pub fn copy_for_subclass(&self) -> Self {
        self.clone()
    }

    /// Descriptor declared for `name`
    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        self.entries.get(name)
    }

    /// Whether `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Name/descriptor pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
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
}

impl<K: Into<String>> FromIterator<(K, Descriptor)> for DependencyTable {
    fn from_iter<I: IntoIterator<Item = (K, Descriptor)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.merge(iter);
        table
    }
}
