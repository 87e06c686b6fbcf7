//! Constructor arguments

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use lazydep_domain::Value;

/// Named arguments passed to [`Catalog::instantiate`](super::Catalog::instantiate)
///
/// Values whose name matches a declared dependency become that dependency's
/// resolved value on the new instance. The rest is handed to the class's
/// custom initializer.
#[derive(Clone, Default)]
pub struct Arguments {
    values: IndexMap<String, Value>,
}

impl Arguments {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named argument
    pub fn with<K, T>(self, name: K, value: T) -> Self
    where
        K: Into<String>,
        T: Any + Send + Sync,
    {
        self.with_shared(name, Arc::new(value))
    }

    /// Add a named argument sharing an existing value
    pub fn with_shared<K: Into<String>>(mut self, name: K, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Value passed for `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Value passed for `name`, downcast to `T`
    pub fn get_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref::<T>()
    }

    /// Take the value passed for `name`
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    /// Whether a value was passed for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names in the order they were given
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no argument was given
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into (arguments whose name satisfies `accept`, the rest)
    pub(crate) fn partition<F>(self, accept: F) -> (Self, Self)
    where
        F: Fn(&str) -> bool,
    {
        let (taken, rest): (IndexMap<_, _>, IndexMap<_, _>) =
            self.values.into_iter().partition(|(name, _)| accept(name));
        (Self { values: taken }, Self { values: rest })
    }
}

impl IntoIterator for Arguments {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.keys()).finish()
    }
}
