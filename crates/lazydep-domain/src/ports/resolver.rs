//! Dependency Resolver Port
//!
//! Defines the function that turns a declared [`Descriptor`] into the value an
//! accessor returns. Closures with the right shape are resolvers too, so a
//! resolver backed by an external container is a one-liner:
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use lazydep_domain::{DefaultResolver, DependencyResolver, Descriptor, Value};
//!
//! let container: HashMap<&'static str, Value> =
//!     HashMap::from([("utils.answer", Arc::new(42_u32) as Value)]);
//!
//! let resolver = move |descriptor: &Descriptor| match descriptor.literal::<&str>() {
//!     Some(key) => container
//!         .get(key)
//!         .cloned()
//!         .ok_or_else(|| lazydep_domain::Error::resolution_message(format!("no entry {key}"))),
//!     None => DefaultResolver.resolve(descriptor),
//! };
//!
//! let value = resolver.resolve(&Descriptor::value("utils.answer")).unwrap();
//! assert_eq!(value.downcast_ref::<u32>(), Some(&42));
//! ```

use crate::error::{Error, Result};
use crate::value_objects::{Descriptor, Value};

/// Resolution strategy for declared descriptors
///
/// Implementations must be shareable across threads because the active
/// resolver is a process-wide setting.
pub trait DependencyResolver: Send + Sync {
    /// Produce the value for `descriptor`
    fn resolve(&self, descriptor: &Descriptor) -> Result<Value>;
}

impl<F> DependencyResolver for F
where
    F: Fn(&Descriptor) -> Result<Value> + Send + Sync,
{
    fn resolve(&self, descriptor: &Descriptor) -> Result<Value> {
        self(descriptor)
    }
}

/// Built-in resolver
///
/// Invokes providers with no arguments and passes literal values through
/// untouched (the same shared allocation is returned).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl DependencyResolver for DefaultResolver {
    fn resolve(&self, descriptor: &Descriptor) -> Result<Value> {
        match descriptor {
            Descriptor::Provider(provider) => provider.call().map_err(Error::Resolution),
            Descriptor::Value(value) => Ok(value.clone()),
        }
    }
}
