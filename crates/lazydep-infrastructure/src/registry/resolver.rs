//! Resolver Registry
//!
//! Holds the resolver used by every accessor on a slot miss.
//!
//! ## Usage
//!
//! ```ignore
//! use lazydep_infrastructure::registry;
//!
//! // Resolve `String` literals through an application container
//! registry::set_resolver(move |descriptor: &Descriptor| match descriptor.literal::<String>() {
//!     Some(key) => container.lookup(key),
//!     None => DefaultResolver.resolve(descriptor),
//! });
//! ```

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;
use lazydep_domain::{DefaultResolver, DependencyResolver, Descriptor, Result, Value};
use tracing::info;

static DEFAULT: LazyLock<Arc<dyn DependencyResolver>> = LazyLock::new(|| Arc::new(DefaultResolver));

static CURRENT: LazyLock<ArcSwapOption<Arc<dyn DependencyResolver>>> =
    LazyLock::new(|| ArcSwapOption::from(None));

/// Current resolver, or the built-in default if none was set
///
/// The default is a single shared instance, so repeated calls return the
/// same `Arc` until a resolver is installed.
pub fn resolver() -> Arc<dyn DependencyResolver> {
    match CURRENT.load_full() {
        Some(current) => Arc::clone(&*current),
        None => Arc::clone(&DEFAULT),
    }
}

/// Install `resolver` as the process-wide resolver and return it
///
/// Accepts any [`DependencyResolver`], including plain closures of shape
/// `Fn(&Descriptor) -> Result<Value>`. No validation is performed.
pub fn set_resolver<R>(resolver: R) -> Arc<dyn DependencyResolver>
where
    R: DependencyResolver + 'static,
{
    replace_resolver(Arc::new(resolver))
}

/// Install an already shared resolver and return it
pub fn replace_resolver(resolver: Arc<dyn DependencyResolver>) -> Arc<dyn DependencyResolver> {
    CURRENT.store(Some(Arc::new(Arc::clone(&resolver))));
    info!("Dependency resolver replaced");
    resolver
}

/// Drop any installed resolver, falling back to the default
pub fn reset_resolver() {
    CURRENT.store(None);
}

/// Resolve `descriptor` with the current resolver
pub fn resolve(descriptor: &Descriptor) -> Result<Value> {
    resolver().resolve(descriptor)
}
