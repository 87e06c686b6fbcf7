//! Dependency Descriptor Value Objects
//!
//! A descriptor is what a declaration stores for each dependency name: either
//! a literal value or a deferred provider that builds the value on demand.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// Type-erased, shareable dependency value
pub type Value = Arc<dyn Any + Send + Sync>;

type ProviderFn = dyn Fn() -> Result<Value, BoxError> + Send + Sync;

/// Zero-argument callable producing a dependency value
///
/// Cloning a provider shares the underlying closure.
#[derive(Clone)]
pub struct Provider {
    inner: Arc<ProviderFn>,
}

impl Provider {
    /// Wrap an infallible closure
    pub fn new<T, F>(f: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move || Ok(Arc::new(f()) as Value)),
        }
    }

    /// Wrap a fallible closure; its error is surfaced unchanged by accessors
    pub fn fallible<T, E, F>(f: F) -> Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move || f().map(|v| Arc::new(v) as Value).map_err(Into::into)),
        }
    }

    /// Wrap a closure that already yields a type-erased value
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Invoke the provider
    pub fn call(&self) -> Result<Value, BoxError> {
        (self.inner)()
    }

    /// Whether two providers share the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Provider(..)")
    }
}

/// Value Object: Dependency Descriptor
///
/// The default declared for one dependency name. Immutable once declared;
/// cloning shares the literal value or provider closure.
///
/// ## Example
///
/// ```rust
/// use lazydep_domain::Descriptor;
///
/// let literal = Descriptor::value("localhost".to_string());
/// let deferred = Descriptor::provider(|| vec![1, 2, 3]);
///
/// assert!(!literal.is_provider());
/// assert!(deferred.is_provider());
/// assert_eq!(literal.literal::<String>().map(String::as_str), Some("localhost"));
/// ```
#[derive(Clone)]
pub enum Descriptor {
    /// Literal value returned as-is by the default resolver
    Value(Value),
    /// Deferred provider invoked by the default resolver
    Provider(Provider),
}

impl Descriptor {
    /// Literal descriptor
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self::Value(Arc::new(value))
    }

    /// Literal descriptor sharing an existing value
    pub fn shared(value: Value) -> Self {
        Self::Value(value)
    }

    /// Deferred descriptor from an infallible closure
    pub fn provider<T, F>(f: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Provider(Provider::new(f))
    }

    /// Deferred descriptor from a fallible closure
    pub fn try_provider<T, E, F>(f: F) -> Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::Provider(Provider::fallible(f))
    }

    /// Whether this descriptor defers to a provider
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    /// Borrow the literal value as `T`, if this is a literal of that type
    pub fn literal<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Value(value) => value.downcast_ref::<T>(),
            Self::Provider(_) => None,
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Descriptor::Value(..)"),
            Self::Provider(_) => f.write_str("Descriptor::Provider(..)"),
        }
    }
}

impl From<Provider> for Descriptor {
    fn from(provider: Provider) -> Self {
        Self::Provider(provider)
    }
}

/// Downcast a resolved value, reporting the expected type on mismatch
pub fn downcast_value<T: Any + Send + Sync>(name: &str, value: Value) -> crate::Result<Arc<T>> {
    value
        .downcast::<T>()
        .map_err(|_| crate::Error::type_mismatch(name, type_name::<T>()))
}
