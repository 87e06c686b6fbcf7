//! # lazydep
//!
//! Lazy, memoized dependency declarations.
//!
//! A class in a [`Catalog`] opts in to a named set of dependencies, each with
//! a literal default or a deferred provider. Every dependency gets an
//! accessor on instances that resolves on first call and returns the stored
//! value afterwards. Declarations compose: later ones win per name, and
//! subclasses start from a copy of their ancestor's table without ever
//! changing it.
//!
//! ## Example
//!
//! ```rust
//! use lazydep::{Arguments, Catalog, Descriptor};
//!
//! let catalog = Catalog::new();
//! let a = catalog.define_class("A");
//! catalog.declare(a, [("greeting", Descriptor::provider(|| "hi".to_string()))])?;
//!
//! let obj = catalog.instantiate(a, Arguments::new())?;
//! assert_eq!(*obj.get::<String>("greeting")?, "hi");
//!
//! let custom = catalog.instantiate(a, Arguments::new().with("greeting", "bye".to_string()))?;
//! assert_eq!(*custom.get::<String>("greeting")?, "bye");
//!
//! let b = catalog.define_subclass(a, "B")?;
//! catalog.declare(b, [("greeting", Descriptor::provider(|| "hey".to_string()))])?;
//! assert_eq!(*catalog.instantiate(b, Arguments::new())?.get::<String>("greeting")?, "hey");
//! # Ok::<(), lazydep::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, visibility levels, the resolver port and errors
//! - `infrastructure` - catalog and declaration engine, global registries,
//!   configuration and logging

/// Domain layer - descriptors, visibility, resolver port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use lazydep_domain::*;
}

/// Infrastructure layer - catalog, registries, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use lazydep_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{
    BoxError, DefaultResolver, DependencyResolver, Descriptor, Error, Provider, Result, Value,
    Visibility,
};

// Re-export the declaration surface at the crate root
pub use infrastructure::di::{
    Arguments, CallSite, Catalog, ClassId, Declaration, DependencyTable, Instance, dependencies,
    dependency,
};

// Re-export the process-wide settings at the crate root
pub use infrastructure::registry::{
    replace_resolver, reset_resolver, reset_visibility, resolve, resolver, set_resolver,
    set_visibility, try_set_visibility, visibility,
};
