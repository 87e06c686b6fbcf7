//! Domain Value Objects
//!
//! Immutable value objects describing what a declaration carries.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Descriptor`] | Literal value or deferred provider declared for a name |
//! | [`Provider`] | Zero-argument callable producing a value |
//! | [`Value`] | Type-erased resolved dependency |
//! | [`Visibility`] | Access level captured by accessors |

/// Dependency descriptors and providers
pub mod descriptor;
/// Accessor visibility levels
pub mod visibility;

pub use descriptor::{Descriptor, Provider, Value, downcast_value};
pub use visibility::Visibility;
