//! # Domain Layer
//!
//! Core types of lazydep with no knowledge of how classes are stored or how
//! the process-wide registries are kept.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and result alias |
//! | [`constants`] | Defaults shared by every layer |
//! | [`value_objects`] | [`Descriptor`], [`Value`], [`Visibility`] |
//! | [`ports`] | [`DependencyResolver`] seam and its default implementation |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{DefaultResolver, DependencyResolver};
pub use value_objects::{Descriptor, Provider, Value, Visibility};
