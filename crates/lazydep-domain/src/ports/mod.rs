//! Domain Port Interfaces
//!
//! Seams the infrastructure layer plugs implementations into.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DependencyResolver`] | Turns a descriptor into a concrete value |

/// Descriptor resolution port
pub mod resolver;

pub use resolver::{DefaultResolver, DependencyResolver};
