//! Configuration
//!
//! Figment-backed configuration: defaults, an optional TOML file and
//! `LAZYDEP__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{DependencyConfig, LazydepConfig, LoggingConfig};
