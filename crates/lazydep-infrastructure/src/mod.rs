//! # Infrastructure Layer
//!
//! Class catalog, declaration engine and the process-wide registries, plus
//! the configuration and logging plumbing around them.
//!
//! ## Module Categories
//!
//! ### Declarations & Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Catalog, declarations, dependency tables, instances |
//! | [`registry`] | Global resolver and visibility settings |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (TOML + env) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod registry;

pub use error_ext::ErrorContext;
