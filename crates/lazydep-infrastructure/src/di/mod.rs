//! Declaration Engine
//!
//! Classes opt in to named dependencies through a [`Catalog`]; each
//! dependency gets a lazily resolved, memoized accessor on instances.
//!
//! ## Architecture Overview
//!
//! ```text
//! dependencies([...]) ──► Declaration ──apply──► Catalog
//!                                                  ├── DependencyTable (per class)
//!                                                  ├── accessor visibility (per name)
//!                                                  └── accepted constructor args
//!
//! Catalog::instantiate ──► Instance
//!                            └── slots: empty ──first call──► registry::resolve
//! ```
//!
//! ## Key Principles
//!
//! - **Overlay**: later declarations win per name, other names are kept
//! - **Copy on inherit**: a subclass owns a copy of its ancestor's table
//! - **Lazy**: nothing is resolved before the first accessor call
//! - **Overrides bypass resolution**: constructor values are stored as given

pub mod arguments;
pub mod catalog;
pub mod declaration;
pub mod instance;
pub mod table;

pub use arguments::Arguments;
pub use catalog::{Catalog, ClassId, Initializer};
pub use declaration::{Declaration, dependencies, dependencies as dependency};
pub use instance::{CallSite, Instance};
pub use table::DependencyTable;
