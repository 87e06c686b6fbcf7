//! Process-wide Registries
//!
//! The two pieces of global configuration every declaration and accessor
//! consults:
//!
//! | Registry | Default | Storage |
//! |----------|---------|---------|
//! | [`resolver`] | [`DefaultResolver`](lazydep_domain::DefaultResolver) | `ArcSwapOption` |
//! | [`visibility`] | `private` | `AtomicU8` |
//!
//! ## Lifecycle
//!
//! A default holds until explicitly replaced. Replacement is global,
//! immediate and unscoped; [`reset`] restores both defaults. Readers never
//! observe a partially written value; read-after-write is guaranteed on the
//! writing thread, cross-thread visibility is best-effort.

pub mod resolver;
pub mod visibility;

pub use resolver::{replace_resolver, reset_resolver, resolve, resolver, set_resolver};
pub use visibility::{reset_visibility, set_visibility, try_set_visibility, visibility};

/// Restore the default resolver and the default visibility
pub fn reset() {
    reset_resolver();
    reset_visibility();
}
