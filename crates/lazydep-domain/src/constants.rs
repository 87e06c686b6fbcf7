//! Domain layer constants
//!
//! Contains constants that are part of the declaration and resolution
//! semantics. Infrastructure-specific constants remain in
//! `lazydep_infrastructure::constants`.

use crate::value_objects::Visibility;

// ============================================================================
// VISIBILITY CONSTANTS
// ============================================================================

/// Visibility captured by declarations when none was configured
pub const DEFAULT_VISIBILITY: Visibility = Visibility::Private;

/// Message carried by the error raised for an unrecognized visibility level
pub const INVALID_VISIBILITY_MESSAGE: &str = "visibility must be private, public, or protected";

// ============================================================================
// CLASS CONSTANTS
// ============================================================================

/// Display name used for classes defined without a name
pub const ANONYMOUS_CLASS_NAME: &str = "#<Class>";
