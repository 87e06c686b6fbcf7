//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Declaration semantics constants are defined in `lazydep_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lazydep.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lazydep";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LAZYDEP";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "LAZYDEP_LOG";
