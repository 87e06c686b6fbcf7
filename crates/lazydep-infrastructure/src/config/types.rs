//! Configuration types

use lazydep_domain::constants::DEFAULT_VISIBILITY;
use lazydep_domain::{Result, Visibility};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::registry;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LazydepConfig {
    /// Declaration defaults
    pub dependencies: DependencyConfig,

    /// Logging setup
    pub logging: LoggingConfig,
}

impl LazydepConfig {
    /// Push configured defaults into the process-wide registries
    ///
    /// Validates first; nothing is applied when the configuration is invalid.
    pub fn apply(&self) -> Result<Visibility> {
        let visibility = self.dependencies.visibility()?;
        Ok(registry::set_visibility(visibility))
    }
}

/// Declaration defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DependencyConfig {
    /// Visibility captured by new declarations (private, public, protected)
    pub visibility: String,
}

impl DependencyConfig {
    /// Parsed visibility level
    pub fn visibility(&self) -> Result<Visibility> {
        self.visibility.parse()
    }
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            visibility: DEFAULT_VISIBILITY.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
