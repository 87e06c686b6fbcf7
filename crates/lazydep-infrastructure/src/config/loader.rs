//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lazydep_domain::error::Result;

use crate::config::LazydepConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Whether to look for a config file when no path is set
    discover: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            discover: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip config file discovery when no explicit path is set
    pub fn without_discovery(mut self) -> Self {
        self.discover = false;
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `LazydepConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `LAZYDEP__DEPENDENCIES__VISIBILITY`)
    pub fn load(&self) -> Result<LazydepConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LazydepConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if self.discover {
            if let Some(default_path) = Self::find_default_config_path() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: LazydepConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &LazydepConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate configuration values
fn validate_config(config: &LazydepConfig) -> Result<()> {
    config.dependencies.visibility()?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}
