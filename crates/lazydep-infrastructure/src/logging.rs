//! Structured logging with tracing
//!
//! Installs the process-wide subscriber. The declaration engine itself only
//! emits events; nothing is printed unless a subscriber is installed.

use lazydep_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// The `LAZYDEP_LOG` environment variable, when set, takes precedence over
/// the configured level. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = Registry::default().with(filter);
    if config.json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
            .config_context("Failed to install logging subscriber")?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .try_init()
            .config_context("Failed to install logging subscriber")?;
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::invalid_configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
