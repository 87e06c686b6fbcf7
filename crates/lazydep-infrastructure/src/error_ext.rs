//! Error extension utilities
//!
//! Context extension methods converting foreign errors into domain errors.

use std::fmt;

use lazydep_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use lazydep_infrastructure::error_ext::ErrorContext;
///
/// let text = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
///
/// let config: LazydepConfig = figment.extract().config_context("Failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add configuration context with lazy evaluation
    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::InvalidConfiguration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Io {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::InvalidConfiguration {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }
}
