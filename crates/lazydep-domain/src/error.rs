//! Error handling types

use thiserror::Error;

/// Boxed error produced by providers and custom resolvers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for lazydep
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected at the call that introduced it
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Failure raised by a provider or by the configured resolver.
    ///
    /// Displayed and sourced exactly as the underlying error.
    #[error(transparent)]
    Resolution(BoxError),

    /// Class id does not belong to the catalog
    #[error("Unknown class: #{id}")]
    UnknownClass {
        /// Arena index of the class
        id: usize,
    },

    /// No accessor with this name is attached to the class or its ancestors
    #[error("Undefined dependency `{name}` for class {class}")]
    UnknownDependency {
        /// Class the accessor was requested on
        class: String,
        /// Requested dependency name
        name: String,
    },

    /// Accessor exists but the most-derived table has no descriptor for it
    #[error("No descriptor for dependency `{name}` in the table of class {class}")]
    MissingDescriptor {
        /// Class whose table was consulted
        class: String,
        /// Requested dependency name
        name: String,
    },

    /// Accessor visibility forbids the call site
    #[error("{visibility} dependency `{name}` called for an instance of {class}")]
    AccessDenied {
        /// Class of the receiving instance
        class: String,
        /// Requested dependency name
        name: String,
        /// Visibility captured by the accessor
        visibility: crate::value_objects::Visibility,
    },

    /// Constructor arguments neither declared nor consumed by an initializer
    #[error("Unknown keywords for {class}: {}", names.join(", "))]
    UnexpectedArguments {
        /// Class being instantiated
        class: String,
        /// Argument names left over
        names: Vec<String>,
    },

    /// Resolved value is not of the requested type
    #[error("Dependency `{name}` is not a {expected}")]
    TypeMismatch {
        /// Dependency name
        name: String,
        /// Requested type name
        expected: &'static str,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Configuration error creation methods
impl Error {
    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid configuration error with source
    pub fn invalid_configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Wrap a provider or resolver failure without altering it
    pub fn resolution<E: Into<BoxError>>(err: E) -> Self {
        Self::Resolution(err.into())
    }

    /// Create a resolution error from a plain message
    pub fn resolution_message<S: Into<String>>(message: S) -> Self {
        Self::Resolution(message.into().into())
    }

    /// Downcast the wrapped provider error, if this is a resolution failure
    pub fn resolution_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Resolution(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

// Catalog error creation methods
impl Error {
    /// Create an unknown class error
    pub fn unknown_class(id: usize) -> Self {
        Self::UnknownClass { id }
    }

    /// Create an unknown dependency error
    pub fn unknown_dependency<C: Into<String>, N: Into<String>>(class: C, name: N) -> Self {
        Self::UnknownDependency {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create a missing descriptor error
    pub fn missing_descriptor<C: Into<String>, N: Into<String>>(class: C, name: N) -> Self {
        Self::MissingDescriptor {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<N: Into<String>>(name: N, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
