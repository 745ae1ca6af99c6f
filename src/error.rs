use std::fmt;
use std::io;

use crate::registry_node::config::ConfigError;

/// Unified error type for the entire application.
///
/// This error type centralizes all possible errors that can occur in the
/// application, providing a consistent interface for error handling and
/// propagation.
///
/// Each variant represents a specific category of errors, with associated
/// context to help with debugging and error reporting.
#[derive(Debug)]
pub enum RegistryError {
    /// A referenced dataset name is absent from the store. Dataset names are
    /// not user-supplied, so this surfaces as a server error.
    DatasetNotFound(String),

    /// A source row is missing an expected column or has the wrong arity.
    /// Indicates upstream data corruption, not recoverable in the engine.
    MalformedRow(String),

    /// Errors related to configuration
    Config(String),

    /// Errors related to IO operations
    Io(io::Error),

    /// Errors related to serialization/deserialization
    Serialization(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetNotFound(name) => write!(f, "Dataset not found: {}", name),
            Self::MalformedRow(msg) => write!(f, "Malformed row: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Conversion from io::Error to RegistryError
impl From<io::Error> for RegistryError {
    fn from(error: io::Error) -> Self {
        RegistryError::Io(error)
    }
}

/// Conversion from serde_json::Error to RegistryError
impl From<serde_json::Error> for RegistryError {
    fn from(error: serde_json::Error) -> Self {
        RegistryError::Serialization(error.to_string())
    }
}

/// Conversion from ConfigError to RegistryError
impl From<ConfigError> for RegistryError {
    fn from(error: ConfigError) -> Self {
        RegistryError::Config(error.to_string())
    }
}

/// Result type alias for operations that can result in a RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;
