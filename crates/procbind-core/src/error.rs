//! Error types for procbind

use thiserror::Error;

/// Raised when a bound output parameter has no declared counterpart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("output index {index} is out of range for {declared} declared output parameter(s)")]
pub struct OutputIndexError {
    /// Position of the bound output parameter among all bound outputs
    pub index: usize,
    /// Number of output parameters the method signature declares
    pub declared: usize,
}

/// Core error type for procbind operations
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Invalid operation: {message}")]
    InvalidOperation {
        message: String,
        #[source]
        source: Option<OutputIndexError>,
    },

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contract catalog parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ProcError {
    /// Build an `InvalidOperation` error without an underlying cause
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        ProcError::InvalidOperation {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type alias for procbind operations
pub type Result<T> = std::result::Result<T, ProcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_operation_exposes_index_cause() {
        let err = ProcError::InvalidOperation {
            message: "outputs do not match".to_string(),
            source: Some(OutputIndexError {
                index: 1,
                declared: 1,
            }),
        };

        assert_eq!(err.to_string(), "Invalid operation: outputs do not match");
        let cause = err.source().expect("cause should be attached");
        assert_eq!(
            cause.to_string(),
            "output index 1 is out of range for 1 declared output parameter(s)"
        );
    }

    #[test]
    fn test_invalid_operation_helper_has_no_cause() {
        let err = ProcError::invalid_operation("missing argument");
        assert!(err.source().is_none());
    }
}
