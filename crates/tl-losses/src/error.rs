//! Calculation and parameter-file errors.

use thiserror::Error;
use tl_core::TlError;

/// Rejection of an input parameter set. No curve data is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field that must be strictly positive was zero, negative or non-finite.
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
}

impl From<ValidationError> for TlError {
    fn from(err: ValidationError) -> Self {
        TlError::InvalidArg {
            what: err.to_string(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
