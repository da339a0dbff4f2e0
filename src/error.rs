//! Error types for the grievance-redressal library.
//!
//! This module provides custom error types using `thiserror` so that callers can tell a
//! blocked submission from a failed login, an empty dashboard or a broken backing file.

use thiserror::Error;

/// Errors that can occur while submitting or triaging grievances.
#[derive(Error, Debug)]
pub enum GrievanceError {
    /// A required field was missing or malformed; no record was created
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrong or missing admin password
    #[error("Invalid admin password")]
    Unauthorized,

    /// The admin dashboard has nothing to show
    #[error("No complaints available yet")]
    EmptyStore,

    /// No grievance with the given id
    #[error("Grievance not found: {0}")]
    NotFound(String),

    /// A value outside one of the closed label sets
    #[error("Invalid {field}: {value}")]
    InvalidValue {
        /// Name of the field being parsed
        field: &'static str,
        /// The rejected input
        value: String,
    },

    /// The backing file exists but does not hold grievance records
    #[error("Malformed grievance store: {0}")]
    MalformedStore(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

impl GrievanceError {
    /// Shorthand for [`GrievanceError::InvalidValue`]
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

/// Convenience type alias for Result with `GrievanceError`
pub type Result<T> = std::result::Result<T, GrievanceError>;
