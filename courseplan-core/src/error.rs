//! Error types for courseplan

use thiserror::Error;

use crate::validate::FieldError;

/// Result type alias for courseplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for courseplan operations
///
/// The schedule engine itself never fails; these cover the loading, editing
/// and saving paths around it.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog document has an unexpected shape
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Course id not present in the catalog
    #[error("Course {0} not found")]
    CourseNotFound(String),

    /// Course record failed strict validation
    #[error("Invalid course: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
