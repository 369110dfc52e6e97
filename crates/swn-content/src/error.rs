//! Error types for the content generators.

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while generating content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A culture name did not match any known culture.
    #[error("unknown culture: {0}")]
    UnknownCulture(String),

    /// Table engine error.
    #[error("{0}")]
    Table(#[from] swn_tables::TableError),
}
