//! Error types for canvas operations.

use thiserror::Error;

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
///
/// Malformed content inside a well-formed document never produces one of
/// these; it is defaulted or rendered as a visible indicator instead.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Document JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document root has the wrong shape.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// An operation needed a loaded document.
    #[error("No document loaded")]
    NoDocument,
}
