//! Error types for drawing and recording I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for drawing and recording I/O.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while saving or loading drawings and recordings.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found. Recoverable: callers typically fall back to an
    /// empty drawing.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
