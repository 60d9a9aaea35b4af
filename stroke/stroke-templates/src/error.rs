//! Error types for template configuration.

use thiserror::Error;

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while configuring stroke templates.
///
/// Both variants are fatal at setup: no geometry may be generated from an
/// invalid configuration.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Segment count is too low to form a closed ring.
    #[error("segment count must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// Thickness is invalid (zero, negative, or non-finite).
    #[error("invalid thickness: {0}")]
    InvalidThickness(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TemplateError::TooFewSegments { min: 3, actual: 2 };
        assert!(format!("{err}").contains("at least 3"));

        let err = TemplateError::InvalidThickness(-1.0);
        assert!(format!("{err}").contains("-1"));
    }
}
