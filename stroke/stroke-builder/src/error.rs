//! Error types for incremental stroke assembly.

use thiserror::Error;

/// Result type for stroke building operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while assembling a stroke mesh.
///
/// The out-of-sequence variants indicate a driver programming error; a
/// correct driver never triggers them. `DegenerateMovement` guards the
/// buffers against non-finite normals from a zero-length movement.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `add_start_cap` was called on a builder that already has one.
    #[error("start cap already added")]
    StartCapAlreadyAdded,

    /// A segment or end cap was requested before the start cap.
    #[error("start cap missing: stroke has no geometry yet")]
    StartCapMissing,

    /// The stroke was already closed with an end cap.
    #[error("stroke already closed")]
    AlreadyClosed,

    /// A sample moved no distance; appending it would divide by zero.
    #[error("degenerate movement: distance {distance} cannot be normalized")]
    DegenerateMovement {
        /// The offending distance.
        distance: f64,
    },

    /// `finish` was called before the stroke was closed.
    #[error("stroke is not closed: partial geometry is not a finished mesh")]
    Unfinished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(format!("{}", BuildError::StartCapMissing).contains("start cap"));
        assert!(
            format!("{}", BuildError::DegenerateMovement { distance: 0.0 }).contains("0")
        );
    }
}
