//! Error types for the pen driver.

use stroke_builder::BuildError;
use thiserror::Error;

/// Result type for pen operations.
pub type PenResult<T> = Result<T, PenError>;

/// Errors that can occur while driving stroke assembly.
#[derive(Debug, Error)]
pub enum PenError {
    /// The underlying builder rejected a geometry call.
    ///
    /// The pen sequences builder calls itself and filters degenerate
    /// movement before forwarding, so this surfacing indicates a bug in
    /// the driver rather than bad input.
    #[error("stroke assembly failed: {0}")]
    Build(#[from] BuildError),
}
