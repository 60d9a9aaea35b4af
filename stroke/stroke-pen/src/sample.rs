//! Tick-aligned input samples.

use nalgebra::Point3;

/// One tick's worth of drawing input.
///
/// Samples arrive at a fixed tick rate from a capture or playback source.
/// Direction and distance between consecutive samples are derived by the
/// pen, not carried by the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Position of the pen tip in world space.
    pub position: Point3<f64>,
    /// Whether the draw trigger is held this tick.
    pub pressed: bool,
}

impl PathSample {
    /// Create a sample from a position and pressed flag.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, pressed: bool) -> Self {
        Self { position, pressed }
    }
}
