//! Named flat-index arithmetic for ring/longitude addressing.

/// Maps `(latitude ring, longitude)` pairs to flat vertex indices.
///
/// The stroke vertex buffer lays rings out contiguously: the cap apex sits
/// at index 0, and ring `lat` occupies `segment_count + 1` slots starting
/// at `ring_start(lat)`. Cross-section circles appended while drawing
/// continue the same numbering, so one grid addresses the whole stroke.
///
/// # Example
///
/// ```
/// use stroke_templates::CapGrid;
///
/// let grid = CapGrid::new(12);
/// assert_eq!(grid.ring_start(0), 1);
/// assert_eq!(grid.cell(0, 12), 13);
/// assert_eq!(grid.cell(1, 0), grid.ring_start(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapGrid {
    segment_count: usize,
}

impl CapGrid {
    /// Create a grid for the given circumferential segment count.
    #[inline]
    #[must_use]
    pub const fn new(segment_count: usize) -> Self {
        Self { segment_count }
    }

    /// Number of vertices in one ring (the seam vertex is duplicated).
    #[inline]
    #[must_use]
    pub const fn ring_len(&self) -> usize {
        self.segment_count + 1
    }

    /// Flat index of the first vertex of latitude ring `lat`.
    ///
    /// Index 0 is the apex, so ring 0 starts at 1.
    #[inline]
    #[must_use]
    pub const fn ring_start(&self, lat: usize) -> usize {
        lat * (self.segment_count + 1) + 1
    }

    /// Flat index of the vertex at `(lat, lon)`.
    #[inline]
    #[must_use]
    pub const fn cell(&self, lat: usize, lon: usize) -> usize {
        lon + lat * (self.segment_count + 1) + 1
    }

    /// Flat index of the vertex at `(lat, lon)` as a face index.
    ///
    /// Strokes are bounded far below `u32::MAX` vertices; faces store `u32`
    /// indices like every mesh buffer in this workspace.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cell_u32(&self, lat: usize, lon: usize) -> u32 {
        self.cell(lat, lon) as u32
    }
}
