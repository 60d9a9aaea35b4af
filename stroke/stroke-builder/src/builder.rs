//! Incremental stroke mesh assembly.

use std::sync::Arc;

use nalgebra::{Isometry3, Point3, Vector3};
use stroke_templates::StrokeTemplates;
use stroke_types::StrokeMesh;
use tracing::{debug, trace};

use crate::error::{BuildError, BuildResult};

/// Lifecycle of a stroke under construction.
///
/// ```text
/// Empty -> (add_start_cap) -> Capped -> (add_segment)* -> Capped
///       -> (add_end_cap) -> Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No geometry yet; only `add_start_cap` is valid.
    Empty,
    /// Start cap present; segments and the end cap may follow.
    Capped,
    /// End cap present; the mesh is complete and immutable.
    Closed,
}

/// Assembles one stroke's mesh incrementally from shared templates.
///
/// Each call appends a transformed copy of a template array to the growing
/// vertex/normal buffers and stitches new triangles to the previous
/// latitude ring. Committed vertices are never rewritten after their
/// append; the only whole-buffer pass is the local-to-world transform in
/// `add_start_cap`, which runs exactly once while the buffer holds nothing
/// but the start cap.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use nalgebra::{Isometry3, Point3, Vector3};
/// use stroke_templates::{StrokeTemplates, TemplateConfig};
/// use stroke_builder::StrokeMeshBuilder;
///
/// let config = TemplateConfig::new(12, 0.01).unwrap();
/// let templates = Arc::new(StrokeTemplates::generate(&config));
///
/// let mut builder = StrokeMeshBuilder::new(templates);
/// let at = |y: f64| Isometry3::translation(0.0, y, 0.0);
///
/// builder.add_start_cap(&at(0.0), Point3::origin()).unwrap();
/// builder
///     .add_segment(&at(0.1), Point3::new(0.0, 0.1, 0.0), Vector3::y(), 0.1)
///     .unwrap();
/// builder
///     .add_end_cap(&at(0.1), Point3::new(0.0, 0.1, 0.0))
///     .unwrap();
///
/// let mesh = builder.finish().unwrap();
/// assert!(mesh.indices_in_bounds());
/// ```
#[derive(Debug)]
pub struct StrokeMeshBuilder {
    templates: Arc<StrokeTemplates>,
    mesh: StrokeMesh,
    state: BuilderState,
    /// Count of vertices committed so far; the next append starts here.
    next_vertex_offset: usize,
    /// Ring index where the next latitude/cross-section ring will land.
    /// The ring at `ring_cursor - 1` is the stitch target.
    ring_cursor: usize,
}

impl StrokeMeshBuilder {
    /// Create an empty builder over shared templates.
    #[must_use]
    pub fn new(templates: Arc<StrokeTemplates>) -> Self {
        Self {
            templates,
            mesh: StrokeMesh::new(),
            state: BuilderState::Empty,
            next_vertex_offset: 0,
            ring_cursor: 0,
        }
    }

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> BuilderState {
        self.state
    }

    /// Whether the stroke has been closed with an end cap.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == BuilderState::Closed
    }

    /// The in-progress mesh, for live preview while drawing.
    ///
    /// Partial geometry: do not treat this as a finished stroke. Use
    /// [`finish`](Self::finish) for that.
    #[inline]
    #[must_use]
    pub const fn mesh(&self) -> &StrokeMesh {
        &self.mesh
    }

    /// Vertices committed so far.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Open the stroke with the upper hemisphere cap.
    ///
    /// Appends the upper-cap template, fans the apex to the first latitude
    /// ring, stitches the remaining latitude bands, then transforms the
    /// entire buffer to world space and assigns sphere-outward normals
    /// relative to `origin` (the cap's center).
    ///
    /// # Errors
    ///
    /// Returns an error if a start cap was already added or the stroke is
    /// closed.
    #[allow(clippy::cast_possible_truncation)] // face indices are u32 by design
    pub fn add_start_cap(
        &mut self,
        transform: &Isometry3<f64>,
        origin: Point3<f64>,
    ) -> BuildResult<()> {
        match self.state {
            BuilderState::Empty => {}
            BuilderState::Capped => return Err(BuildError::StartCapAlreadyAdded),
            BuilderState::Closed => return Err(BuildError::AlreadyClosed),
        }

        let templates = Arc::clone(&self.templates);
        let segs = templates.segment_count();
        let lats = templates.latitude_count();
        let added = templates.upper_cap_len();
        let faces_added = segs + (lats - 1) * segs * 2;

        self.mesh.reserve(added, faces_added);
        for v in templates.upper_cap() {
            self.mesh.push_vertex(*v, Vector3::zeros());
        }

        // Apex fan onto the first latitude ring. The buffer was empty, so
        // these indices are absolute.
        for lon in 0..segs {
            self.mesh
                .faces
                .push([(lon + 2) as u32, (lon + 1) as u32, 0]);
        }

        for lat in 0..lats.saturating_sub(1) {
            self.stitch_band(lat);
        }

        // First append: the whole buffer goes local -> world in one pass.
        self.transform_from(0, transform, &origin);

        self.next_vertex_offset = added;
        self.ring_cursor = lats;
        self.state = BuilderState::Capped;

        debug!(
            vertices = added,
            faces = faces_added,
            "start cap appended"
        );
        Ok(())
    }

    /// Extend the tube body with one cross-section ring.
    ///
    /// Appends the cross-section template, transforms only the new ring,
    /// and stitches one band of side triangles back to the previous ring.
    ///
    /// `direction` is the unit movement direction and `distance` the
    /// movement length between the driving samples; a zero distance is
    /// rejected rather than allowed to feed a non-normalizable direction
    /// into the buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if called before `add_start_cap`, after
    /// `add_end_cap`, or with a non-positive / non-finite `distance`.
    pub fn add_segment(
        &mut self,
        transform: &Isometry3<f64>,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        distance: f64,
    ) -> BuildResult<()> {
        match self.state {
            BuilderState::Capped => {}
            BuilderState::Empty => return Err(BuildError::StartCapMissing),
            BuilderState::Closed => return Err(BuildError::AlreadyClosed),
        }
        if distance <= 0.0 || !distance.is_finite() {
            return Err(BuildError::DegenerateMovement { distance });
        }
        debug_assert!(
            (direction.norm() - 1.0).abs() < 1e-6,
            "direction must be a unit vector"
        );

        let templates = Arc::clone(&self.templates);
        let segs = templates.segment_count();
        let added = templates.cross_section_len();
        let offset = self.next_vertex_offset;

        debug_assert_eq!(offset, templates.grid().ring_start(self.ring_cursor));

        trace!(
            ?direction,
            distance,
            ring = self.ring_cursor,
            "cross-section ring appended"
        );

        self.mesh.reserve(added, segs * 2);
        for v in templates.cross_section() {
            self.mesh.push_vertex(*v, Vector3::zeros());
        }

        self.stitch_band(self.ring_cursor - 1);
        self.transform_from(offset, transform, &origin);

        self.next_vertex_offset += added;
        self.ring_cursor += 1;
        Ok(())
    }

    /// Close the stroke with the lower hemisphere cap.
    ///
    /// Appends the lower-cap template, transforms only the new tail,
    /// stitches its latitude bands back to the last cross-section ring,
    /// and fans the final ring onto the nadir vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if called before `add_start_cap` or after the
    /// stroke was already closed.
    #[allow(clippy::cast_possible_truncation)] // face indices are u32 by design
    pub fn add_end_cap(
        &mut self,
        transform: &Isometry3<f64>,
        origin: Point3<f64>,
    ) -> BuildResult<()> {
        match self.state {
            BuilderState::Capped => {}
            BuilderState::Empty => return Err(BuildError::StartCapMissing),
            BuilderState::Closed => return Err(BuildError::AlreadyClosed),
        }

        let templates = Arc::clone(&self.templates);
        let segs = templates.segment_count();
        let lats = templates.latitude_count();
        let added = templates.lower_cap_len();
        let offset = self.next_vertex_offset;
        let faces_added = lats * segs * 2 + segs;

        self.mesh.reserve(added, faces_added);
        for v in templates.lower_cap() {
            self.mesh.push_vertex(*v, Vector3::zeros());
        }

        // The lower cap's rings continue the global ring numbering, so the
        // same band stitching spans the tube/cap boundary.
        for lat in (self.ring_cursor - 1)..(self.ring_cursor + lats - 1) {
            self.stitch_band(lat);
        }

        // Nadir fan over the final latitude ring.
        let last = (self.mesh.vertex_count() - 1) as u32;
        for lon in 0..segs as u32 {
            self.mesh
                .faces
                .push([last, last - (lon + 2), last - (lon + 1)]);
        }

        self.transform_from(offset, transform, &origin);

        self.next_vertex_offset += added;
        self.ring_cursor += lats;
        self.state = BuilderState::Closed;

        debug!(
            vertices = self.next_vertex_offset,
            faces = self.mesh.face_count(),
            "stroke closed"
        );
        Ok(())
    }

    /// Hand over the finished mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the stroke was never closed; partially built
    /// geometry is not exposed as a finished mesh.
    pub fn finish(self) -> BuildResult<StrokeMesh> {
        if self.state == BuilderState::Closed {
            Ok(self.mesh)
        } else {
            Err(BuildError::Unfinished)
        }
    }

    /// Transform vertices `[start..]` to world space and assign their
    /// sphere-outward normals relative to `origin`.
    fn transform_from(
        &mut self,
        start: usize,
        transform: &Isometry3<f64>,
        origin: &Point3<f64>,
    ) {
        for i in start..self.mesh.positions.len() {
            let world = transform * self.mesh.positions[i];
            self.mesh.positions[i] = world;
            self.mesh.normals[i] = (world - origin)
                .try_normalize(f64::EPSILON)
                .unwrap_or(Vector3::y());
        }
    }

    /// Stitch two triangles per longitude cell between ring `lat` and ring
    /// `lat + 1`. Winding keeps the face normals outward.
    fn stitch_band(&mut self, lat: usize) {
        let grid = self.templates.grid();
        let segs = self.templates.segment_count();

        for lon in 0..segs {
            let current = grid.cell_u32(lat, lon);
            let next = grid.cell_u32(lat + 1, lon);
            self.mesh.faces.push([current, current + 1, next + 1]);
            self.mesh.faces.push([current, next + 1, next]);
        }
    }
}
