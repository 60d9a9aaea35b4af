//! Sample-stream state machine driving stroke assembly.

use std::sync::Arc;

use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector3};
use stroke_builder::StrokeMeshBuilder;
use stroke_templates::StrokeTemplates;
use stroke_types::StrokeMesh;
use tracing::debug;

use crate::error::PenResult;
use crate::sample::PathSample;

/// Minimum movement between emitted rings, as a fraction of thickness.
const DISTANCE_THRESHOLD: f64 = 0.3;

/// Rotation mapping local "down" (-Y) onto a movement direction.
///
/// The template caps bulge along +/-Y; orienting -Y along the movement
/// makes the start cap trail the stroke and the end cap lead it.
#[must_use]
pub fn rotation_from_down(direction: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(&-Vector3::y(), direction).unwrap_or_else(|| {
        // Antipodal case: any half-turn perpendicular to -Y works.
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI)
    })
}

/// Turns a stream of [`PathSample`]s into finished stroke meshes.
///
/// One `Pen` handles one input device. Lines are drawn strictly one at a
/// time: a pressed edge starts a line, movement extends it, a release
/// edge schedules its end cap. The finished mesh is returned from
/// [`process_sample`](Self::process_sample) on the tick that closes it.
#[derive(Debug)]
pub struct Pen {
    templates: Arc<StrokeTemplates>,
    min_distance: f64,
    previous: Option<Point3<f64>>,
    active: Option<StrokeMeshBuilder>,
    drawing: bool,
    end_pending: bool,
}

impl Pen {
    /// Create a pen drawing with the given shared templates.
    ///
    /// The movement threshold defaults to `0.3 x thickness`.
    #[must_use]
    pub fn new(templates: Arc<StrokeTemplates>) -> Self {
        let min_distance = templates.config().thickness() * DISTANCE_THRESHOLD;
        Self {
            templates,
            min_distance,
            previous: None,
            active: None,
            drawing: false,
            end_pending: false,
        }
    }

    /// Override the minimum movement distance between emitted rings.
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Whether a line is currently being drawn.
    #[inline]
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The in-progress line's mesh, for live preview.
    ///
    /// `None` when no line is active or it has not moved far enough to
    /// produce geometry yet.
    #[must_use]
    pub fn preview(&self) -> Option<&StrokeMesh> {
        self.active.as_ref().map(StrokeMeshBuilder::mesh)
    }

    /// Discard the in-progress line, if any, without finishing it.
    ///
    /// Partially built geometry is dropped wholesale; finished lines are
    /// unaffected.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            debug!("in-progress stroke cancelled");
        }
        self.previous = None;
        self.drawing = false;
        self.end_pending = false;
    }

    /// Process one tick's sample.
    ///
    /// Returns `Ok(Some(mesh))` on the tick that closes a line, and
    /// `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying builder rejects a call; with
    /// correctly sequenced samples this does not happen.
    pub fn process_sample(&mut self, sample: &PathSample) -> PenResult<Option<StrokeMesh>> {
        if sample.pressed {
            if !self.drawing {
                self.drawing = true;
                self.previous = None;
            }
        } else if self.drawing {
            self.end_pending = true;
        }

        if !self.drawing {
            return Ok(None);
        }

        let current = sample.position;
        let Some(previous) = self.previous else {
            // First pressed sample only seeds the movement reference.
            self.previous = Some(current);
            return Ok(None);
        };

        let delta = current - previous;
        let distance = delta.norm();
        if distance <= self.min_distance {
            // Hovering: wait for sufficient movement before emitting a
            // ring (or the end cap).
            return Ok(None);
        }

        let direction = delta / distance;
        let rotation = rotation_from_down(&direction);

        if self.end_pending {
            let finished = self.close_line(&frame(current, rotation), previous)?;
            return Ok(finished);
        }

        if self.active.is_none() {
            let mut builder = StrokeMeshBuilder::new(Arc::clone(&self.templates));
            builder.add_start_cap(&frame(previous, rotation), previous)?;
            debug!("stroke started");
            self.active = Some(builder);
        }
        if let Some(builder) = self.active.as_mut() {
            builder.add_segment(&frame(current, rotation), current, direction, distance)?;
        }
        self.previous = Some(current);
        Ok(None)
    }

    /// Close the active line with its end cap and hand over the mesh.
    fn close_line(
        &mut self,
        transform: &Isometry3<f64>,
        origin: Point3<f64>,
    ) -> PenResult<Option<StrokeMesh>> {
        let finished = match self.active.take() {
            Some(mut builder) => {
                builder.add_end_cap(transform, origin)?;
                let mesh = builder.finish()?;
                debug!(
                    vertices = mesh.vertex_count(),
                    faces = mesh.face_count(),
                    "stroke finished"
                );
                Some(mesh)
            }
            // Pressed and released without ever moving far enough.
            None => None,
        };

        self.previous = None;
        self.drawing = false;
        self.end_pending = false;
        Ok(finished)
    }
}

fn frame(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Isometry3<f64> {
    Isometry3::from_parts(position.coords.into(), rotation)
}
