//! Template vertex generation for hemisphere caps and cross-sections.

use std::f64::consts::{PI, TAU};

use nalgebra::Point3;

use crate::error::{TemplateError, TemplateResult};
use crate::grid::CapGrid;

/// Validated configuration for stroke template generation.
///
/// # Derived Quantities
///
/// - `latitude_count = segment_count / 3` (integer division): latitude
///   rings per hemisphere cap.
/// - `radius = thickness / 2`.
///
/// # Example
///
/// ```
/// use stroke_templates::TemplateConfig;
///
/// let config = TemplateConfig::new(12, 0.01).unwrap();
/// assert_eq!(config.latitude_count(), 4);
/// assert!((config.radius() - 0.005).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateConfig {
    segment_count: usize,
    thickness: f64,
}

impl TemplateConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `segment_count` is less than 3 (a ring needs at least a triangle)
    /// - `thickness` is not a positive finite number
    pub fn new(segment_count: usize, thickness: f64) -> TemplateResult<Self> {
        if segment_count < 3 {
            return Err(TemplateError::TooFewSegments {
                min: 3,
                actual: segment_count,
            });
        }
        if thickness <= 0.0 || !thickness.is_finite() {
            return Err(TemplateError::InvalidThickness(thickness));
        }

        Ok(Self {
            segment_count,
            thickness,
        })
    }

    /// Number of circumferential segments.
    #[inline]
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Stroke thickness (tube diameter).
    #[inline]
    #[must_use]
    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Tube radius (`thickness / 2`).
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.thickness * 0.5
    }

    /// Latitude rings per hemisphere cap (`segment_count / 3`).
    #[inline]
    #[must_use]
    pub const fn latitude_count(&self) -> usize {
        self.segment_count / 3
    }
}

/// Immutable local-space vertex templates shared by all strokes.
///
/// Holds three vertex arrays generated once from a [`TemplateConfig`]:
///
/// - **upper cap**: hemisphere opening a stroke, apex first
/// - **lower cap**: hemisphere closing a stroke, nadir last
/// - **cross section**: one ring of the tube body, in the local XZ plane
///
/// The two cap parameterizations share their polar-angle progression so
/// that the lower cap's first ring continues smoothly from the upper cap's
/// equator when both terminate the same tube.
///
/// Generation is deterministic and the arrays never change afterwards, so
/// a `StrokeTemplates` behind an `Arc` is safely shared by any number of
/// concurrently built strokes.
#[derive(Debug, Clone)]
pub struct StrokeTemplates {
    config: TemplateConfig,
    upper_cap: Vec<Point3<f64>>,
    lower_cap: Vec<Point3<f64>>,
    cross_section: Vec<Point3<f64>>,
}

impl StrokeTemplates {
    /// Generate all three template arrays for a configuration.
    #[must_use]
    pub fn generate(config: &TemplateConfig) -> Self {
        Self {
            config: *config,
            upper_cap: generate_upper_cap(config),
            lower_cap: generate_lower_cap(config),
            cross_section: generate_cross_section(config),
        }
    }

    /// The configuration these templates were generated from.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Number of circumferential segments.
    #[inline]
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.config.segment_count()
    }

    /// Latitude rings per hemisphere cap.
    #[inline]
    #[must_use]
    pub const fn latitude_count(&self) -> usize {
        self.config.latitude_count()
    }

    /// Tube radius.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.config.radius()
    }

    /// Indexer for the ring layout shared by caps and cross-sections.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> CapGrid {
        CapGrid::new(self.config.segment_count())
    }

    /// Upper hemisphere cap vertices, apex at index 0.
    #[inline]
    #[must_use]
    pub fn upper_cap(&self) -> &[Point3<f64>] {
        &self.upper_cap
    }

    /// Lower hemisphere cap vertices, nadir at the last index.
    #[inline]
    #[must_use]
    pub fn lower_cap(&self) -> &[Point3<f64>] {
        &self.lower_cap
    }

    /// Cross-section circle vertices in the local XZ plane.
    #[inline]
    #[must_use]
    pub fn cross_section(&self) -> &[Point3<f64>] {
        &self.cross_section
    }

    /// Vertex count of the upper cap.
    ///
    /// Callers sizing destination buffers must use the size queries, not
    /// re-derive the counts from the configuration.
    #[inline]
    #[must_use]
    pub fn upper_cap_len(&self) -> usize {
        self.upper_cap.len()
    }

    /// Vertex count of the lower cap.
    #[inline]
    #[must_use]
    pub fn lower_cap_len(&self) -> usize {
        self.lower_cap.len()
    }

    /// Vertex count of the cross-section circle.
    #[inline]
    #[must_use]
    pub fn cross_section_len(&self) -> usize {
        self.cross_section.len()
    }
}

/// Azimuth for longitude `lon`, with the seam closed exactly.
///
/// The explicit modulo makes the vertex at `lon == segment_count` bitwise
/// equal to the vertex at `lon == 0` rather than merely close after a full
/// `2π` turn.
fn azimuth(lon: usize, segment_count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        TAU * ((lon % segment_count) as f64) / (segment_count as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
fn generate_upper_cap(config: &TemplateConfig) -> Vec<Point3<f64>> {
    let segs = config.segment_count();
    let lats = config.latitude_count();
    let radius = config.radius();
    let grid = CapGrid::new(segs);

    let mut vertices = vec![Point3::origin(); (segs + 1) * lats + 1];
    vertices[0] = Point3::new(0.0, radius, 0.0);

    for lat in 0..lats {
        let a1 = PI * (lat as f64).mul_add(0.5, 1.0) / ((lats + 1) as f64);
        let (sin1, cos1) = a1.sin_cos();

        for lon in 0..=segs {
            let (sin2, cos2) = azimuth(lon, segs).sin_cos();
            vertices[grid.cell(lat, lon)] =
                Point3::new(sin1 * cos2, cos1, sin1 * sin2) * radius;
        }
    }

    vertices
}

#[allow(clippy::cast_precision_loss)]
fn generate_lower_cap(config: &TemplateConfig) -> Vec<Point3<f64>> {
    let segs = config.segment_count();
    let lats = config.latitude_count();
    let radius = config.radius();

    let mut vertices = vec![Point3::origin(); (segs + 1) * lats + 1];

    for lat in 0..lats {
        // Polar angle continues where the upper cap's equator left off.
        let a1 = PI * ((lat as f64).mul_add(0.5, (lats as f64) * 0.5) + 1.0)
            / ((lats + 1) as f64);
        let (sin1, cos1) = a1.sin_cos();

        for lon in 0..=segs {
            let (sin2, cos2) = azimuth(lon, segs).sin_cos();
            // Rings start at slot 0 here; the nadir takes the final slot.
            vertices[lon + lat * (segs + 1)] =
                Point3::new(sin1 * cos2, cos1, sin1 * sin2) * radius;
        }
    }

    let last = vertices.len() - 1;
    vertices[last] = Point3::new(0.0, -radius, 0.0);

    vertices
}

fn generate_cross_section(config: &TemplateConfig) -> Vec<Point3<f64>> {
    let segs = config.segment_count();
    let radius = config.radius();

    (0..=segs)
        .map(|lon| {
            let (sin2, cos2) = azimuth(lon, segs).sin_cos();
            Point3::new(cos2, 0.0, sin2) * radius
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn templates(segs: usize, thickness: f64) -> StrokeTemplates {
        let config = TemplateConfig::new(segs, thickness).expect("valid config");
        StrokeTemplates::generate(&config)
    }

    #[test]
    fn config_rejects_too_few_segments() {
        assert!(matches!(
            TemplateConfig::new(2, 0.01),
            Err(TemplateError::TooFewSegments { min: 3, actual: 2 })
        ));
    }

    #[test]
    fn config_rejects_bad_thickness() {
        assert!(matches!(
            TemplateConfig::new(12, 0.0),
            Err(TemplateError::InvalidThickness(_))
        ));
        assert!(matches!(
            TemplateConfig::new(12, -0.5),
            Err(TemplateError::InvalidThickness(_))
        ));
        assert!(matches!(
            TemplateConfig::new(12, f64::NAN),
            Err(TemplateError::InvalidThickness(_))
        ));
    }

    #[test]
    fn upper_cap_size_and_apex() {
        for segs in [3, 10, 12, 24] {
            let t = templates(segs, 0.01);
            let lats = segs / 3;
            assert_eq!(t.upper_cap_len(), (segs + 1) * lats + 1);
            assert_relative_eq!(t.upper_cap()[0].y, t.radius(), epsilon = 1e-15);
            assert_relative_eq!(t.upper_cap()[0].x, 0.0, epsilon = 1e-15);
            assert_relative_eq!(t.upper_cap()[0].z, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn lower_cap_size_and_nadir() {
        let t = templates(12, 0.01);
        assert_eq!(t.lower_cap_len(), t.upper_cap_len());

        let nadir = t.lower_cap()[t.lower_cap_len() - 1];
        assert_relative_eq!(nadir.y, -t.radius(), epsilon = 1e-15);
        assert_relative_eq!(nadir.x, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn cross_section_size_and_radius() {
        let t = templates(16, 0.02);
        assert_eq!(t.cross_section_len(), 17);

        for v in t.cross_section() {
            assert_relative_eq!(v.coords.norm(), t.radius(), epsilon = 1e-12);
            assert_relative_eq!(v.y, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn seam_closes_exactly() {
        let t = templates(12, 0.01);
        let segs = t.segment_count();
        let grid = t.grid();

        for lat in 0..t.latitude_count() {
            let first = t.upper_cap()[grid.cell(lat, 0)];
            let last = t.upper_cap()[grid.cell(lat, segs)];
            assert_eq!(first, last);

            let first = t.lower_cap()[lat * (segs + 1)];
            let last = t.lower_cap()[segs + lat * (segs + 1)];
            assert_eq!(first, last);
        }

        assert_eq!(t.cross_section()[0], t.cross_section()[segs]);
    }

    #[test]
    fn all_cap_vertices_on_sphere() {
        let t = templates(15, 0.01);

        for v in t.upper_cap() {
            assert_relative_eq!(v.coords.norm(), t.radius(), epsilon = 1e-12);
            assert!(v.y >= 0.0);
        }
        for v in t.lower_cap() {
            assert_relative_eq!(v.coords.norm(), t.radius(), epsilon = 1e-12);
            assert!(v.y <= 1e-12);
        }
    }

    #[test]
    fn lower_cap_continues_upper_equator() {
        // The last upper-cap ring and first lower-cap ring straddle the
        // equator: polar angles advance by the same half-step.
        let t = templates(12, 0.01);
        let grid = t.grid();
        let lats = t.latitude_count();

        let upper_last = t.upper_cap()[grid.cell(lats - 1, 0)];
        let lower_first = t.lower_cap()[0];
        assert!(upper_last.y > lower_first.y);
        assert!(upper_last.y >= 0.0);
        assert!(lower_first.y < 0.0);
    }
}
