//! End-to-end geometry checks for a straight drawn stroke.

use std::sync::Arc;

use approx::assert_relative_eq;
use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector3};
use stroke_builder::StrokeMeshBuilder;
use stroke_templates::{StrokeTemplates, TemplateConfig};
use stroke_types::StrokeMesh;

const SEGS: usize = 12;
const THICKNESS: f64 = 0.01;
const LENGTH: f64 = 10.0;
const STEPS: usize = 100;

fn frame_at(position: Point3<f64>, direction: Vector3<f64>) -> Isometry3<f64> {
    let rotation =
        UnitQuaternion::rotation_between(&-Vector3::y(), &direction).unwrap_or_else(|| {
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI)
        });
    Isometry3::from_parts(position.coords.into(), rotation)
}

/// Draw a straight stroke of `LENGTH` along `direction` in `STEPS` samples.
fn draw_straight(direction: Vector3<f64>) -> StrokeMesh {
    let config = TemplateConfig::new(SEGS, THICKNESS).expect("valid config");
    let templates = Arc::new(StrokeTemplates::generate(&config));
    let mut builder = StrokeMeshBuilder::new(templates);

    let step = LENGTH / STEPS as f64;
    let mut at = Point3::origin();

    builder
        .add_start_cap(&frame_at(at, direction), at)
        .expect("start cap");
    for _ in 0..STEPS {
        at += direction * step;
        builder
            .add_segment(&frame_at(at, direction), at, direction, step)
            .expect("segment");
    }
    builder
        .add_end_cap(&frame_at(at, direction), at)
        .expect("end cap");

    builder.finish().expect("closed stroke")
}

#[test]
fn interior_cross_sections_lie_on_circles() {
    let direction = Vector3::y();
    let mesh = draw_straight(direction);

    let config = TemplateConfig::new(SEGS, THICKNESS).expect("valid config");
    let templates = StrokeTemplates::generate(&config);
    let upper_len = templates.upper_cap_len();
    let ring_len = templates.cross_section_len();
    let radius = templates.radius();
    let step = LENGTH / STEPS as f64;

    // Each interior ring's vertices sit on a circle of radius
    // `thickness / 2` centered on the path axis at its sample point.
    for ring in 0..STEPS {
        let center = Point3::origin() + direction * (step * (ring + 1) as f64);
        let start = upper_len + ring * ring_len;

        for v in &mesh.positions[start..start + ring_len] {
            let radial = v - center;
            assert_relative_eq!(radial.norm(), radius, epsilon = 1e-9);
            // Ring plane is perpendicular to the path.
            assert_relative_eq!(radial.dot(&direction), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn stroke_spans_path_length_plus_caps() {
    let mesh = draw_straight(Vector3::y());
    let bounds = mesh.bounds();

    let radius = THICKNESS / 2.0;
    assert_relative_eq!(bounds.min.y, -radius, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.y, LENGTH + radius, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.x, radius, epsilon = 1e-9);
    assert_relative_eq!(bounds.min.z, -radius, epsilon = 1e-9);
}

#[test]
fn off_axis_direction_produces_same_tube() {
    let direction = Vector3::new(1.0, 1.0, 0.0).normalize();
    let mesh = draw_straight(direction);

    let config = TemplateConfig::new(SEGS, THICKNESS).expect("valid config");
    let templates = StrokeTemplates::generate(&config);
    let upper_len = templates.upper_cap_len();
    let ring_len = templates.cross_section_len();
    let step = LENGTH / STEPS as f64;

    for ring in [0, STEPS / 2, STEPS - 1] {
        let center = Point3::origin() + direction * (step * (ring + 1) as f64);
        let start = upper_len + ring * ring_len;

        for v in &mesh.positions[start..start + ring_len] {
            assert_relative_eq!((v - center).norm(), templates.radius(), epsilon = 1e-9);
        }
    }
}

#[test]
fn volume_approximates_capsule() {
    let mesh = draw_straight(Vector3::y());
    let r = THICKNESS / 2.0;

    // Cylinder + sphere, both under-approximated by the coarse polygonal
    // cross-section, so compare with a generous tolerance.
    let capsule = std::f64::consts::PI * r * r * LENGTH
        + 4.0 / 3.0 * std::f64::consts::PI * r * r * r;
    let volume = mesh.signed_volume();

    assert!(volume > 0.0);
    assert!(volume < capsule);
    assert!(volume > capsule * 0.9);
}
