//! Driver turning tick-aligned path samples into stroke meshes.
//!
//! A [`Pen`] consumes an ordered stream of [`PathSample`]s (3D position +
//! pressed flag, delivered at a fixed tick rate) and drives one
//! `stroke_builder::StrokeMeshBuilder` per drawn line:
//!
//! - a pressed `false -> true` transition begins a line
//! - sufficient movement while pressed appends tube segments
//! - a `true -> false` transition closes the line with its end cap on the
//!   next sufficient movement
//!
//! Movement below `0.3 x thickness` is skipped entirely, which avoids
//! piling up closely spaced rings while the controller hovers and keeps
//! zero-length directions out of the geometry.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nalgebra::Point3;
//! use stroke_templates::{StrokeTemplates, TemplateConfig};
//! use stroke_pen::{PathSample, Pen};
//!
//! let config = TemplateConfig::new(12, 0.01).unwrap();
//! let templates = Arc::new(StrokeTemplates::generate(&config));
//! let mut pen = Pen::new(templates);
//!
//! let mut finished = Vec::new();
//! for tick in 0..20 {
//!     let sample = PathSample {
//!         position: Point3::new(0.01 * f64::from(tick), 0.0, 0.0),
//!         pressed: tick < 15,
//!     };
//!     if let Some(mesh) = pen.process_sample(&sample).unwrap() {
//!         finished.push(mesh);
//!     }
//! }
//!
//! assert_eq!(finished.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod pen;
mod sample;

pub use error::{PenError, PenResult};
pub use pen::{rotation_from_down, Pen};
pub use sample::PathSample;
