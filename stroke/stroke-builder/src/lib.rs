//! Incremental tube mesh assembly for drawn strokes.
//!
//! A stroke's mesh grows while the user draws: an opening hemisphere cap,
//! one cross-section ring per movement sample, and a closing hemisphere
//! cap. [`StrokeMeshBuilder`] owns the growing buffers for one stroke and
//! stitches each new ring of geometry to the previous one, consuming the
//! immutable vertex templates from `stroke-templates`.
//!
//! # Lifecycle
//!
//! ```text
//! Empty -> add_start_cap -> Capped -> add_segment* -> add_end_cap -> Closed
//! ```
//!
//! Out-of-sequence calls are rejected with [`BuildError`]; a closed stroke
//! is handed over as an immutable [`stroke_types::StrokeMesh`] via
//! [`StrokeMeshBuilder::finish`].
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use nalgebra::{Isometry3, Point3, Vector3};
//! use stroke_templates::{StrokeTemplates, TemplateConfig};
//! use stroke_builder::StrokeMeshBuilder;
//!
//! let config = TemplateConfig::new(12, 0.01).unwrap();
//! let templates = Arc::new(StrokeTemplates::generate(&config));
//!
//! let mut builder = StrokeMeshBuilder::new(Arc::clone(&templates));
//! let tip = Point3::origin();
//! builder.add_start_cap(&Isometry3::translation(0.0, 0.0, 0.0), tip).unwrap();
//! builder.add_end_cap(&Isometry3::translation(0.0, 0.0, 0.0), tip).unwrap();
//!
//! let mesh = builder.finish().unwrap();
//! assert_eq!(
//!     mesh.vertex_count(),
//!     templates.upper_cap_len() + templates.lower_cap_len(),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod error;

pub use builder::{BuilderState, StrokeMeshBuilder};
pub use error::{BuildError, BuildResult};
