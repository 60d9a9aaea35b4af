//! Precomputed local-space vertex templates for stroke tube meshes.
//!
//! A drawn stroke is a tube capped with two hemispheres. The vertices of
//! both caps and of the tube's cross-section circle depend only on the
//! stroke thickness and the circumferential segment count, so they are
//! computed once per configuration and shared read-only by every stroke
//! drawn in a session.
//!
//! # Template Space
//!
//! All template vertices are expressed in a local frame centered at the
//! origin, with the cap axis along Y. The builder orients and positions
//! them per drawing sample with a rigid transform.
//!
//! # Seam
//!
//! Every latitude ring and the cross-section circle duplicate their first
//! vertex at the last longitude index, closing the seam: the vertex at
//! longitude `segment_count` equals the vertex at longitude `0`.
//!
//! # Example
//!
//! ```
//! use stroke_templates::{StrokeTemplates, TemplateConfig};
//!
//! let config = TemplateConfig::new(12, 0.01).unwrap();
//! let templates = StrokeTemplates::generate(&config);
//!
//! // 12 segments -> 4 latitude rings per cap
//! assert_eq!(templates.latitude_count(), 4);
//! assert_eq!(templates.upper_cap().len(), 13 * 4 + 1);
//! assert_eq!(templates.cross_section().len(), 13);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod grid;
mod templates;

pub use error::{TemplateError, TemplateResult};
pub use grid::CapGrid;
pub use templates::{StrokeTemplates, TemplateConfig};
