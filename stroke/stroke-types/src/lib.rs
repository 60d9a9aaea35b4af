//! Core geometry buffer types for stroke drawing.
//!
//! This crate provides the foundational types shared by the stroke
//! pipeline:
//!
//! - [`StrokeMesh`] - Parallel vertex/normal buffers with indexed triangles
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Memory Layout
//!
//! A [`StrokeMesh`] keeps three flat buffers: vertex positions, per-vertex
//! unit normals (always parallel to positions), and triangle faces as
//! `[u32; 3]` indices. This is the exact triple handed to a renderer for
//! upload or to persistence for serialization.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** with `f64` coordinates.
//! Face winding is **counter-clockwise (CCW) when viewed from outside**;
//! normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use stroke_types::{StrokeMesh, Point3, Vector3};
//!
//! let mut mesh = StrokeMesh::new();
//! mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
//! mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
//! mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z());
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.indices_in_bounds());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use mesh::StrokeMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
