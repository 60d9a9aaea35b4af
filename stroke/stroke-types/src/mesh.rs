//! Indexed triangle mesh with parallel position/normal buffers.

use crate::{Aabb, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh for a single drawn stroke.
///
/// Unlike a general-purpose mesh with optional vertex attributes, a stroke
/// mesh always carries one unit normal per vertex: the `positions` and
/// `normals` buffers are parallel by construction and stay parallel through
/// every append.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// Normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use stroke_types::{StrokeMesh, Point3, Vector3};
///
/// let mut mesh = StrokeMesh::new();
/// mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
/// mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
/// mesh.push_vertex(Point3::new(0.5, 1.0, 0.0), Vector3::z());
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrokeMesh {
    /// Vertex positions in world space.
    pub positions: Vec<Point3<f64>>,

    /// Outward unit normals, parallel to `positions`.
    pub normals: Vec<Vector3<f64>>,

    /// Triangle faces as indices into the vertex buffers.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl StrokeMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from its three buffers.
    ///
    /// Returns `None` if `positions` and `normals` differ in length.
    #[must_use]
    pub fn from_parts(
        positions: Vec<Point3<f64>>,
        normals: Vec<Vector3<f64>>,
        faces: Vec<[u32; 3]>,
    ) -> Option<Self> {
        if positions.len() != normals.len() {
            return None;
        }
        Some(Self {
            positions,
            normals,
            faces,
        })
    }

    /// Append one vertex with its normal.
    #[inline]
    pub fn push_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position);
        self.normals.push(normal);
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Reserve capacity for additional vertices and faces.
    ///
    /// Growth beyond the reservation is amortized by `Vec`, so repeated
    /// appends while a stroke grows stay O(total vertices).
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.positions.reserve(additional_vertices);
        self.normals.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Check that every face index references an existing vertex.
    #[must_use]
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.positions.len();
        self.faces
            .iter()
            .all(|f| f.iter().all(|&i| (i as usize) < n))
    }

    /// Get a face's triangle with resolved vertex positions.
    ///
    /// Returns `None` if the face index is out of bounds or references a
    /// missing vertex.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = *self.faces.get(face_index)?;
        Some(Triangle::new(
            *self.positions.get(i0 as usize)?,
            *self.positions.get(i1 as usize)?,
            *self.positions.get(i2 as usize)?,
        ))
    }

    /// Iterate over all faces as triangles with resolved positions.
    ///
    /// Faces with out-of-bounds indices are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem over signed tetrahedra against the
    /// origin. For a closed mesh with outward CCW winding the result is
    /// positive; near-zero means the mesh is open or inconsistently wound.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for tri in self.triangles() {
            let cross = tri.v1.coords.cross(&tri.v2.coords);
            volume += tri.v0.coords.dot(&cross);
        }

        volume / 6.0
    }

    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}
