//! # Mesh Module
//!
//! Face-vertex polyhedron representation shared by every operator.
//!
//! ## Structure
//!
//! - `Mesh` - name, vertex positions and ordered faces
//! - `attributes` - per-face centroid, normal and color, per-vertex normals
//! - `topology` - edge count, Euler characteristic, manifold closure check
//!
//! ## Example
//!
//! ```rust
//! use polyflag::Mesh;
//! use glam::DVec3;
//!
//! let mesh = Mesh::new(
//!     "tri",
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![vec![0, 1, 2]],
//! );
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.face_normals()[0], DVec3::Z);
//! ```

mod attributes;
mod topology;


pub use attributes::DerivedAttributes;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Ordered cycle of vertex indices, counter-clockwise seen from outside.
pub type Face = Vec<usize>;

// =============================================================================
// MESH STRUCT
// =============================================================================

/// A polyhedron as vertex positions plus faces indexing into them.
///
/// All geometry uses f64. Conversion to f32 only happens when building
/// [`crate::RenderBuffers`].
///
/// Operators never mutate their input; they return a new `Mesh`. The only
/// in-place mutation is [`Mesh::recalc`], which refreshes the cached
/// [`DerivedAttributes`] once construction is finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Construction history, e.g. `"kdC"`.
    name: String,
    /// Vertex positions; the index is the vertex identity.
    vertices: Vec<DVec3>,
    /// Faces as vertex index cycles.
    faces: Vec<Face>,
    /// Attributes cached by `recalc`.
    #[serde(skip)]
    derived: Option<DerivedAttributes>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a mesh from its parts.
    ///
    /// Face indices are not checked here; an out-of-range index panics in
    /// the first geometric query that touches it.
    pub fn new(name: impl Into<String>, vertices: Vec<DVec3>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
            derived: None,
        }
    }

    /// Creates the empty mesh: no name, no vertices, no faces.
    pub fn empty() -> Self {
        Self::default()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Returns the construction history label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mesh with a new label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        self.vertices[index]
    }

    /// Returns the side count of every face.
    pub fn face_sides(&self) -> Vec<usize> {
        self.faces.iter().map(Vec::len).collect()
    }

    /// Returns the positions of a face's corners in order.
    pub fn face_points(&self, face: usize) -> Vec<DVec3> {
        self.faces[face].iter().map(|&v| self.vertices[v]).collect()
    }

    /// Consumes the mesh, returning its vertices and faces.
    pub fn into_parts(self) -> (String, Vec<DVec3>, Vec<Face>) {
        (self.name, self.vertices, self.faces)
    }
}
