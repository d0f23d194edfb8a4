//! # Reflect
//!
//! Point reflection through the origin. Negating every coordinate flips
//! orientation, so every face is reversed to stay counter-clockwise.

use crate::mesh::Mesh;

/// Returns the mirror image of `mesh`.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, Mesh};
/// use glam::DVec3;
///
/// let tri = Mesh::new("t", vec![DVec3::X, DVec3::Y, DVec3::Z], vec![vec![0, 1, 2]]);
/// let mirrored = ops::reflect(&tri);
/// assert_eq!(mirrored.vertex(0), DVec3::NEG_X);
/// assert_eq!(mirrored.faces(), &[vec![2, 1, 0]]);
/// assert_eq!(mirrored.name(), "rt");
/// ```
pub fn reflect(mesh: &Mesh) -> Mesh {
    let vertices = mesh.vertices().iter().map(|v| -*v).collect();
    let faces = mesh
        .faces()
        .iter()
        .map(|f| f.iter().rev().copied().collect())
        .collect();
    Mesh::new(format!("r{}", mesh.name()), vertices, faces)
}
