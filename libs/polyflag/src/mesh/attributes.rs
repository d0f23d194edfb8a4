//! Per-face and per-vertex attributes derived from geometry.

use config::constants::face_color;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::Mesh;

/// Attributes refreshed by [`Mesh::recalc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    /// Mean of each face's corners.
    pub centers: Vec<DVec3>,
    /// Unit outward normal of each face.
    pub normals: Vec<DVec3>,
    /// RGBA color of each face, chosen by side count.
    pub colors: Vec<[f32; 4]>,
    /// Mean of the normals of the faces around each vertex.
    pub vertex_normals: Vec<DVec3>,
}

impl Mesh {
    /// Returns the centroid of every face.
    pub fn face_centers(&self) -> Vec<DVec3> {
        self.faces
            .iter()
            .map(|face| {
                let sum: DVec3 = face.iter().map(|&v| self.vertices[v]).sum();
                sum / face.len().max(1) as f64
            })
            .collect()
    }

    /// Returns the unit normal of every face.
    ///
    /// The normal is the normalized sum of the cross products at every
    /// corner, which stays stable for slightly non-planar faces. A degenerate
    /// face gets the zero vector.
    pub fn face_normals(&self) -> Vec<DVec3> {
        self.faces
            .iter()
            .map(|face| {
                let n = face.len();
                let mut sum = DVec3::ZERO;
                for i in 0..n {
                    let a = self.vertices[face[i]];
                    let b = self.vertices[face[(i + 1) % n]];
                    let c = self.vertices[face[(i + 2) % n]];
                    sum += (b - a).cross(c - b);
                }
                sum.normalize_or_zero()
            })
            .collect()
    }

    /// Returns the palette color of every face.
    pub fn face_colors(&self) -> Vec<[f32; 4]> {
        self.faces.iter().map(|face| face_color(face.len())).collect()
    }

    /// Returns the averaged normal of every vertex.
    ///
    /// Vertices not referenced by any face get the zero vector.
    pub fn vertex_normals(&self) -> Vec<DVec3> {
        self.vertex_normals_from(&self.face_normals())
    }

    fn vertex_normals_from(&self, face_normals: &[DVec3]) -> Vec<DVec3> {
        let mut sums = vec![DVec3::ZERO; self.vertices.len()];
        for (face, normal) in self.faces.iter().zip(face_normals) {
            for &v in face {
                sums[v] += *normal;
            }
        }
        sums.into_iter().map(DVec3::normalize_or_zero).collect()
    }

    /// Refreshes the cached attributes.
    ///
    /// Call once construction is finished and before rendering.
    pub fn recalc(&mut self) {
        let normals = self.face_normals();
        let vertex_normals = self.vertex_normals_from(&normals);
        self.derived = Some(DerivedAttributes {
            centers: self.face_centers(),
            normals,
            colors: self.face_colors(),
            vertex_normals,
        });
    }

    /// Returns the cached attributes, `None` until [`Mesh::recalc`] runs.
    pub fn derived(&self) -> Option<&DerivedAttributes> {
        self.derived.as_ref()
    }
}
