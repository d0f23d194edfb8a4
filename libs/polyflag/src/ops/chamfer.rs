//! # Chamfer
//!
//! Edge truncation: every edge is replaced by a hexagon and every face
//! shrinks in place. The input vertices move away from the origin by a
//! factor of `1 + distance`.

use crate::error::PolyResult;
use crate::flag::{FastFlags, FlagSet, Key4};
use crate::mesh::Mesh;

use super::utils::corners;

/// Chamfers every edge.
///
/// Each face gets its own copy of its corners, pushed `1.5 * distance`
/// along the face normal.
pub fn chamfer(mesh: &Mesh, distance: f64) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let normals = mesh.face_normals();
    let mut flags = FastFlags::new();

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2) in corners(face) {
            flags.new_vertex(Key4::of1(v2), vertices[v2] * (1.0 + distance));
            flags.new_vertex(
                Key4::of2(i, v2),
                vertices[v2] + normals[i] * (1.5 * distance),
            );

            flags.new_flag(Key4::of1(i), Key4::of2(i, v1), Key4::of2(i, v2));

            let hex = Key4::edge(v1, v2);
            flags.new_flag(hex, Key4::of1(v2), Key4::of2(i, v2));
            flags.new_flag(hex, Key4::of2(i, v2), Key4::of2(i, v1));
            flags.new_flag(hex, Key4::of2(i, v1), Key4::of1(v1));
        }
    }

    flags.resolve(&format!("c{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};
    use approx::assert_relative_eq;

    #[test]
    fn test_chamfer_cube() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        let out = chamfer(&cube, 0.5).unwrap();
        // V + 2E vertices, F + E faces
        assert_eq!(out.vertex_count(), 8 + 24);
        assert_eq!(out.face_count(), 6 + 12);
        let histogram = out.face_side_histogram();
        assert_eq!(histogram.get(&6), Some(&12));
        assert_eq!(histogram.get(&4), Some(&6));
        assert_eq!(out.name(), "cC");
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_chamfer_scales_original_vertices() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = chamfer(&tetra, 0.2).unwrap();
        for v in tetra.vertices() {
            let nearest = out
                .vertices()
                .iter()
                .map(|p| p.distance(*v * 1.2))
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(nearest, 0.0, epsilon = 1e-12);
        }
    }
}
