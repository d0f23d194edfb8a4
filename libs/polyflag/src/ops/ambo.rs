//! # Ambo
//!
//! Rectification: one vertex per edge midpoint, one face per input face and
//! one per input vertex. `ambo(dual(M))` and `ambo(M)` share their topology.

use crate::error::PolyResult;
use crate::flag::{FastFlags, FlagSet, Key4};
use crate::mesh::Mesh;

use super::utils::{midpoint, triplets};

/// Truncates every vertex down to the edge midpoints.
pub fn ambo(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let vertex_faces = mesh.face_count();
    let mut flags = FastFlags::new();

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2, v3) in triplets(face) {
            flags.new_vertex(Key4::edge(v1, v2), midpoint(vertices[v1], vertices[v2]));
            // shrunk original face
            flags.new_flag(Key4::of1(i), Key4::edge(v1, v2), Key4::edge(v2, v3));
            // face replacing vertex v2
            flags.new_flag(
                Key4::of1(vertex_faces + v2),
                Key4::edge(v2, v3),
                Key4::edge(v1, v2),
            );
        }
    }

    flags.resolve(&format!("a{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::dual;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    #[test]
    fn test_ambo_cube_is_cuboctahedron() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        let out = ambo(&cube).unwrap();
        assert_eq!(out.vertex_count(), 12);
        assert_eq!(out.face_count(), 14);
        let histogram = out.face_side_histogram();
        assert_eq!(histogram.get(&4), Some(&6));
        assert_eq!(histogram.get(&3), Some(&8));
        assert_eq!(out.name(), "aC");
        out.check_closed_manifold().unwrap();
    }

    #[test]
    fn test_ambo_of_dual_matches_counts() {
        let dodeca = StandardSeeds.generate(SeedKind::Dodecahedron, 0).unwrap();
        let direct = ambo(&dodeca).unwrap();
        let via_dual = ambo(&dual(&dodeca).unwrap()).unwrap();
        assert_eq!(direct.vertex_count(), via_dual.vertex_count());
        assert_eq!(direct.face_count(), via_dual.face_count());
        assert_eq!(direct.edge_count(), via_dual.edge_count());
    }

    #[test]
    fn test_ambo_vertices_are_midpoints() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = ambo(&tetra).unwrap();
        let radius = out.vertex(0).length();
        for v in out.vertices() {
            approx::assert_relative_eq!(v.length(), radius, epsilon = 1e-9);
        }
    }
}
