//! # Quinto
//!
//! A pentagon for every face corner plus an inset copy of every face.

use crate::error::PolyResult;
use crate::flag::{FastFlags, FlagSet, Key4};
use crate::mesh::Mesh;

use super::utils::{midpoint, triplets};

/// Builds, for every corner, a pentagon from the corner, the two adjacent
/// edge midpoints and two points halfway from those midpoints to the face
/// centroid.
pub fn quinto(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let centers = mesh.face_centers();
    let mut flags = FastFlags::new();

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2, v3) in triplets(face) {
            let mid = midpoint(vertices[v1], vertices[v2]);
            let mid12 = Key4::edge(v1, v2);
            let mid23 = Key4::edge(v2, v3);
            let inner12 = Key4::edge_in(i, v1, v2);
            let inner23 = Key4::edge_in(i, v2, v3);

            flags.new_vertex(mid12, mid);
            flags.new_vertex(inner12, midpoint(mid, centers[i]));
            flags.new_vertex(Key4::of1(v2), vertices[v2]);

            let pentagon = Key4::of2(i, v2);
            flags.new_flag(pentagon, inner12, mid12);
            flags.new_flag(pentagon, mid12, Key4::of1(v2));
            flags.new_flag(pentagon, Key4::of1(v2), mid23);
            flags.new_flag(pentagon, mid23, inner23);
            flags.new_flag(pentagon, inner23, inner12);

            flags.new_flag(Key4::of1(i), inner12, inner23);
        }
    }

    flags.resolve(&format!("q{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    #[test]
    fn test_quinto_cube() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        let out = quinto(&cube).unwrap();
        // V + E + sum(sides) vertices, F + sum(sides) faces
        assert_eq!(out.vertex_count(), 8 + 12 + 24);
        assert_eq!(out.face_count(), 6 + 24);
        assert_eq!(out.face_side_histogram().get(&5), Some(&24));
        assert_eq!(out.name(), "qC");
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_quinto_inner_face_is_smaller() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = quinto(&tetra).unwrap();
        let triangles = out.faces().iter().filter(|f| f.len() == 3).count();
        assert_eq!(triangles, 4);
        out.check_closed_manifold().unwrap();
    }
}
