//! # Perspectiva
//!
//! Stellation-like operator from Jamnitzer's *Perspectiva Corporum
//! Regularium*: every face is inset through points halfway between its
//! edge midpoints and its centroid, and each edge is replaced by two
//! triangles.

use crate::error::PolyResult;
use crate::flag::{FlagSet, LabelFlags};
use crate::mesh::Mesh;

use super::utils::{midpoint, triplets};

fn stellated_label(a: usize, b: usize) -> String {
    format!("s{a}-{b}")
}

/// Applies the first Perspectiva construction.
pub fn perspectiva1(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let centers = mesh.face_centers();

    let mut flags = LabelFlags::new();
    for (v, p) in vertices.iter().enumerate() {
        flags.new_vertex(LabelFlags::vertex_label(v), *p);
    }

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2, v3) in triplets(face) {
            let s12 = stellated_label(v1, v2);
            let s21 = stellated_label(v2, v1);
            let s23 = stellated_label(v2, v3);
            let (p1, p2) = (LabelFlags::vertex_label(v1), LabelFlags::vertex_label(v2));

            flags.new_vertex(
                &s12,
                midpoint(midpoint(vertices[v1], vertices[v2]), centers[i]),
            );

            flags.new_flag(format!("in{i}"), &s12, &s23);

            // remainder of the face around corner v2
            let corner = format!("c{i}-{v2}");
            flags.new_flag(&corner, &s23, &s12);
            flags.new_flag(&corner, &s12, &p2);
            flags.new_flag(&corner, &p2, &s23);

            // one of the two triangles replacing edge v1 - v2
            let edge = format!("e{v1}-{v2}");
            flags.new_flag(&edge, &p1, &s21);
            flags.new_flag(&edge, &s21, &s12);
            flags.new_flag(&edge, &s12, &p1);
        }
    }

    flags.resolve(&format!("P{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    #[test]
    fn test_perspectiva_cube() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        let out = perspectiva1(&cube).unwrap();
        // V + sum(sides) vertices, F + sum(sides) + 2E faces
        assert_eq!(out.vertex_count(), 8 + 24);
        assert_eq!(out.face_count(), 6 + 24 + 24);
        assert_eq!(out.face_side_histogram().get(&3), Some(&48));
        assert_eq!(out.name(), "PC");
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }
}
