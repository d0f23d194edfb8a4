//! # Hollow
//!
//! Skeletonizes a polyhedron: every face gets a window, and the shell is
//! given a wall thickness so that the result stays a closed surface. The
//! output has genus `F - 1`, so its Euler characteristic is `4 - 2F`.

use crate::error::PolyResult;
use crate::flag::{FlagSet, LabelFlags};
use crate::mesh::Mesh;

use super::dual::dual;
use super::utils::{corners, tween};

/// Cuts a window into every face.
///
/// The window corners sit `inset` of the way toward the face centroid; the
/// inner shell lies `thickness` below the outer one.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let frame = ops::hollow(&cube, 0.5, 0.1)?;
/// assert_eq!(frame.euler_characteristic(), 4 - 2 * 6);
/// frame.check_closed_manifold()?;
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn hollow(mesh: &Mesh, inset: f64, thickness: f64) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let centers = mesh.face_centers();
    let normals = mesh.face_normals();

    // dual face j surrounds vertex j when every vertex is in use
    let dual_normals = dual(mesh)?.face_normals();
    let down = if dual_normals.len() == mesh.vertex_count() {
        dual_normals
    } else {
        mesh.vertex_normals()
    };

    let mut flags = LabelFlags::new();
    for (v, p) in vertices.iter().enumerate() {
        flags.new_vertex(LabelFlags::vertex_label(v), *p);
        flags.new_vertex(format!("d{v}"), *p - down[v] * thickness);
    }

    for (i, face) in mesh.faces().iter().enumerate() {
        for &v in face {
            let window = tween(vertices[v], centers[i], inset);
            flags.new_vertex(format!("fi{i}-{v}"), window);
            flags.new_vertex(format!("fd{i}-{v}"), window - normals[i] * thickness);
        }
    }

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2) in corners(face) {
            let (p1, p2) = (LabelFlags::vertex_label(v1), LabelFlags::vertex_label(v2));
            let (d1, d2) = (format!("d{v1}"), format!("d{v2}"));
            let (in1, in2) = (format!("fi{i}-{v1}"), format!("fi{i}-{v2}"));
            let (down1, down2) = (format!("fd{i}-{v1}"), format!("fd{i}-{v2}"));

            let outer = format!("o{i}-{v1}");
            flags.new_flag(&outer, &p1, &p2);
            flags.new_flag(&outer, &p2, &in2);
            flags.new_flag(&outer, &in2, &in1);
            flags.new_flag(&outer, &in1, &p1);

            let side = format!("s{i}-{v1}");
            flags.new_flag(&side, &in1, &in2);
            flags.new_flag(&side, &in2, &down2);
            flags.new_flag(&side, &down2, &down1);
            flags.new_flag(&side, &down1, &in1);

            let bottom = format!("b{i}-{v1}");
            flags.new_flag(&bottom, &d2, &d1);
            flags.new_flag(&bottom, &d1, &down1);
            flags.new_flag(&bottom, &down1, &down2);
            flags.new_flag(&bottom, &down2, &d2);
        }
    }

    flags.resolve(&format!("H{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    #[test]
    fn test_hollow_counts() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = hollow(&tetra, 0.5, 0.1).unwrap();
        // 2V + 2 * sum(sides) vertices, 3 * sum(sides) quads
        assert_eq!(out.vertex_count(), 8 + 24);
        assert_eq!(out.face_count(), 36);
        assert!(out.faces().iter().all(|f| f.len() == 4));
        assert_eq!(out.name(), "HT");
    }

    #[test]
    fn test_hollow_is_closed_with_genus() {
        let dodeca = StandardSeeds.generate(SeedKind::Dodecahedron, 0).unwrap();
        let out = hollow(&dodeca, 0.4, 0.05).unwrap();
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 4 - 2 * 12);
    }

    #[test]
    fn test_hollow_inner_shell_is_inside() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        let out = hollow(&cube, 0.5, 0.1).unwrap();
        let outer = cube.vertex(0).length();
        let innermost = out
            .vertices()
            .iter()
            .map(|v| v.length())
            .fold(f64::INFINITY, f64::min);
        assert!(innermost < outer);
    }
}
