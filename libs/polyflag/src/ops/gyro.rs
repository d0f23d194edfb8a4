//! # Gyro, Propellor, Whirl
//!
//! The three twisting operators. Each places new points one third of the way
//! along every directed edge, so the two points on an edge are distinct and
//! the result is chiral. Input vertices are re-registered on the unit sphere.

use crate::error::PolyResult;
use crate::flag::{FlagSet, LabelFlags};
use crate::mesh::Mesh;

use super::utils::{one_third, triplets};

fn third_label(a: usize, b: usize) -> String {
    format!("e{a}-{b}")
}

/// Replaces every face corner with a pentagon around a new face-centre
/// vertex. `dual(gyro(M))` is the snub of `M`.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let out = ops::gyro(&cube)?;
/// assert_eq!(out.face_count(), 24);
/// assert!(out.faces().iter().all(|f| f.len() == 5));
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn gyro(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let mut flags = LabelFlags::from_mesh(mesh);

    for (i, center) in mesh.face_centers().into_iter().enumerate() {
        flags.new_vertex(format!("c{i}"), center.normalize_or_zero());
    }

    for (i, face) in mesh.faces().iter().enumerate() {
        let center = format!("c{i}");
        for (v1, v2, v3) in triplets(face) {
            let e12 = third_label(v1, v2);
            flags.new_vertex(&e12, one_third(vertices[v1], vertices[v2]));

            let fname = format!("f{i}-{v1}");
            flags.new_flag(&fname, &center, &e12);
            flags.new_flag(&fname, &e12, third_label(v2, v1));
            flags.new_flag(&fname, third_label(v2, v1), LabelFlags::vertex_label(v2));
            flags.new_flag(&fname, LabelFlags::vertex_label(v2), third_label(v2, v3));
            flags.new_flag(&fname, third_label(v2, v3), &center);
        }
    }

    flags.resolve(&format!("g{}", mesh.name()))
}

/// Rotates every face inside a ring of quadrilaterals, one per corner.
pub fn propellor(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let mut flags = LabelFlags::from_mesh(mesh);

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2, v3) in triplets(face) {
            let e12 = third_label(v1, v2);
            let e21 = third_label(v2, v1);
            let e23 = third_label(v2, v3);
            flags.new_vertex(&e12, one_third(vertices[v1], vertices[v2]));

            // rotated copy of the face
            flags.new_flag(format!("in{i}"), &e12, &e23);

            let fname = format!("f{i}-{v2}");
            flags.new_flag(&fname, &e12, &e21);
            flags.new_flag(&fname, &e21, LabelFlags::vertex_label(v2));
            flags.new_flag(&fname, LabelFlags::vertex_label(v2), &e23);
            flags.new_flag(&fname, &e23, &e12);
        }
    }

    flags.resolve(&format!("p{}", mesh.name()))
}

/// Gyro followed by truncating the face-centre vertices: two hexagons per
/// edge plus a rotated inner face per face.
pub fn whirl(mesh: &Mesh) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let centers = mesh.face_centers();
    let mut flags = LabelFlags::from_mesh(mesh);

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2, v3) in triplets(face) {
            let p12 = one_third(vertices[v1], vertices[v2]);
            let e12 = third_label(v1, v2);
            flags.new_vertex(&e12, p12);

            let cv1 = format!("c{i}-{v1}");
            let cv2 = format!("c{i}-{v2}");
            flags.new_vertex(&cv1, one_third(centers[i], p12).normalize_or_zero());

            let fname = format!("f{i}-{v1}");
            flags.new_flag(&fname, &cv1, &e12);
            flags.new_flag(&fname, &e12, third_label(v2, v1));
            flags.new_flag(&fname, third_label(v2, v1), LabelFlags::vertex_label(v2));
            flags.new_flag(&fname, LabelFlags::vertex_label(v2), third_label(v2, v3));
            flags.new_flag(&fname, third_label(v2, v3), &cv2);
            flags.new_flag(&fname, &cv2, &cv1);

            flags.new_flag(format!("in{i}"), &cv1, &cv2);
        }
    }

    flags.resolve(&format!("w{}", mesh.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    fn cube() -> Mesh {
        StandardSeeds.generate(SeedKind::Cube, 0).unwrap()
    }

    #[test]
    fn test_gyro_counts() {
        let out = gyro(&cube()).unwrap();
        // V + 2E + F vertices, 2E faces
        assert_eq!(out.vertex_count(), 8 + 24 + 6);
        assert_eq!(out.face_count(), 24);
        assert_eq!(out.name(), "gC");
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_propellor_counts() {
        let out = propellor(&cube()).unwrap();
        assert_eq!(out.vertex_count(), 8 + 24);
        assert_eq!(out.face_count(), 6 + 24);
        assert_eq!(out.face_side_histogram().get(&4), Some(&30));
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_whirl_counts() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = whirl(&tetra).unwrap();
        // V + 2E + 2E vertices, F + 2E faces
        assert_eq!(out.vertex_count(), 4 + 12 + 12);
        assert_eq!(out.face_count(), 4 + 12);
        assert_eq!(out.face_side_histogram().get(&6), Some(&12));
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_gyro_keeps_corners_and_centers_on_unit_sphere() {
        let out = gyro(&cube()).unwrap();
        let on_sphere = out
            .vertices()
            .iter()
            .filter(|v| (v.length() - 1.0).abs() < 1e-9)
            .count();
        // 8 corners and 6 centres; edge points lie inside the sphere
        assert_eq!(on_sphere, 14);
    }
}
