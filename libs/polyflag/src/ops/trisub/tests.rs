//! Tests for triangular subdivision.

use super::*;
use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

fn octahedron() -> Mesh {
    StandardSeeds.generate(SeedKind::Octahedron, 0).unwrap()
}

#[test]
fn test_trisub_face_count_is_quadratic() {
    let octa = octahedron();
    for n in 1..=4u32 {
        let out = trisub(&octa, n, 1e-8, 64).unwrap();
        assert_eq!(out.face_count(), octa.face_count() * (n * n) as usize);
        assert!(is_triangulated(&out));
    }
}

#[test]
fn test_trisub_merges_shared_edges() {
    let out = trisub(&octahedron(), 3, 1e-8, 64).unwrap();
    // V + E(n - 1) + F(n - 1)(n - 2)/2
    assert_eq!(out.vertex_count(), 6 + 12 * 2 + 8);
    out.check_closed_manifold().unwrap();
    assert_eq!(out.euler_characteristic(), 2);
}

#[test]
fn test_trisub_factor_one_keeps_topology() {
    let octa = octahedron();
    let out = trisub(&octa, 1, 1e-8, 64).unwrap();
    assert_eq!(out.vertex_count(), 6);
    assert_eq!(out.face_count(), 8);
    assert_eq!(out.name(), "u1O");
}

#[test]
fn test_trisub_rejects_factor_out_of_range() {
    let octa = octahedron();
    assert!(matches!(
        trisub(&octa, 0, 1e-8, 64),
        Err(PolyError::InvalidParameter { .. })
    ));
    let err = trisub(&octa, 65, 1e-8, 64).unwrap_err();
    assert!(err.to_string().contains("65"));
}

#[test]
fn test_trisub_rejects_bad_tolerance() {
    assert!(trisub(&octahedron(), 2, 0.0, 64).is_err());
}

#[test]
fn test_trisub_is_identity_on_non_triangular_mesh() {
    let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
    let out = trisub(&cube, 2, 1e-8, 64).unwrap();
    assert_eq!(out, cube);
}

#[test]
fn test_welder_merges_close_points() {
    let mut welder = Welder::new(1e-6);
    let a = welder.insert(DVec3::new(0.5, 0.5, 0.5));
    let b = welder.insert(DVec3::new(0.5 + 1e-9, 0.5, 0.5 - 1e-9));
    let c = welder.insert(DVec3::new(0.6, 0.5, 0.5));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(welder.points.len(), 2);
}
