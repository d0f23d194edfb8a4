//! Tests for inset, extrude and loft.

use super::*;
use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};
use approx::assert_relative_eq;

fn cube() -> Mesh {
    StandardSeeds.generate(SeedKind::Cube, 0).unwrap()
}

#[test]
fn test_inset_all_faces() {
    let out = inset(&cube(), 0, 0.5, -0.2).unwrap();
    assert_eq!(out.name(), "nC");
    assert_eq!(out.face_side_histogram().get(&4), Some(&30));
    out.check_closed_manifold().unwrap();
    assert_eq!(out.euler_characteristic(), 2);
}

#[test]
fn test_inset_filtered_prism() {
    let prism = StandardSeeds.generate(SeedKind::Prism, 5).unwrap();
    let out = inset(&prism, 5, 0.3, 0.0).unwrap();
    assert_eq!(out.name(), "n5P5");
    assert_eq!(out.vertex_count(), 20);
    assert_eq!(out.face_count(), 5 + 10 + 2);
    out.check_closed_manifold().unwrap();
    assert_eq!(out.euler_characteristic(), 2);
}

#[test]
fn test_inset_without_matches_keeps_faces() {
    let out = inset(&cube(), 3, 0.5, -0.2).unwrap();
    assert_eq!(out.vertex_count(), 8);
    assert_eq!(out.face_count(), 6);
    assert_eq!(out.name(), "n3C");
    out.check_closed_manifold().unwrap();
}

#[test]
fn test_extrude_pushes_faces_out() {
    let cube = cube();
    let out = extrude(&cube, 0).unwrap();
    assert_eq!(out.name(), "xC");
    let centers = cube.face_centers();
    let normals = cube.face_normals();
    // the extruded cap of face 0 lies EXTRUDE_POPOUT above the old face
    let cap_height = out
        .vertices()
        .iter()
        .map(|p| (*p - centers[0]).dot(normals[0]))
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(cap_height, EXTRUDE_POPOUT, epsilon = 1e-12);
    out.check_closed_manifold().unwrap();
}

#[test]
fn test_loft_stays_in_face_plane() {
    let cube = cube();
    let out = loft(&cube, 4, 0.25).unwrap();
    assert_eq!(out.name(), "l4C");
    let (min, max) = out.vertices().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), p| (lo.min(p.x), hi.max(p.x)),
    );
    let (cmin, cmax) = cube.vertices().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), p| (lo.min(p.x), hi.max(p.x)),
    );
    assert_relative_eq!(min, cmin, epsilon = 1e-12);
    assert_relative_eq!(max, cmax, epsilon = 1e-12);
}
