//! Tests for the flag assemblers.

use super::*;
use crate::error::PolyError;

fn square_labels() -> LabelFlags {
    let mut flags = LabelFlags::new();
    flags.new_vertex("a", DVec3::new(0.0, 0.0, 0.0));
    flags.new_vertex("b", DVec3::new(1.0, 0.0, 0.0));
    flags.new_vertex("c", DVec3::new(1.0, 1.0, 0.0));
    flags.new_vertex("d", DVec3::new(0.0, 1.0, 0.0));
    flags
}

// =============================================================================
// LABEL FLAGS
// =============================================================================

#[test]
fn test_label_resolve_orders_vertices_by_key() {
    let mut flags = LabelFlags::new();
    flags.new_vertex("z", DVec3::Z);
    flags.new_vertex("x", DVec3::X);
    flags.new_vertex("y", DVec3::Y);
    flags.new_flag("f", "x", "y");
    flags.new_flag("f", "y", "z");
    flags.new_flag("f", "z", "x");

    let mesh = flags.resolve("t").unwrap();
    assert_eq!(mesh.vertices(), &[DVec3::X, DVec3::Y, DVec3::Z]);
    assert_eq!(mesh.faces(), &[vec![0, 1, 2]]);
    assert_eq!(mesh.name(), "t");
}

#[test]
fn test_label_walk_starts_at_smallest_key() {
    let mut flags = square_labels();
    flags.new_flag("sq", "c", "d");
    flags.new_flag("sq", "d", "a");
    flags.new_flag("sq", "b", "c");
    flags.new_flag("sq", "a", "b");
    let mesh = flags.resolve("sq").unwrap();
    assert_eq!(mesh.faces(), &[vec![0, 1, 2, 3]]);
}

#[test]
fn test_label_faces_in_key_order() {
    let mut flags = square_labels();
    flags.new_flag("2", "a", "c");
    flags.new_flag("2", "c", "d");
    flags.new_flag("2", "d", "a");
    flags.new_flag("1", "a", "b");
    flags.new_flag("1", "b", "c");
    flags.new_flag("1", "c", "a");
    let mesh = flags.resolve("two").unwrap();
    assert_eq!(mesh.faces(), &[vec![0, 1, 2], vec![0, 2, 3]]);
}

#[test]
fn test_label_vertex_overwrite_keeps_identity() {
    let mut flags = square_labels();
    flags.new_vertex("a", DVec3::splat(5.0));
    assert_eq!(flags.vertex_count(), 4);
    assert_eq!(flags.position("a"), Some(DVec3::splat(5.0)));
}

#[test]
fn test_label_duplicate_flag_keeps_last_target() {
    let mut flags = square_labels();
    flags.new_flag("f", "a", "d");
    flags.new_flag("f", "a", "b");
    flags.new_flag("f", "b", "c");
    flags.new_flag("f", "c", "a");
    let mesh = flags.resolve("f").unwrap();
    assert_eq!(mesh.faces(), &[vec![0, 1, 2]]);
}

#[test]
fn test_label_from_mesh_normalizes() {
    let mesh = Mesh::new(
        "m",
        vec![DVec3::new(3.0, 0.0, 0.0), DVec3::new(0.0, -2.0, 0.0)],
        vec![],
    );
    let flags = LabelFlags::from_mesh(&mesh);
    assert_eq!(flags.position("v0"), Some(DVec3::X));
    assert_eq!(flags.position("v1"), Some(DVec3::NEG_Y));
    assert_eq!(flags.face_count(), 0);
}

#[test]
fn test_undefined_vertex_is_reported() {
    let mut flags = square_labels();
    flags.new_flag("f", "a", "b");
    flags.new_flag("f", "b", "q");
    flags.new_flag("f", "q", "a");
    assert_eq!(
        flags.resolve("bad").unwrap_err(),
        PolyError::UndefinedVertex { key: "q".into() }
    );
}

#[test]
fn test_open_orbit_is_inconsistent() {
    let mut flags = square_labels();
    flags.new_flag("f", "a", "b");
    flags.new_flag("f", "b", "c");
    let err = flags.resolve("open").unwrap_err();
    assert!(matches!(err, PolyError::InconsistentTopology { ref face, .. } if face == "f"));
}

#[test]
fn test_orbit_missing_start_does_not_loop() {
    // a -> b -> c -> b never returns to a
    let mut flags = square_labels();
    flags.new_flag("f", "a", "b");
    flags.new_flag("f", "b", "c");
    flags.new_flag("f", "c", "b");
    let err = flags.resolve("spin").unwrap_err();
    assert!(err.to_string().contains("did not close"));
}

#[test]
fn test_two_cycles_in_one_face_is_inconsistent() {
    let mut flags = square_labels();
    flags.new_flag("f", "a", "b");
    flags.new_flag("f", "b", "a");
    flags.new_flag("f", "c", "d");
    flags.new_flag("f", "d", "c");
    let err = flags.resolve("split").unwrap_err();
    assert!(err.to_string().contains("closed after 2 of 4"));
}

// =============================================================================
// FAST FLAGS
// =============================================================================

#[test]
fn test_key4_ordering_and_display() {
    assert!(Key4::of1(1) < Key4::of1(2));
    assert!(Key4::of1(3) < Key4::of2(3, 0));
    assert_eq!(Key4::of4(0, 1, 2, 3).slots(), [1, 2, 3, 4]);
    assert_eq!(Key4::edge(4, 1), Key4::edge(1, 4));
    assert_eq!(Key4::of1(7).to_string(), "(8,0,0,0)");
}

#[test]
fn test_key4_largest_index_fills_slot() {
    let key = Key4::of2(Key4::MAX_INDEX, 0);
    assert_eq!(key.slots(), [u32::MAX, 1, 0, 0]);
    assert!(Key4::of1(Key4::MAX_INDEX - 1) < Key4::of1(Key4::MAX_INDEX));
}

#[test]
fn test_fast_add_vertexes_preserves_indices() {
    let mesh = Mesh::new(
        "tri",
        vec![DVec3::X * 2.0, DVec3::Y * 2.0, DVec3::Z * 2.0],
        vec![vec![0, 1, 2]],
    );
    let mut flags = FastFlags::new();
    assert_eq!(flags.add_vertexes(&mesh), 3);
    flags.new_vertex(Key4::of1(3), DVec3::ONE);
    flags.new_flag(Key4::of1(0), Key4::of1(0), Key4::of1(1));
    flags.new_flag(Key4::of1(0), Key4::of1(1), Key4::of1(3));
    flags.new_flag(Key4::of1(0), Key4::of1(3), Key4::of1(0));

    let out = flags.resolve("fast").unwrap();
    assert_eq!(&out.vertices()[..3], mesh.vertices());
    assert_eq!(out.faces(), &[vec![0, 1, 3]]);
}

#[test]
fn test_fast_literal_face_follows_walked_faces() {
    let mut flags = FastFlags::new();
    for i in 0..4 {
        flags.new_vertex(Key4::of1(i), DVec3::splat(i as f64));
    }
    flags.new_flag(Key4::of1(9), Key4::of1(1), Key4::of1(2));
    flags.new_flag(Key4::of1(9), Key4::of1(2), Key4::of1(3));
    flags.new_flag(Key4::of1(9), Key4::of1(3), Key4::of1(1));
    flags
        .add_face([Key4::of1(0), Key4::of1(2), Key4::of1(1)])
        .unwrap();
    assert_eq!(flags.face_count(), 2);

    let mesh = flags.resolve("mixed").unwrap();
    assert_eq!(mesh.faces(), &[vec![1, 2, 3], vec![0, 2, 1]]);
}

#[test]
fn test_fast_literal_face_rejects_unknown_key() {
    let mut flags = FastFlags::new();
    flags.new_vertex(Key4::of1(0), DVec3::ZERO);
    let err = flags
        .add_face([Key4::of1(0), Key4::of2(0, 1)])
        .unwrap_err();
    assert_eq!(err, PolyError::undefined_vertex("(1,2,0,0)"));
}

#[test]
fn test_fast_inconsistent_face_reports_key() {
    let mut flags = FastFlags::new();
    flags.new_vertex(Key4::of1(0), DVec3::ZERO);
    flags.new_vertex(Key4::of1(1), DVec3::X);
    flags.new_vertex(Key4::of1(2), DVec3::Y);
    flags.new_flag(Key4::of2(5, 5), Key4::of1(0), Key4::of1(1));
    flags.new_flag(Key4::of2(5, 5), Key4::of1(2), Key4::of1(0));
    match flags.resolve("bad") {
        Err(PolyError::InconsistentTopology { face, message }) => {
            assert_eq!(face, "(6,6,0,0)");
            assert!(message.contains("no flag leaves"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
