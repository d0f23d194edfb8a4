//! Platonic solids on the unit circumsphere.

use config::constants::approx_equal;
use glam::DVec3;

use crate::error::PolyResult;
use crate::mesh::{Face, Mesh};
use crate::ops::dual;

pub(super) fn tetrahedron() -> (Vec<DVec3>, Vec<Face>) {
    let vertices = unit(vec![
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
    ]);
    let faces = vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![1, 3, 2]];
    (vertices, faces)
}

pub(super) fn cube() -> (Vec<DVec3>, Vec<Face>) {
    let vertices = unit(vec![
        DVec3::new(-1.0, -1.0, -1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-1.0, 1.0, 1.0),
    ]);
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    (vertices, faces)
}

pub(super) fn octahedron() -> (Vec<DVec3>, Vec<Face>) {
    let vertices = vec![
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    let faces = triangles_at_edge_length(&vertices);
    (vertices, faces)
}

pub(super) fn icosahedron() -> (Vec<DVec3>, Vec<Face>) {
    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let mut raw = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            raw.push(DVec3::new(0.0, a, b));
            raw.push(DVec3::new(a, b, 0.0));
            raw.push(DVec3::new(b, 0.0, a));
        }
    }
    let vertices = unit(raw);
    let faces = triangles_at_edge_length(&vertices);
    (vertices, faces)
}

/// Dual of the icosahedron, pushed back onto the unit sphere.
pub(super) fn dodecahedron() -> PolyResult<(Vec<DVec3>, Vec<Face>)> {
    let (vertices, faces) = icosahedron();
    let (_, vertices, faces) = dual(&Mesh::new("I", vertices, faces))?.into_parts();
    Ok((unit(vertices), faces))
}

fn unit(vertices: Vec<DVec3>) -> Vec<DVec3> {
    vertices.into_iter().map(DVec3::normalize).collect()
}

/// Every triangle whose three sides have the shortest vertex distance,
/// wound counter-clockwise seen from outside.
///
/// Only valid for origin-centred deltahedra whose edges are all the
/// shortest distance.
fn triangles_at_edge_length(vertices: &[DVec3]) -> Vec<Face> {
    let n = vertices.len();
    let mut edge = f64::INFINITY;
    for i in 0..n {
        for j in (i + 1)..n {
            edge = edge.min(vertices[i].distance(vertices[j]));
        }
    }
    let adjacent = |a: usize, b: usize| approx_equal(vertices[a].distance(vertices[b]), edge);

    let mut faces = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !adjacent(i, j) {
                continue;
            }
            for k in (j + 1)..n {
                if !(adjacent(i, k) && adjacent(j, k)) {
                    continue;
                }
                let normal = (vertices[j] - vertices[i]).cross(vertices[k] - vertices[i]);
                if normal.dot(vertices[i]) > 0.0 {
                    faces.push(vec![i, j, k]);
                } else {
                    faces.push(vec![i, k, j]);
                }
            }
        }
    }
    faces
}
