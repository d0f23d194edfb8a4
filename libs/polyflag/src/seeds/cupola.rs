//! Cupolae and anticupolae: an `n`-gon above a `2n`-gon, unit edges.

use std::f64::consts::PI;

use glam::DVec3;

use super::ring_point;
use crate::mesh::Face;

fn radii(n: usize) -> (f64, f64) {
    let bottom = 1.0 / (2.0 * (PI / (2 * n) as f64).sin());
    let top = 1.0 / (2.0 * (PI / n as f64).sin());
    (bottom, top)
}

/// Alternating triangles and squares around the top. Johnson proportions
/// for `n` from 3 to 5.
pub(super) fn cupola(n: usize) -> (Vec<DVec3>, Vec<Face>) {
    let (bottom, top) = radii(n);
    let height = if (3..=5).contains(&n) {
        (1.0 - 1.0 / (4.0 * (PI / n as f64).sin().powi(2))).sqrt()
    } else {
        bottom - top
    };
    let step = PI / n as f64;

    let mut vertices: Vec<DVec3> = (0..2 * n)
        .map(|k| ring_point(bottom, step * k as f64, 0.0))
        .collect();
    vertices.extend((0..n).map(|i| ring_point(top, step * (2 * i) as f64 + step / 2.0, height)));

    let b = |k: usize| k % (2 * n);
    let t = |i: usize| 2 * n + i % n;

    let mut faces = vec![(0..2 * n).rev().collect::<Face>(), (2 * n..3 * n).collect()];
    for i in 0..n {
        faces.push(vec![b(2 * i), b(2 * i + 1), t(i)]);
        faces.push(vec![b(2 * i + 1), b(2 * i + 2), t(i + 1), t(i)]);
    }
    (vertices, faces)
}

/// Triangles only around the top, which sits rotated over every other
/// bottom vertex.
pub(super) fn anticupola(n: usize) -> (Vec<DVec3>, Vec<Face>) {
    let (bottom, top) = radii(n);
    let height = 1.0;
    let step = PI / n as f64;

    let mut vertices: Vec<DVec3> = (0..2 * n)
        .map(|k| ring_point(bottom, step * k as f64, 0.0))
        .collect();
    vertices.extend((0..n).map(|i| ring_point(top, step * (2 * i) as f64, height)));

    let b = |k: usize| k % (2 * n);
    let t = |i: usize| 2 * n + i % n;

    let mut faces = vec![(0..2 * n).rev().collect::<Face>(), (2 * n..3 * n).collect()];
    for i in 0..n {
        faces.push(vec![b(2 * i), b(2 * i + 1), t(i)]);
        faces.push(vec![b(2 * i + 1), b(2 * i + 2), t(i + 1)]);
        faces.push(vec![b(2 * i + 1), t(i + 1), t(i)]);
    }
    (vertices, faces)
}
