//! Prisms, antiprisms and pyramids on a unit-radius base ring.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::ring_point;
use crate::mesh::Face;

/// `n`-gonal prism with square sides.
pub(super) fn prism(n: usize) -> (Vec<DVec3>, Vec<Face>) {
    let half = (PI / n as f64).sin();
    let step = TAU / n as f64;

    let mut vertices: Vec<DVec3> = (0..n)
        .map(|i| ring_point(1.0, step * i as f64, -half))
        .collect();
    vertices.extend((0..n).map(|i| ring_point(1.0, step * i as f64, half)));

    let mut faces = vec![(0..n).rev().collect::<Face>(), (n..2 * n).collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + j, n + i]);
    }
    (vertices, faces)
}

/// `n`-gonal antiprism with equilateral side triangles.
pub(super) fn antiprism(n: usize) -> (Vec<DVec3>, Vec<Face>) {
    let angle = PI / n as f64;
    let edge_sq = 4.0 * angle.sin().powi(2);
    let height = (edge_sq - 2.0 + 2.0 * angle.cos()).max(0.0).sqrt();
    let step = TAU / n as f64;

    let mut vertices: Vec<DVec3> = (0..n)
        .map(|i| ring_point(1.0, step * i as f64, -height / 2.0))
        .collect();
    vertices.extend((0..n).map(|i| ring_point(1.0, step * i as f64 + angle, height / 2.0)));

    let mut faces = vec![(0..n).rev().collect::<Face>(), (n..2 * n).collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + i]);
        faces.push(vec![n + i, j, n + j]);
    }
    (vertices, faces)
}

/// `n`-gonal pyramid. Equilateral sides up to the pentagon, unit height
/// beyond.
pub(super) fn pyramid(n: usize) -> (Vec<DVec3>, Vec<Face>) {
    let edge_sq = 4.0 * (PI / n as f64).sin().powi(2);
    let height = if edge_sq > 1.0 {
        (edge_sq - 1.0).sqrt()
    } else {
        1.0
    };
    let step = TAU / n as f64;

    let mut vertices: Vec<DVec3> = (0..n)
        .map(|i| ring_point(1.0, step * i as f64, 0.0))
        .collect();
    vertices.push(DVec3::new(0.0, 0.0, height));

    let mut faces = vec![(0..n).rev().collect::<Face>()];
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, n]);
    }
    (vertices, faces)
}
