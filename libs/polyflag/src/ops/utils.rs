//! Shared helpers for walking faces and placing new points.

use glam::DVec3;

use crate::mesh::Mesh;

/// Point `t` of the way from `a` to `b`.
#[inline]
pub(crate) fn tween(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    a + (b - a) * t
}

/// Point one third of the way from `a` to `b`.
#[inline]
pub(crate) fn one_third(a: DVec3, b: DVec3) -> DVec3 {
    tween(a, b, 1.0 / 3.0)
}

#[inline]
pub(crate) fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b) * 0.5
}

/// Consecutive corner pairs `(previous, current)`, starting with
/// `(last, first)`.
pub(crate) fn corners(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[(i + n - 1) % n], face[i]))
}

/// Consecutive corner triples `(v1, v2, v3)`, starting with the last two
/// corners followed by the first.
pub(crate) fn triplets(face: &[usize]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[(i + n - 2) % n], face[(i + n - 1) % n], face[i]))
}

/// True if a face with `len` sides is selected by the `sides` filter
/// (zero selects every face).
#[inline]
pub(crate) fn selects(sides: usize, len: usize) -> bool {
    sides == 0 || len == sides
}

/// Number of faces selected by the `sides` filter.
pub fn count_selected(mesh: &Mesh, sides: usize) -> usize {
    mesh.faces().iter().filter(|f| selects(sides, f.len())).count()
}

/// Operator name with an optional side-count filter, e.g. `k4C`.
pub(crate) fn filtered_name(prefix: char, sides: usize, name: &str) -> String {
    if sides == 0 {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}{sides}{name}")
    }
}
