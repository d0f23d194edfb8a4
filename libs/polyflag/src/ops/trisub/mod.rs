//! # Triangular Subdivision
//!
//! Limited Goldberg-Coxeter `u_n` operator: every triangle is split into
//! `n * n` triangles on a barycentric lattice. Lattice points on shared
//! edges are generated once per adjacent triangle and merged when they lie
//! within the merge tolerance.
//!
//! This operator builds its faces directly instead of through flags.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use glam::DVec3;

use crate::error::{PolyError, PolyResult};
use crate::mesh::{Face, Mesh};

/// True if every face is a triangle.
pub fn is_triangulated(mesh: &Mesh) -> bool {
    mesh.faces().iter().all(|f| f.len() == 3)
}

/// Subdivides every triangle `factor * factor` times.
///
/// `factor` must lie in `1..=max_factor`; it is checked before anything is
/// allocated. A mesh with a non-triangular face is returned unchanged.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let ico = StandardSeeds.generate(SeedKind::Icosahedron, 0)?;
/// let out = ops::trisub(&ico, 2, 1e-8, 64)?;
/// assert_eq!(out.face_count(), 80);
/// assert_eq!(out.vertex_count(), 42);
/// assert_eq!(out.name(), "u2I");
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn trisub(mesh: &Mesh, factor: u32, tolerance: f64, max_factor: u32) -> PolyResult<Mesh> {
    if factor == 0 || factor > max_factor {
        return Err(PolyError::invalid_parameter(
            "trisub",
            format!("factor {factor} outside 1..={max_factor}"),
        ));
    }
    if !(tolerance > 0.0) {
        return Err(PolyError::invalid_parameter(
            "trisub",
            format!("merge tolerance must be positive, got {tolerance}"),
        ));
    }
    if !is_triangulated(mesh) {
        tracing::debug!(mesh = mesh.name(), "trisub skipped non-triangular mesh");
        return Ok(mesh.clone());
    }

    let n = factor as usize;
    let mut welder = Welder::new(tolerance);
    let mut faces: Vec<Face> = Vec::with_capacity(mesh.face_count() * n * n);
    let mut lattice = vec![vec![0usize; n + 1]; n + 1];

    for face in mesh.faces() {
        let v1 = mesh.vertex(face[0]);
        let e21 = mesh.vertex(face[1]) - v1;
        let e31 = mesh.vertex(face[2]) - v1;
        for i in 0..=n {
            for j in 0..=(n - i) {
                let p = v1 + e21 * (i as f64 / n as f64) + e31 * (j as f64 / n as f64);
                lattice[i][j] = welder.insert(p);
            }
        }
        for i in 0..n {
            for j in 0..(n - i) {
                faces.push(vec![lattice[i][j], lattice[i + 1][j], lattice[i][j + 1]]);
                if i > 0 {
                    faces.push(vec![lattice[i][j], lattice[i][j + 1], lattice[i - 1][j + 1]]);
                }
            }
        }
    }

    tracing::debug!(
        factor,
        vertices = welder.points.len(),
        faces = faces.len(),
        "trisub"
    );
    Ok(Mesh::new(
        format!("u{factor}{}", mesh.name()),
        welder.points,
        faces,
    ))
}

// =============================================================================
// WELDER
// =============================================================================

/// Merges points closer than the tolerance using a uniform hash grid.
struct Welder {
    tolerance: f64,
    points: Vec<DVec3>,
    grid: HashMap<[i64; 3], Vec<usize>>,
}

impl Welder {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            points: Vec::new(),
            grid: HashMap::new(),
        }
    }

    fn cell(&self, p: DVec3) -> [i64; 3] {
        let c = (p / self.tolerance).floor();
        [c.x as i64, c.y as i64, c.z as i64]
    }

    /// Returns the index of an existing point within tolerance, or adds `p`.
    fn insert(&mut self, p: DVec3) -> usize {
        let [cx, cy, cz] = self.cell(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = self.grid.get(&[cx + dx, cy + dy, cz + dz]) {
                        if let Some(&found) = bucket
                            .iter()
                            .find(|&&k| self.points[k].distance(p) < self.tolerance)
                        {
                            return found;
                        }
                    }
                }
            }
        }
        let index = self.points.len();
        self.points.push(p);
        self.grid.entry([cx, cy, cz]).or_default().push(index);
        index
    }
}
