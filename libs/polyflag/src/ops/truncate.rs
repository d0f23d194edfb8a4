//! # Truncate
//!
//! Cuts off vertices, expressed through the dual: `dual(kis(dual(M)))`.
//! A side filter `n` truncates only vertices of degree `n`, since those are
//! the `n`-gons of the dual.

use crate::error::PolyResult;
use crate::mesh::Mesh;

use super::utils::filtered_name;
use super::{dual, kis};

/// Truncates every vertex of degree `sides` (every vertex when zero).
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let out = ops::truncate(&cube, 0, 0.1)?;
/// assert_eq!(out.vertex_count(), 24);
/// assert_eq!(out.face_count(), 14);
/// assert_eq!(out.name(), "tC");
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn truncate(mesh: &Mesh, sides: usize, apex_distance: f64) -> PolyResult<Mesh> {
    let out = dual(&kis(&dual(mesh)?, sides, apex_distance)?)?;
    Ok(out.with_name(filtered_name('t', sides, mesh.name())))
}

/// Number of vertices a truncation with this filter would cut.
pub fn count_truncated(mesh: &Mesh, sides: usize) -> usize {
    let mut degree = vec![0usize; mesh.vertex_count()];
    for face in mesh.faces() {
        for &v in face {
            degree[v] += 1;
        }
    }
    degree
        .into_iter()
        .filter(|&d| d > 0 && (sides == 0 || d == sides))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{SeedGenerator, SeedKind, StandardSeeds};

    #[test]
    fn test_truncate_tetrahedron() {
        let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0).unwrap();
        let out = truncate(&tetra, 0, 0.1).unwrap();
        assert_eq!(out.vertex_count(), 12);
        assert_eq!(out.face_count(), 8);
        let histogram = out.face_side_histogram();
        assert_eq!(histogram.get(&6), Some(&4));
        assert_eq!(histogram.get(&3), Some(&4));
        out.check_closed_manifold().unwrap();
        assert_eq!(out.euler_characteristic(), 2);
    }

    #[test]
    fn test_filtered_truncate_on_pyramid() {
        // square pyramid: apex has degree 4, base corners degree 3
        let pyramid = StandardSeeds.generate(SeedKind::Pyramid, 4).unwrap();
        assert_eq!(count_truncated(&pyramid, 4), 1);
        let out = truncate(&pyramid, 4, 0.1).unwrap();
        assert_eq!(out.name(), "t4Y4");
        assert_eq!(out.vertex_count(), 4 + 4);
        assert_eq!(out.face_count(), 6);
        out.check_closed_manifold().unwrap();
    }

    #[test]
    fn test_count_truncated_all() {
        let cube = StandardSeeds.generate(SeedKind::Cube, 0).unwrap();
        assert_eq!(count_truncated(&cube, 0), 8);
        assert_eq!(count_truncated(&cube, 5), 0);
    }
}
