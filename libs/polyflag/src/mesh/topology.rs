//! Combinatorial queries on the face list.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::Mesh;
use crate::error::{PolyError, PolyResult};

impl Mesh {
    /// Returns the number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut edges = HashSet::new();
        for face in &self.faces {
            for (a, b) in face_edges(face) {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.len()
    }

    /// Returns `V - E + F`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use polyflag::{SeedGenerator, SeedKind, StandardSeeds};
    ///
    /// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
    /// assert_eq!(cube.euler_characteristic(), 2);
    /// # Ok::<(), polyflag::PolyError>(())
    /// ```
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }

    /// Returns how many faces there are of each side count.
    pub fn face_side_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for face in &self.faces {
            *histogram.entry(face.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Verifies every directed edge occurs exactly once and its reverse
    /// occurs exactly once in another face.
    pub fn check_closed_manifold(&self) -> PolyResult<()> {
        let mut owner: HashMap<(usize, usize), usize> = HashMap::new();
        for (f, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(PolyError::NonManifold(format!(
                    "face {f} has {} vertices",
                    face.len()
                )));
            }
            for edge in face_edges(face) {
                if let Some(other) = owner.insert(edge, f) {
                    return Err(PolyError::NonManifold(format!(
                        "directed edge {} -> {} appears in faces {other} and {f}",
                        edge.0, edge.1
                    )));
                }
            }
        }
        for (&(a, b), &f) in &owner {
            match owner.get(&(b, a)) {
                None => {
                    return Err(PolyError::NonManifold(format!(
                        "edge {a} -> {b} of face {f} has no reverse"
                    )))
                }
                Some(&g) if g == f => {
                    return Err(PolyError::NonManifold(format!(
                        "edge {a} -> {b} is traversed both ways by face {f}"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Directed edges of a face, closing back to the first corner.
pub(crate) fn face_edges(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[i], face[(i + 1) % n]))
}
