//! # Dual
//!
//! Every face becomes a vertex at its centroid and every vertex becomes a
//! face, ordered by walking the faces around it.
//!
//! Dual face `j` corresponds to input vertex `j` whenever every input vertex
//! is used by some face, since the faces are keyed `Key4::of1(vertex)`.


use std::collections::HashMap;

use crate::error::{PolyError, PolyResult};
use crate::flag::{FastFlags, FlagSet, Key4};
use crate::mesh::Mesh;

use super::utils::corners;

/// Computes the topological dual.
///
/// The name cancels a leading `d` (`dC` → `C`) and otherwise prepends one.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let tetra = StandardSeeds.generate(SeedKind::Tetrahedron, 0)?;
/// let dual = ops::dual(&tetra)?;
/// assert_eq!(dual.name(), "dT");
/// assert_eq!(ops::dual(&dual)?.name(), "T");
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn dual(mesh: &Mesh) -> PolyResult<Mesh> {
    // face owning each directed edge
    let mut owner: HashMap<(usize, usize), usize> = HashMap::new();
    for (i, face) in mesh.faces().iter().enumerate() {
        for edge in corners(face) {
            owner.insert(edge, i);
        }
    }

    let mut flags = FastFlags::new();
    for (i, center) in mesh.face_centers().into_iter().enumerate() {
        flags.new_vertex(Key4::of1(i), center);
    }

    for (i, face) in mesh.faces().iter().enumerate() {
        for (v1, v2) in corners(face) {
            let Some(&neighbor) = owner.get(&(v2, v1)) else {
                return Err(PolyError::NonManifold(format!(
                    "edge {v1} -> {v2} of face {i} has no reverse"
                )));
            };
            flags.new_flag(Key4::of1(v1), Key4::of1(neighbor), Key4::of1(i));
        }
    }

    flags.resolve(&dual_name(mesh.name()))
}

fn dual_name(name: &str) -> String {
    match name.strip_prefix('d') {
        Some(rest) => rest.to_string(),
        None => format!("d{name}"),
    }
}
