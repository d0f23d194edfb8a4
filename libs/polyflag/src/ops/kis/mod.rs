//! # Kis
//!
//! Raises a pyramid on every selected face. The apex sits above the face
//! centroid along its normal; faces with a different side count pass
//! through untouched and keep their original vertex indices.


use crate::error::PolyResult;
use crate::flag::{FastFlags, FlagSet, Key4};
use crate::mesh::Mesh;

use super::utils::{corners, filtered_name, selects};

/// Replaces every `sides`-gon (every face when `sides == 0`) by a pyramid
/// whose apex is `apex_distance` above the face centroid.
///
/// When no face matches, the output has the same faces as the input.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let out = ops::kis(&cube, 0, 0.1)?;
/// assert_eq!(out.vertex_count(), 14);
/// assert_eq!(out.face_count(), 24);
/// assert_eq!(out.name(), "kC");
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn kis(mesh: &Mesh, sides: usize, apex_distance: f64) -> PolyResult<Mesh> {
    let centers = mesh.face_centers();
    let normals = mesh.face_normals();
    let mut flags = FastFlags::new();
    let base = flags.add_vertexes(mesh);
    let mut raised = 0usize;

    for (i, face) in mesh.faces().iter().enumerate() {
        if !selects(sides, face.len()) {
            flags.add_face(face.iter().map(|&v| Key4::of1(v)))?;
            continue;
        }
        raised += 1;
        let apex = Key4::of1(base + i);
        flags.new_vertex(apex, centers[i] + normals[i] * apex_distance);
        for (v1, v2) in corners(face) {
            let fname = Key4::of2(i, v1);
            flags.new_flag(fname, Key4::of1(v1), Key4::of1(v2));
            flags.new_flag(fname, Key4::of1(v2), apex);
            flags.new_flag(fname, apex, Key4::of1(v1));
        }
    }

    if raised == 0 {
        tracing::debug!(sides, "kis matched no faces");
    }
    flags.resolve(&filtered_name('k', sides, mesh.name()))
}
