//! # Inset, Extrude, Loft
//!
//! Selected faces are shrunk toward their centroid and offset along their
//! normal, leaving a ring of quadrilaterals between the old and the new
//! boundary. Extrude and loft are the two degenerate settings of inset.

#[cfg(test)]
mod tests;

use config::constants::EXTRUDE_POPOUT;

use crate::error::PolyResult;
use crate::flag::{FlagSet, LabelFlags};
use crate::mesh::Mesh;

use super::utils::{corners, filtered_name, selects, tween};

/// Insets every `sides`-gon (every face when `sides == 0`).
///
/// The new corner for vertex `v` of face `i` sits `inset` of the way from
/// `v` to the centroid, then `popout` along the face normal. A negative
/// `popout` sinks the face.
///
/// ## Example
///
/// ```rust
/// use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let out = ops::inset(&cube, 0, 0.5, -0.2)?;
/// assert_eq!(out.vertex_count(), 8 + 24);
/// assert_eq!(out.face_count(), 6 + 24);
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub fn inset(mesh: &Mesh, sides: usize, inset: f64, popout: f64) -> PolyResult<Mesh> {
    build(mesh, sides, inset, popout, filtered_name('n', sides, mesh.name()))
}

/// Pushes every selected face straight out along its normal.
pub fn extrude(mesh: &Mesh, sides: usize) -> PolyResult<Mesh> {
    build(mesh, sides, 0.0, EXTRUDE_POPOUT, filtered_name('x', sides, mesh.name()))
}

/// Shrinks every selected face toward its centroid without moving it off
/// its plane. The notation uses `config::constants::LOFT_INSET` for `alpha`.
pub fn loft(mesh: &Mesh, sides: usize, alpha: f64) -> PolyResult<Mesh> {
    build(mesh, sides, alpha, 0.0, filtered_name('l', sides, mesh.name()))
}

fn build(mesh: &Mesh, sides: usize, inset: f64, popout: f64, name: String) -> PolyResult<Mesh> {
    let vertices = mesh.vertices();
    let centers = mesh.face_centers();
    let normals = mesh.face_normals();

    let mut flags = LabelFlags::new();
    for (v, p) in vertices.iter().enumerate() {
        flags.new_vertex(LabelFlags::vertex_label(v), *p);
    }

    let mut matched = 0usize;
    for (i, face) in mesh.faces().iter().enumerate() {
        if !selects(sides, face.len()) {
            for (v1, v2) in corners(face) {
                flags.new_flag(
                    format!("o{i}"),
                    LabelFlags::vertex_label(v1),
                    LabelFlags::vertex_label(v2),
                );
            }
            continue;
        }

        matched += 1;
        for &v in face {
            flags.new_vertex(
                format!("i{i}-{v}"),
                tween(vertices[v], centers[i], inset) + normals[i] * popout,
            );
        }
        for (v1, v2) in corners(face) {
            let (p1, p2) = (LabelFlags::vertex_label(v1), LabelFlags::vertex_label(v2));
            let (q1, q2) = (format!("i{i}-{v1}"), format!("i{i}-{v2}"));
            let fname = format!("f{i}-{v1}");
            flags.new_flag(&fname, &p1, &p2);
            flags.new_flag(&fname, &p2, &q2);
            flags.new_flag(&fname, &q2, &q1);
            flags.new_flag(&fname, &q1, &p1);

            flags.new_flag(format!("ex{i}"), &q1, &q2);
        }
    }

    if matched == 0 {
        tracing::debug!(sides, "inset matched no faces");
    }
    flags.resolve(&name)
}
