//! # Flag Assemblers
//!
//! A flag is the statement "within face F, the directed edge A → B exists".
//! Operators describe their output as a set of symbolic vertices and flags,
//! then [`FlagSet::resolve`] turns them into a [`Mesh`].
//!
//! ## Resolution
//!
//! 1. Every registered vertex key gets an index in ascending key order.
//! 2. For every face key, in ascending order, the walk starts at the face's
//!    smallest `from` key and follows `from → to` until it returns to the
//!    start, emitting vertex indices.
//!
//! The walk is bounded by the number of flags in the face, so a malformed
//! flag set is reported as [`PolyError::InconsistentTopology`] rather than
//! looping.
//!
//! ## Implementations
//!
//! - [`LabelFlags`]: free-form text keys, convenient for operators with
//!   many vertex roles
//! - [`FastFlags`]: fixed-size integer keys ([`Key4`]) built from input
//!   indices, cheaper to compare and hash

mod fast;
mod label;

#[cfg(test)]
mod tests;

pub use fast::{FastFlags, Key4};
pub use label::LabelFlags;

use std::collections::BTreeMap;
use std::fmt::Display;

use glam::DVec3;

use crate::error::{PolyError, PolyResult};
use crate::mesh::{Face, Mesh};

// =============================================================================
// FLAGSET TRAIT
// =============================================================================

/// Two-phase polyhedron builder: declare vertices and flags, then resolve.
///
/// ## Example
///
/// ```rust
/// use polyflag::{FlagSet, LabelFlags};
/// use glam::DVec3;
///
/// let mut flags = LabelFlags::new();
/// flags.new_vertex("a", DVec3::X);
/// flags.new_vertex("b", DVec3::Y);
/// flags.new_vertex("c", DVec3::Z);
/// flags.new_flag("f", "a", "b");
/// flags.new_flag("f", "b", "c");
/// flags.new_flag("f", "c", "a");
///
/// let mesh = flags.resolve("tri")?;
/// assert_eq!(mesh.faces(), &[vec![0, 1, 2]]);
/// # Ok::<(), polyflag::PolyError>(())
/// ```
pub trait FlagSet {
    /// Symbolic key naming vertices and faces.
    type Key: Ord + Clone + Display;

    /// Registers a vertex, overwriting the position if the key exists.
    fn new_vertex(&mut self, key: impl Into<Self::Key>, position: DVec3);

    /// Declares the directed edge `from → to` inside `face`.
    ///
    /// Declaring the same `(face, from)` twice keeps the last target.
    fn new_flag(
        &mut self,
        face: impl Into<Self::Key>,
        from: impl Into<Self::Key>,
        to: impl Into<Self::Key>,
    );

    /// Number of registered vertices.
    fn vertex_count(&self) -> usize;

    /// Number of declared faces.
    fn face_count(&self) -> usize;

    /// Numbers the vertices and walks every face into a mesh named `name`.
    fn resolve(self, name: &str) -> PolyResult<Mesh>;
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Vertex registry plus flags grouped by face, shared by both assemblers.
#[derive(Debug, Clone)]
pub(crate) struct FlagTable<K> {
    pub(crate) vertices: BTreeMap<K, DVec3>,
    pub(crate) faces: BTreeMap<K, BTreeMap<K, K>>,
}

impl<K: Ord> Default for FlagTable<K> {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
            faces: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone + Display> FlagTable<K> {
    pub(crate) fn new_vertex(&mut self, key: K, position: DVec3) {
        self.vertices.insert(key, position);
    }

    pub(crate) fn new_flag(&mut self, face: K, from: K, to: K) {
        self.faces.entry(face).or_default().insert(from, to);
    }

    /// Index of every vertex key, in ascending key order.
    pub(crate) fn index(&self) -> BTreeMap<&K, usize> {
        self.vertices
            .keys()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect()
    }

    /// Walks every face and returns the vertex positions and face cycles.
    pub(crate) fn resolve(&self) -> PolyResult<(Vec<DVec3>, Vec<Face>)> {
        let index = self.index();
        let vertices: Vec<DVec3> = self.vertices.values().copied().collect();
        let mut faces = Vec::with_capacity(self.faces.len());

        for (face_key, flags) in &self.faces {
            faces.push(walk_face(face_key, flags, &index)?);
        }

        Ok((vertices, faces))
    }
}

/// Follows one face's flags from its smallest `from` key back to itself.
fn walk_face<K: Ord + Display>(
    face_key: &K,
    flags: &BTreeMap<K, K>,
    index: &BTreeMap<&K, usize>,
) -> PolyResult<Face> {
    for (from, to) in flags {
        for key in [from, to] {
            if !index.contains_key(key) {
                return Err(PolyError::undefined_vertex(key.to_string()));
            }
        }
    }

    let Some(start) = flags.keys().next() else {
        return Err(PolyError::inconsistent(face_key.to_string(), "face has no flags"));
    };

    let bound = flags.len();
    let mut face = Vec::with_capacity(bound);
    let mut current = start;
    loop {
        face.push(index[current]);
        let Some(next) = flags.get(current) else {
            return Err(PolyError::inconsistent(
                face_key.to_string(),
                format!("no flag leaves vertex {current}"),
            ));
        };
        if next == start {
            break;
        }
        if face.len() == bound {
            return Err(PolyError::inconsistent(
                face_key.to_string(),
                format!("orbit did not close within {bound} flags"),
            ));
        }
        current = next;
    }

    if face.len() != bound {
        return Err(PolyError::inconsistent(
            face_key.to_string(),
            format!("orbit closed after {} of {bound} flags", face.len()),
        ));
    }
    Ok(face)
}
