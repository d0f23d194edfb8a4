//! Integer-keyed flag assembler.

use std::fmt;

use glam::DVec3;

use super::{FlagSet, FlagTable};
use crate::error::{PolyError, PolyResult};
use crate::mesh::{Face, Mesh};

// =============================================================================
// KEY4
// =============================================================================

/// Canonical key made of up to four input indices.
///
/// Every index is stored shifted by one so that zero marks an unused slot;
/// `of1(0)` and `of2(0, 0)` are therefore different keys.
///
/// Indices must not exceed [`Key4::MAX_INDEX`]. Larger indices trip a debug
/// assertion and saturate to the last slot value in release builds.
///
/// ## Example
///
/// ```rust
/// use polyflag::Key4;
///
/// assert_eq!(Key4::edge(5, 2), Key4::of2(2, 5));
/// assert_eq!(Key4::edge_in(1, 9, 3), Key4::of3(1, 3, 9));
/// assert!(Key4::of1(0) < Key4::of2(0, 0));
/// assert_eq!(Key4::of2(0, 4).to_string(), "(1,5,0,0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key4([u32; 4]);

impl Key4 {
    /// Largest index a slot can hold.
    pub const MAX_INDEX: usize = u32::MAX as usize - 1;

    #[inline]
    fn slot(i: usize) -> u32 {
        debug_assert!(i <= Self::MAX_INDEX, "index {i} does not fit a Key4 slot");
        u32::try_from(i).map_or(u32::MAX, |i| i.saturating_add(1))
    }

    /// Key of a single index.
    pub fn of1(a: usize) -> Self {
        Self([Self::slot(a), 0, 0, 0])
    }

    /// Key of an ordered pair.
    pub fn of2(a: usize, b: usize) -> Self {
        Self([Self::slot(a), Self::slot(b), 0, 0])
    }

    /// Key of an ordered triple.
    pub fn of3(a: usize, b: usize, c: usize) -> Self {
        Self([Self::slot(a), Self::slot(b), Self::slot(c), 0])
    }

    /// Key of an ordered quadruple.
    pub fn of4(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self([Self::slot(a), Self::slot(b), Self::slot(c), Self::slot(d)])
    }

    /// Orientation-free key of the undirected edge `a - b`.
    pub fn edge(a: usize, b: usize) -> Self {
        Self::of2(a.min(b), a.max(b))
    }

    /// Orientation-free key of edge `a - b` as seen from face `i`.
    pub fn edge_in(i: usize, a: usize, b: usize) -> Self {
        Self::of3(i, a.min(b), a.max(b))
    }

    /// Raw slots, shifted indices with zero for unused.
    pub fn slots(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for Key4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({a},{b},{c},{d})")
    }
}

// =============================================================================
// FASTFLAGS
// =============================================================================

/// Flag assembler keyed by [`Key4`].
///
/// Besides the flag orbit walk it accepts literal faces through
/// [`FastFlags::add_face`]; those are appended after the walked faces.
#[derive(Debug, Clone, Default)]
pub struct FastFlags {
    table: FlagTable<Key4>,
    literal_faces: Vec<Vec<Key4>>,
}

impl FastFlags {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `Key4::of1(i)` at the raw position of every input vertex.
    ///
    /// Input vertex `i` keeps index `i` in the output when every other
    /// registered key is an `of1` key past the input range.
    pub fn add_vertexes(&mut self, mesh: &Mesh) -> usize {
        for (i, p) in mesh.vertices().iter().enumerate() {
            self.table.new_vertex(Key4::of1(i), *p);
        }
        mesh.vertex_count()
    }

    /// Appends a face given directly as a vertex key cycle.
    pub fn add_face(&mut self, keys: impl IntoIterator<Item = Key4>) -> PolyResult<()> {
        let keys: Vec<Key4> = keys.into_iter().collect();
        if let Some(missing) = keys.iter().find(|k| !self.table.vertices.contains_key(k)) {
            return Err(PolyError::undefined_vertex(missing.to_string()));
        }
        self.literal_faces.push(keys);
        Ok(())
    }

    /// Returns the position registered under `key`.
    pub fn position(&self, key: Key4) -> Option<DVec3> {
        self.table.vertices.get(&key).copied()
    }
}

impl FlagSet for FastFlags {
    type Key = Key4;

    fn new_vertex(&mut self, key: impl Into<Key4>, position: DVec3) {
        self.table.new_vertex(key.into(), position);
    }

    fn new_flag(&mut self, face: impl Into<Key4>, from: impl Into<Key4>, to: impl Into<Key4>) {
        self.table.new_flag(face.into(), from.into(), to.into());
    }

    fn vertex_count(&self) -> usize {
        self.table.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.table.faces.len() + self.literal_faces.len()
    }

    fn resolve(self, name: &str) -> PolyResult<Mesh> {
        let (vertices, mut faces) = self.table.resolve()?;
        let index = self.table.index();
        for keys in &self.literal_faces {
            let face: Face = keys.iter().map(|k| index[k]).collect();
            faces.push(face);
        }
        tracing::debug!(
            mesh = name,
            vertices = vertices.len(),
            faces = faces.len(),
            "resolved fast flags"
        );
        Ok(Mesh::new(name, vertices, faces))
    }
}
