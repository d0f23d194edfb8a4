//! Text-keyed flag assembler.

use glam::DVec3;

use super::{FlagSet, FlagTable};
use crate::error::PolyResult;
use crate::mesh::Mesh;

/// Flag assembler keyed by free-form text labels.
///
/// Labels are compared as strings, so the output vertex order is the
/// lexicographic order of the labels an operator chose.
#[derive(Debug, Clone, Default)]
pub struct LabelFlags {
    table: FlagTable<String>,
}

impl LabelFlags {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler with `v{i}` registered for every input vertex
    /// at its unit-normalized position.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use polyflag::{FlagSet, LabelFlags, Mesh};
    /// use glam::DVec3;
    ///
    /// let mesh = Mesh::new("m", vec![DVec3::new(0.0, 0.0, 2.0)], vec![]);
    /// let flags = LabelFlags::from_mesh(&mesh);
    /// assert_eq!(flags.position("v0"), Some(DVec3::Z));
    /// ```
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut flags = Self::new();
        for (i, p) in mesh.vertices().iter().enumerate() {
            flags.new_vertex(Self::vertex_label(i), p.normalize_or_zero());
        }
        flags
    }

    /// Label under which [`LabelFlags::from_mesh`] registers vertex `i`.
    #[inline]
    pub fn vertex_label(i: usize) -> String {
        format!("v{i}")
    }

    /// Returns the position registered under `key`.
    pub fn position(&self, key: &str) -> Option<DVec3> {
        self.table.vertices.get(key).copied()
    }
}

impl FlagSet for LabelFlags {
    type Key = String;

    fn new_vertex(&mut self, key: impl Into<String>, position: DVec3) {
        self.table.new_vertex(key.into(), position);
    }

    fn new_flag(
        &mut self,
        face: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) {
        self.table.new_flag(face.into(), from.into(), to.into());
    }

    fn vertex_count(&self) -> usize {
        self.table.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.table.faces.len()
    }

    fn resolve(self, name: &str) -> PolyResult<Mesh> {
        let (vertices, faces) = self.table.resolve()?;
        tracing::debug!(
            mesh = name,
            vertices = vertices.len(),
            faces = faces.len(),
            "resolved label flags"
        );
        Ok(Mesh::new(name, vertices, faces))
    }
}
