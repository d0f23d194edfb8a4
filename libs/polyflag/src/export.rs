//! # Render Buffers
//!
//! Flat-shaded GPU buffers. Every face gets its own copy of its corners so
//! the normal and color stay constant across it; faces are fan-triangulated
//! from their first corner.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Mesh buffers suitable for GPU rendering.
///
/// All attribute arrays are flat, one entry per buffer vertex, and use `f32`
/// for WebGL/WebGPU compatibility.
///
/// ## Example
///
/// ```rust
/// use polyflag::{SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let buffers = cube.to_render_buffers();
///
/// assert_eq!(buffers.vertex_count(), 6 * 4);
/// assert_eq!(buffers.triangle_count(), 6 * 2);
/// # Ok::<(), polyflag::PolyError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderBuffers {
    /// Positions as `[x, y, z, x, y, z, ...]`.
    pub positions: Vec<f32>,
    /// Flat face normals, one per buffer vertex.
    pub normals: Vec<f32>,
    /// RGBA colors, one per buffer vertex.
    pub colors: Vec<f32>,
    /// Triangle indices as `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl RenderBuffers {
    /// Returns the number of buffer vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: DVec3, normal: DVec3, color: [f32; 4]) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions
            .extend([position.x as f32, position.y as f32, position.z as f32]);
        self.normals
            .extend([normal.x as f32, normal.y as f32, normal.z as f32]);
        self.colors.extend(color);
        index
    }
}

impl Mesh {
    /// Exports the mesh to flat-shaded render buffers.
    ///
    /// Uses the attributes cached by [`Mesh::recalc`] when present and
    /// computes them otherwise. Faces with fewer than three corners are
    /// skipped.
    pub fn to_render_buffers(&self) -> RenderBuffers {
        let (normals, colors) = match self.derived() {
            Some(derived) => (derived.normals.clone(), derived.colors.clone()),
            None => (self.face_normals(), self.face_colors()),
        };

        let mut buffers = RenderBuffers::default();
        for (i, (normal, color)) in normals.into_iter().zip(colors).enumerate() {
            let points = self.face_points(i);
            if points.len() < 3 {
                continue;
            }
            let corners: Vec<u32> = points
                .into_iter()
                .map(|p| buffers.push_vertex(p, normal, color))
                .collect();
            for k in 1..corners.len() - 1 {
                buffers
                    .indices
                    .extend([corners[0], corners[k], corners[k + 1]]);
            }
        }
        buffers
    }
}
