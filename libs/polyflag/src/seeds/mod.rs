//! # Seed Solids
//!
//! The base polyhedra that notation strings start from. The interpreter
//! only depends on the [`SeedGenerator`] trait; [`StandardSeeds`] is the
//! implementation shipped with the crate.
//!
//! ## Seeds
//!
//! | Letter | Solid | Parameter |
//! |--------|-------|-----------|
//! | `T` `C` `O` `I` `D` | Platonic solids | ignored |
//! | `P` | prism | sides |
//! | `A` | antiprism | sides |
//! | `Y` | pyramid | sides |
//! | `U` | cupola | sides of the top |
//! | `V` | anticupola | sides of the top |
//! | `J` | Johnson solid | index, 1 to 5 |

mod cupola;
mod platonic;
mod prismatic;


use config::constants::{DEFAULT_SEED_SIDES, MAX_SEED_SIDES, MIN_SEED_SIDES};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{PolyError, PolyResult};
use crate::mesh::{Face, Mesh};

// =============================================================================
// SEED KIND
// =============================================================================

/// Which seed solid to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeedKind {
    /// `T`
    Tetrahedron,
    /// `C`
    Cube,
    /// `O`
    Octahedron,
    /// `I`
    Icosahedron,
    /// `D`
    Dodecahedron,
    /// `P`
    Prism,
    /// `A`
    Antiprism,
    /// `Y`
    Pyramid,
    /// `U`
    Cupola,
    /// `V`
    Anticupola,
    /// `J`
    Johnson,
}

impl SeedKind {
    /// Every seed kind, in notation-table order.
    pub const ALL: [SeedKind; 11] = [
        SeedKind::Tetrahedron,
        SeedKind::Cube,
        SeedKind::Octahedron,
        SeedKind::Icosahedron,
        SeedKind::Dodecahedron,
        SeedKind::Prism,
        SeedKind::Antiprism,
        SeedKind::Pyramid,
        SeedKind::Cupola,
        SeedKind::Anticupola,
        SeedKind::Johnson,
    ];

    /// Looks up the seed named by a notation letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.letter() == letter)
    }

    /// Returns the notation letter.
    pub fn letter(self) -> char {
        match self {
            SeedKind::Tetrahedron => 'T',
            SeedKind::Cube => 'C',
            SeedKind::Octahedron => 'O',
            SeedKind::Icosahedron => 'I',
            SeedKind::Dodecahedron => 'D',
            SeedKind::Prism => 'P',
            SeedKind::Antiprism => 'A',
            SeedKind::Pyramid => 'Y',
            SeedKind::Cupola => 'U',
            SeedKind::Anticupola => 'V',
            SeedKind::Johnson => 'J',
        }
    }

    /// True if the seed reads its numeric parameter.
    pub fn is_parametric(self) -> bool {
        !matches!(
            self,
            SeedKind::Tetrahedron
                | SeedKind::Cube
                | SeedKind::Octahedron
                | SeedKind::Icosahedron
                | SeedKind::Dodecahedron
        )
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Source of seed meshes.
///
/// Implementations are shared read-only between parallel evaluations.
pub trait SeedGenerator: Send + Sync {
    /// Builds the seed `kind` with parameter `n` (zero when absent).
    fn generate(&self, kind: SeedKind, n: u32) -> PolyResult<Mesh>;
}

/// Built-in seed solids, centred on the origin with outward faces.
///
/// ## Example
///
/// ```rust
/// use polyflag::{SeedGenerator, SeedKind, StandardSeeds};
///
/// let prism = StandardSeeds.generate(SeedKind::Prism, 5)?;
/// assert_eq!(prism.name(), "P5");
/// assert_eq!(prism.vertex_count(), 10);
/// assert_eq!(prism.face_count(), 7);
/// # Ok::<(), polyflag::PolyError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSeeds;

impl SeedGenerator for StandardSeeds {
    fn generate(&self, kind: SeedKind, n: u32) -> PolyResult<Mesh> {
        let name = if kind.is_parametric() && n > 0 {
            format!("{}{n}", kind.letter())
        } else {
            kind.letter().to_string()
        };

        let (vertices, faces) = match kind {
            SeedKind::Tetrahedron => platonic::tetrahedron(),
            SeedKind::Cube => platonic::cube(),
            SeedKind::Octahedron => platonic::octahedron(),
            SeedKind::Icosahedron => platonic::icosahedron(),
            SeedKind::Dodecahedron => platonic::dodecahedron()?,
            SeedKind::Prism => prismatic::prism(sides(kind, n)?),
            SeedKind::Antiprism => prismatic::antiprism(sides(kind, n)?),
            SeedKind::Pyramid => prismatic::pyramid(sides(kind, n)?),
            SeedKind::Cupola => cupola::cupola(sides(kind, n)?),
            SeedKind::Anticupola => cupola::anticupola(sides(kind, n)?),
            SeedKind::Johnson => johnson(n)?,
        };

        tracing::debug!(seed = %name, vertices = vertices.len(), faces = faces.len(), "generated seed");
        Ok(finish(name, vertices, faces))
    }
}

/// Validates a side count, mapping zero to the default. Runs before any
/// allocation.
fn sides(kind: SeedKind, n: u32) -> PolyResult<usize> {
    match n {
        0 => Ok(DEFAULT_SEED_SIDES as usize),
        n if n < MIN_SEED_SIDES => Err(PolyError::invalid_parameter(
            kind.letter().to_string(),
            format!("needs at least {MIN_SEED_SIDES} sides, got {n}"),
        )),
        n if n > MAX_SEED_SIDES => Err(PolyError::invalid_parameter(
            kind.letter().to_string(),
            format!("at most {MAX_SEED_SIDES} sides supported, got {n}"),
        )),
        n => Ok(n as usize),
    }
}

/// Johnson solids J1 to J5.
fn johnson(n: u32) -> PolyResult<(Vec<DVec3>, Vec<Face>)> {
    match n {
        1 => Ok(prismatic::pyramid(4)),
        2 => Ok(prismatic::pyramid(5)),
        3 => Ok(cupola::cupola(3)),
        4 => Ok(cupola::cupola(4)),
        5 => Ok(cupola::cupola(5)),
        _ => Err(PolyError::UnsupportedSeed(format!("J{n}"))),
    }
}

/// Centres the solid on the origin and turns every face outward.
fn finish(name: String, vertices: Vec<DVec3>, faces: Vec<Face>) -> Mesh {
    let center = vertices.iter().copied().sum::<DVec3>() / vertices.len().max(1) as f64;
    let vertices: Vec<DVec3> = vertices.into_iter().map(|v| v - center).collect();
    let mesh = Mesh::new(name, vertices, faces);

    let normals = mesh.face_normals();
    let centers = mesh.face_centers();
    let (name, vertices, mut faces) = mesh.into_parts();
    for ((face, normal), centroid) in faces.iter_mut().zip(normals).zip(centers) {
        if normal.dot(centroid) < 0.0 {
            face.reverse();
        }
    }
    Mesh::new(name, vertices, faces)
}

/// Point on a horizontal circle.
pub(crate) fn ring_point(radius: f64, angle: f64, z: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), radius * angle.sin(), z)
}
