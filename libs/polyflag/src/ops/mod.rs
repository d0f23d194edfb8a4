//! # Conway Operators
//!
//! Pure transformations from one [`Mesh`] to another. Every operator except
//! `reflect` and `trisub` drives a fresh flag assembler in a single pass and
//! resolves it; none of them mutates its input.
//!
//! ## Operators
//!
//! | Code | Operator | Assembler |
//! |------|----------|-----------|
//! | `d` | [`dual`] | `FastFlags` |
//! | `a` | [`ambo`] | `FastFlags` |
//! | `g` | [`gyro`] | `LabelFlags` |
//! | `p` | [`propellor`] | `LabelFlags` |
//! | `k` | [`kis`] | `FastFlags` |
//! | `c` | [`chamfer`] | `FastFlags` |
//! | `w` | [`whirl`] | `LabelFlags` |
//! | `q` | [`quinto`] | `FastFlags` |
//! | `n` | [`inset`] | `LabelFlags` |
//! | `x` | [`extrude`] | via inset |
//! | `l` | [`loft`] | via inset |
//! | `H` | [`hollow`] | `LabelFlags` |
//! | `P` | [`perspectiva1`] | `LabelFlags` |
//! | `r` | [`reflect`] | none |
//! | `u` | [`trisub`] | none |
//! | `t` | [`truncate`] | via dual and kis |
//!
//! [`Operator`] wraps them in one enum so the notation interpreter can
//! dispatch on a single `apply` entry point.

mod ambo;
mod chamfer;
mod dual;
mod gyro;
mod hollow;
mod inset;
mod kis;
mod perspectiva;
mod quinto;
mod reflect;
mod trisub;
mod truncate;
mod utils;


pub use ambo::ambo;
pub use chamfer::chamfer;
pub use dual::dual;
pub use gyro::{gyro, propellor, whirl};
pub use hollow::hollow;
pub use inset::{extrude, inset, loft};
pub use kis::kis;
pub use perspectiva::perspectiva1;
pub use quinto::quinto;
pub use reflect::reflect;
pub use trisub::{is_triangulated, trisub};
pub use truncate::{count_truncated, truncate};
pub use utils::count_selected;

use config::constants::{ConwayConfig, LOFT_INSET, TRISUB_DEFAULT_FACTOR};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::PolyResult;
use crate::mesh::Mesh;

// =============================================================================
// OPERATOR
// =============================================================================

/// A Conway operator together with its numeric parameters.
///
/// ## Example
///
/// ```rust
/// use config::constants::ConwayConfig;
/// use polyflag::{Diagnostics, Operator, SeedGenerator, SeedKind, StandardSeeds};
///
/// let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
/// let kis = Operator::from_code('k', Some(4), &ConwayConfig::default()).unwrap();
///
/// let mut diagnostics = Diagnostics::new();
/// let out = kis.apply(&cube, &mut diagnostics)?;
/// assert_eq!(out.name(), "k4C");
/// assert!(diagnostics.is_empty());
/// # Ok::<(), polyflag::PolyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    /// Faces become vertices and vertices become faces.
    Dual,
    /// Rectification through the edge midpoints.
    Ambo,
    /// Pentagon per corner around a face-centre vertex.
    Gyro,
    /// Rotated face inside a ring of quadrilaterals.
    Propellor,
    /// Pyramid on every selected face.
    Kis {
        /// Side count filter, zero for every face.
        sides: usize,
        /// Apex height above the face centroid.
        apex_distance: f64,
    },
    /// Hexagon per edge.
    Chamfer {
        /// Chamfer depth.
        distance: f64,
    },
    /// Two hexagons per edge.
    Whirl,
    /// Pentagon per corner plus an inner face.
    Quinto,
    /// Inset window on every selected face.
    Inset {
        /// Side count filter, zero for every face.
        sides: usize,
        /// Tween fraction toward the face centroid.
        inset: f64,
        /// Offset along the face normal.
        popout: f64,
    },
    /// Inset with no tween and a positive offset.
    Extrude {
        /// Side count filter, zero for every face.
        sides: usize,
    },
    /// Inset with no offset.
    Loft {
        /// Side count filter, zero for every face.
        sides: usize,
        /// Tween fraction toward the face centroid.
        alpha: f64,
    },
    /// Windowed shell with wall thickness.
    Hollow {
        /// Tween fraction of the window corners.
        inset: f64,
        /// Wall thickness.
        thickness: f64,
    },
    /// First Perspectiva construction.
    Perspectiva,
    /// Point reflection through the origin.
    Reflect,
    /// Triangular subdivision.
    Trisub {
        /// Subdivision factor.
        factor: u32,
        /// Distance under which lattice points merge.
        tolerance: f64,
        /// Largest accepted factor.
        max_factor: u32,
    },
    /// Vertex truncation.
    Truncate {
        /// Vertex degree filter, zero for every vertex.
        sides: usize,
        /// Apex height used by the inner kis.
        apex_distance: f64,
    },
}

impl Operator {
    /// Builds the operator named by a notation code, taking its presets from
    /// `config`. `arg` is the numeric argument written after the code.
    ///
    /// Returns `None` for an unknown code. An argument given to an operator
    /// that takes none is dropped; see [`Operator::takes_argument`].
    pub fn from_code(code: char, arg: Option<u32>, config: &ConwayConfig) -> Option<Self> {
        let sides = arg.unwrap_or(0) as usize;
        let op = match code {
            'd' => Self::Dual,
            'a' => Self::Ambo,
            'g' => Self::Gyro,
            'p' => Self::Propellor,
            'k' => Self::Kis {
                sides,
                apex_distance: config.kis_apex_distance,
            },
            'c' => Self::Chamfer {
                distance: config.chamfer_distance,
            },
            'w' => Self::Whirl,
            'q' => Self::Quinto,
            'n' => Self::Inset {
                sides,
                inset: config.inset_distance,
                popout: config.inset_popout,
            },
            'x' => Self::Extrude { sides },
            'l' => Self::Loft {
                sides,
                alpha: LOFT_INSET,
            },
            'H' => Self::Hollow {
                inset: config.hollow_inset,
                thickness: config.hollow_thickness,
            },
            'P' => Self::Perspectiva,
            'r' => Self::Reflect,
            'u' => Self::Trisub {
                factor: arg.unwrap_or(TRISUB_DEFAULT_FACTOR),
                tolerance: config.merge_tolerance,
                max_factor: config.max_trisub_factor,
            },
            't' => Self::Truncate {
                sides,
                apex_distance: config.kis_apex_distance,
            },
            _ => return None,
        };
        Some(op)
    }

    /// Returns the notation code.
    pub fn code(&self) -> char {
        match self {
            Self::Dual => 'd',
            Self::Ambo => 'a',
            Self::Gyro => 'g',
            Self::Propellor => 'p',
            Self::Kis { .. } => 'k',
            Self::Chamfer { .. } => 'c',
            Self::Whirl => 'w',
            Self::Quinto => 'q',
            Self::Inset { .. } => 'n',
            Self::Extrude { .. } => 'x',
            Self::Loft { .. } => 'l',
            Self::Hollow { .. } => 'H',
            Self::Perspectiva => 'P',
            Self::Reflect => 'r',
            Self::Trisub { .. } => 'u',
            Self::Truncate { .. } => 't',
        }
    }

    /// Human-readable operator name, used as the diagnostic source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dual => "dual",
            Self::Ambo => "ambo",
            Self::Gyro => "gyro",
            Self::Propellor => "propellor",
            Self::Kis { .. } => "kis",
            Self::Chamfer { .. } => "chamfer",
            Self::Whirl => "whirl",
            Self::Quinto => "quinto",
            Self::Inset { .. } => "inset",
            Self::Extrude { .. } => "extrude",
            Self::Loft { .. } => "loft",
            Self::Hollow { .. } => "hollow",
            Self::Perspectiva => "perspectiva1",
            Self::Reflect => "reflect",
            Self::Trisub { .. } => "trisub",
            Self::Truncate { .. } => "truncate",
        }
    }

    /// True if the notation may follow this operator's code with a number.
    pub fn takes_argument(&self) -> bool {
        matches!(
            self,
            Self::Kis { .. }
                | Self::Inset { .. }
                | Self::Extrude { .. }
                | Self::Loft { .. }
                | Self::Trisub { .. }
                | Self::Truncate { .. }
        )
    }

    /// Applies the operator to `mesh`.
    ///
    /// Degraded but valid results (a filter that selects nothing, trisub on
    /// a non-triangular mesh) are reported through `diagnostics`.
    pub fn apply(&self, mesh: &Mesh, diagnostics: &mut Diagnostics) -> PolyResult<Mesh> {
        tracing::debug!(op = self.name(), input = mesh.name(), "applying operator");
        match *self {
            Self::Dual => dual(mesh),
            Self::Ambo => ambo(mesh),
            Self::Gyro => gyro(mesh),
            Self::Propellor => propellor(mesh),
            Self::Kis {
                sides,
                apex_distance,
            } => {
                self.check_selection(mesh, sides, diagnostics);
                kis(mesh, sides, apex_distance)
            }
            Self::Chamfer { distance } => chamfer(mesh, distance),
            Self::Whirl => whirl(mesh),
            Self::Quinto => quinto(mesh),
            Self::Inset {
                sides,
                inset: fraction,
                popout,
            } => {
                self.check_selection(mesh, sides, diagnostics);
                inset(mesh, sides, fraction, popout)
            }
            Self::Extrude { sides } => {
                self.check_selection(mesh, sides, diagnostics);
                extrude(mesh, sides)
            }
            Self::Loft { sides, alpha } => {
                self.check_selection(mesh, sides, diagnostics);
                loft(mesh, sides, alpha)
            }
            Self::Hollow { inset, thickness } => hollow(mesh, inset, thickness),
            Self::Perspectiva => perspectiva1(mesh),
            Self::Reflect => Ok(reflect(mesh)),
            Self::Trisub {
                factor,
                tolerance,
                max_factor,
            } => {
                let out = trisub(mesh, factor, tolerance, max_factor)?;
                if !is_triangulated(mesh) {
                    diagnostics.info(
                        self.name(),
                        format!("'{}' has non-triangular faces, left unchanged", mesh.name()),
                    );
                }
                Ok(out)
            }
            Self::Truncate {
                sides,
                apex_distance,
            } => {
                if sides != 0 && count_truncated(mesh, sides) == 0 {
                    diagnostics.warn(
                        self.name(),
                        format!("no vertices of degree {sides} in '{}'", mesh.name()),
                    );
                }
                truncate(mesh, sides, apex_distance)
            }
        }
    }

    fn check_selection(&self, mesh: &Mesh, sides: usize, diagnostics: &mut Diagnostics) {
        if count_selected(mesh, sides) > 0 {
            return;
        }
        let message = match sides {
            0 => format!("'{}' has no faces", mesh.name()),
            n => format!("no {n}-sided faces in '{}'", mesh.name()),
        };
        diagnostics.warn(self.name(), message);
    }
}
