//! # Polyflag
//!
//! Flag-based polyhedron construction kernel. A mesh is rebuilt by every
//! operator: the operator declares the vertices of the result under symbolic
//! keys and, for every face, the directed edges ("flags") that bound it. The
//! assembler then numbers the vertices and walks each face's flags into an
//! ordered vertex cycle.
//!
//! ## Architecture
//!
//! ```text
//! SeedGenerator → Mesh → Operator → FlagSet::resolve → Mesh → RenderBuffers
//! ```
//!
//! ## Modules
//!
//! - [`mesh`]: face-vertex polyhedron, derived attributes, topology queries
//! - [`flag`]: the [`FlagSet`] trait with [`LabelFlags`] and [`FastFlags`]
//! - [`ops`]: Conway operators and the [`Operator`] dispatch enum
//! - [`seeds`]: the [`SeedGenerator`] interface and [`StandardSeeds`]
//! - [`export`]: flat-shaded GPU buffers
//! - [`diagnostics`]: non-fatal warnings raised while building
//!
//! ## Usage
//!
//! ```rust
//! use polyflag::{ops, SeedGenerator, SeedKind, StandardSeeds};
//!
//! let cube = StandardSeeds.generate(SeedKind::Cube, 0)?;
//! let octahedron = ops::dual(&cube)?;
//! assert_eq!(octahedron.vertex_count(), 6);
//! assert_eq!(octahedron.face_count(), 8);
//! assert_eq!(octahedron.name(), "dC");
//! # Ok::<(), polyflag::PolyError>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod export;
pub mod flag;
pub mod mesh;
pub mod ops;
pub mod seeds;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{PolyError, PolyResult};
pub use export::RenderBuffers;
pub use flag::{FastFlags, FlagSet, Key4, LabelFlags};
pub use mesh::{DerivedAttributes, Face, Mesh};
pub use ops::Operator;
pub use seeds::{SeedGenerator, SeedKind, StandardSeeds};
