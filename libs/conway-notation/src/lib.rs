//! # Conway Notation
//!
//! Parser and interpreter for Conway polyhedron notation.
//!
//! ## Architecture
//!
//! ```text
//! "dakC" → lexer (Notation) → interpreter → polyflag seeds + operators → Mesh
//! ```
//!
//! A notation string is a chain of operator codes followed by a seed letter
//! and an optional seed parameter. Operators apply right to left, so `dakC`
//! is `dual(ambo(kis(cube)))`. A number after an operator code is that
//! operator's argument: `k4C` raises pyramids on the 4-sided faces only.
//!
//! ## Example
//!
//! ```rust
//! use conway_notation::parse;
//!
//! let mesh = parse("aC")?;
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.face_count(), 14);
//! # Ok::<(), conway_notation::NotationError>(())
//! ```

pub mod error;
pub mod interpreter;
pub mod lexer;

pub use error::{NotationError, NotationResult};
pub use interpreter::{Evaluation, Interpreter};
pub use lexer::{Notation, OpToken};

use polyflag::Mesh;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Evaluates a notation string with the default presets and seeds.
///
/// ## Example
///
/// ```rust
/// use conway_notation::parse;
///
/// let mesh = parse("kC")?;
/// assert_eq!(mesh.vertex_count(), 14);
/// assert_eq!(mesh.face_count(), 24);
/// # Ok::<(), conway_notation::NotationError>(())
/// ```
pub fn parse(text: &str) -> NotationResult<Mesh> {
    Interpreter::default().parse(text)
}

/// Like [`parse`], also returning the diagnostics.
pub fn evaluate(text: &str) -> NotationResult<Evaluation> {
    Interpreter::default().evaluate(text)
}

/// Evaluates many notation strings in parallel with the default presets.
pub fn parse_batch(texts: &[&str]) -> Vec<NotationResult<Mesh>> {
    Interpreter::default().parse_batch(texts)
}
