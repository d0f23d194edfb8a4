//! # Notation Interpreter
//!
//! Evaluates a decoded [`Notation`]: requests the seed, applies the
//! operators innermost-first and refreshes the derived attributes once at
//! the end.


use std::sync::Arc;

use config::constants::ConwayConfig;
use polyflag::{Diagnostics, Mesh, Operator, PolyError, SeedGenerator, SeedKind, StandardSeeds};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{NotationError, NotationResult};
use crate::lexer::Notation;

/// Diagnostic source for problems found in the notation itself.
const SOURCE: &str = "notation";

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Final mesh, with derived attributes computed.
    pub mesh: Mesh,
    /// Warnings and notes raised on the way.
    pub diagnostics: Diagnostics,
}

/// Notation evaluator bound to a configuration and a seed source.
///
/// Cheap to clone; the seed generator is shared.
///
/// ## Example
///
/// ```rust
/// use conway_notation::Interpreter;
///
/// let interpreter = Interpreter::default();
/// let result = interpreter.evaluate("dkC")?;
/// assert_eq!(result.mesh.name(), "dkC");
/// assert_eq!(result.mesh.vertex_count(), 24);
/// assert!(result.diagnostics.is_empty());
/// # Ok::<(), conway_notation::NotationError>(())
/// ```
#[derive(Clone)]
pub struct Interpreter {
    config: ConwayConfig,
    seeds: Arc<dyn SeedGenerator>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ConwayConfig::default(), StandardSeeds)
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Interpreter {
    /// Creates an interpreter with the given presets and seed source.
    pub fn new(config: ConwayConfig, seeds: impl SeedGenerator + 'static) -> Self {
        Self {
            config,
            seeds: Arc::new(seeds),
        }
    }

    /// Returns the operator presets.
    pub fn config(&self) -> &ConwayConfig {
        &self.config
    }

    /// Evaluates `text` and returns the mesh with its diagnostics.
    ///
    /// An unknown, unsupported or out-of-range seed yields an empty mesh and
    /// a warning. An unknown operator code, or an operator whose argument is
    /// out of range, is skipped with a warning.
    pub fn evaluate(&self, text: &str) -> NotationResult<Evaluation> {
        let notation = Notation::decode(text);
        tracing::debug!(notation = text, ops = notation.ops.len(), "decoded notation");

        let param = u32::try_from(notation.param).map_err(|_| {
            NotationError::InvalidSeedParameter {
                notation: text.to_string(),
                message: "seed parameter does not fit a 32-bit count".to_string(),
            }
        })?;

        let mut diagnostics = Diagnostics::new();
        let Some(mut mesh) = self.seed(&notation, param, &mut diagnostics)? else {
            let mut mesh = Mesh::empty();
            mesh.recalc();
            return Ok(Evaluation { mesh, diagnostics });
        };

        for token in notation.ops.iter().rev() {
            let Some(op) = Operator::from_code(token.code, token.arg, &self.config) else {
                diagnostics.warn(SOURCE, format!("unknown operator '{}' skipped", token.code));
                continue;
            };
            if let Some(arg) = token.arg {
                if !op.takes_argument() {
                    diagnostics.info(
                        SOURCE,
                        format!("operator '{}' takes no argument, ignoring {arg}", token.code),
                    );
                }
            }
            mesh = match op.apply(&mesh, &mut diagnostics) {
                Ok(out) => out,
                Err(PolyError::InvalidParameter { operation, message }) => {
                    diagnostics.warn(op.name(), format!("{operation}: {message}, skipped"));
                    mesh
                }
                Err(e) => return Err(e.into()),
            };
        }

        mesh.recalc();
        tracing::debug!(
            mesh = mesh.name(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "evaluated notation"
        );
        Ok(Evaluation { mesh, diagnostics })
    }

    /// Evaluates `text` and returns only the mesh.
    pub fn parse(&self, text: &str) -> NotationResult<Mesh> {
        self.evaluate(text).map(|e| e.mesh)
    }

    /// Evaluates every string in parallel. Results keep the input order.
    pub fn parse_batch(&self, texts: &[&str]) -> Vec<NotationResult<Mesh>> {
        texts.par_iter().map(|text| self.parse(text)).collect()
    }

    /// Builds the seed, or `None` when the notation names no usable seed.
    fn seed(
        &self,
        notation: &Notation,
        param: u32,
        diagnostics: &mut Diagnostics,
    ) -> NotationResult<Option<Mesh>> {
        let Some(letter) = notation.seed else {
            diagnostics.warn(SOURCE, "no seed given");
            return Ok(None);
        };
        let Some(kind) = SeedKind::from_letter(letter) else {
            diagnostics.warn(SOURCE, format!("unknown seed '{letter}'"));
            return Ok(None);
        };

        if kind.is_parametric() && kind != SeedKind::Johnson && param > self.config.max_seed_sides {
            diagnostics.warn(
                SOURCE,
                format!(
                    "seed '{letter}{param}' exceeds {} sides",
                    self.config.max_seed_sides
                ),
            );
            return Ok(None);
        }

        match self.seeds.generate(kind, param) {
            Ok(mesh) => Ok(Some(mesh)),
            Err(PolyError::UnsupportedSeed(seed)) => {
                diagnostics.warn(SOURCE, format!("unsupported seed '{seed}'"));
                Ok(None)
            }
            Err(PolyError::InvalidParameter { operation, message }) => {
                diagnostics.warn(SOURCE, format!("seed '{operation}' {message}"));
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
