//! # Notation Errors
//!
//! Error types for notation evaluation. Recoverable problems (unknown codes,
//! unknown seeds, filters that select nothing) are diagnostics, not errors.

use polyflag::PolyError;
use thiserror::Error;

/// Errors that abort a notation evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    /// The seed parameter is negative or does not fit the integer range.
    #[error("Invalid seed parameter in '{notation}': {message}")]
    InvalidSeedParameter {
        /// The full notation string.
        notation: String,
        /// Description of the problem.
        message: String,
    },

    /// A seed or operator failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Result type for notation evaluation.
pub type NotationResult<T> = Result<T, NotationError>;

// =============================================================================
// TESTS
// =============================================================================
