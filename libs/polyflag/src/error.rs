//! # Error Types
//!
//! Error types for mesh assembly, operators and seed generation. All errors
//! are explicit and carry enough context to locate the failing face or key.
//!
//! ## Error Policy
//!
//! - Inconsistent flag sets are reported, never looped over
//! - Parameters are validated before any allocation
//! - Degraded-but-valid results (a filter matching nothing) are not errors;
//!   they go through [`crate::Diagnostics`] instead

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building polyhedra.
///
/// ## Example
///
/// ```rust
/// use polyflag::{FlagSet, LabelFlags, PolyError};
/// use glam::DVec3;
///
/// let mut flags = LabelFlags::new();
/// flags.new_vertex("a".to_string(), DVec3::X);
/// flags.new_flag("f".to_string(), "a".to_string(), "b".to_string());
///
/// match flags.resolve("broken") {
///     Err(PolyError::UndefinedVertex { key }) => assert_eq!(key, "b"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    /// A face's flags do not form exactly one closed directed cycle.
    #[error("Inconsistent topology in face {face}: {message}")]
    InconsistentTopology {
        /// Debug rendering of the offending face key
        face: String,
        /// What went wrong during the orbit walk
        message: String,
    },

    /// A flag refers to a vertex key that was never registered.
    #[error("Undefined vertex key: {key}")]
    UndefinedVertex {
        /// Debug rendering of the missing key
        key: String,
    },

    /// An operator or seed parameter is outside its accepted range.
    #[error("Invalid parameter for '{operation}': {message}")]
    InvalidParameter {
        /// Operator or seed name
        operation: String,
        /// Description of the accepted range
        message: String,
    },

    /// The seed generator has no builder for the requested solid.
    #[error("Unsupported seed: {0}")]
    UnsupportedSeed(String),

    /// A directed edge is repeated or left unpaired.
    #[error("Mesh is not a closed manifold: {0}")]
    NonManifold(String),
}

impl PolyError {
    /// Creates an inconsistent topology error.
    pub fn inconsistent(face: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InconsistentTopology {
            face: face.into(),
            message: message.into(),
        }
    }

    /// Creates an undefined vertex error.
    pub fn undefined_vertex(key: impl Into<String>) -> Self {
        Self::UndefinedVertex { key: key.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for polyhedron operations.
pub type PolyResult<T> = Result<T, PolyError>;
