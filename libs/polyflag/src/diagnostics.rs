//! # Diagnostics
//!
//! Non-fatal messages raised while building a polyhedron: a filter that
//! matched no face, an unknown operator code, a parameter that was ignored.
//! Each pushed diagnostic is also mirrored to `tracing`.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The result is valid but not what the notation asked for.
    Warning,
    /// Informational note, the result is what was asked for.
    Info,
}

/// A diagnostic message tagged with the stage that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,
    /// Operator or stage name, e.g. `"kis"` or `"notation"`.
    pub source: String,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(severity: Severity, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            source: source.into(),
            message: message.into(),
        }
    }
}

/// Ordered collector of diagnostics for one evaluation.
///
/// ## Example
///
/// ```rust
/// use polyflag::{Diagnostics, Severity};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.warn("kis", "no 7-sided faces");
/// diagnostics.info("notation", "argument ignored");
///
/// assert_eq!(diagnostics.len(), 2);
/// assert!(diagnostics.has_warnings());
/// assert_eq!(diagnostics.iter().next().map(|d| d.severity), Some(Severity::Warning));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warn(&mut self, source: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(source = %source, "{message}");
        self.entries
            .push(Diagnostic::new(Severity::Warning, source, message));
    }

    /// Records an informational note.
    pub fn info(&mut self, source: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(source = %source, "{message}");
        self.entries.push(Diagnostic::new(Severity::Info, source, message));
    }

    /// Iterates in the order the diagnostics were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if at least one warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Consumes the collector, returning the diagnostics in order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn test_info_is_not_a_warning() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("trisub", "non-triangular input");
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("a", "first");
        diagnostics.warn("b", "second");
        let sources: Vec<_> = diagnostics.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, ["a", "b"]);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("kis", "no 5-sided faces");
        let json = serde_json::to_string(&diagnostics.into_vec()).unwrap();
        assert!(json.contains("\"Warning\""));
        assert!(json.contains("no 5-sided faces"));
    }
}
