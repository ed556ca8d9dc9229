//! Generation diagnostics.
//!
//! Anomalies in the input schema never fail a run; they are skipped in the
//! output and reported here so callers can surface them.

use std::fmt;

/// Kind of anomaly observed during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Complex type with no restriction/extension/sequence content.
    MissingContent,
    /// Sequence element carrying no declared type.
    UntypedElement,
    /// Field type that is neither a mapped primitive nor a known schema type.
    UnknownTypeRef,
}

/// One warning produced during a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Kind of anomaly.
    pub kind: DiagnosticKind,
    /// Affected type, field, or reference.
    pub detail: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::MissingContent => {
                write!(f, "complex type '{}' has no structural content", self.detail)
            }
            DiagnosticKind::UntypedElement => {
                write!(f, "element '{}' declares no type and was skipped", self.detail)
            }
            DiagnosticKind::UnknownTypeRef => {
                write!(f, "unresolved type reference '{}'", self.detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(DiagnosticKind::UnknownTypeRef, "Quantity");
        assert_eq!(diag.to_string(), "unresolved type reference 'Quantity'");

        let diag = Diagnostic::new(DiagnosticKind::MissingContent, "Base");
        assert!(diag.to_string().contains("Base"));
    }
}
