//! Run-scoped generation context.
//!
//! One [`GenContext`] lives for the duration of a single generation run. It
//! records, per rendered root class, the mapping from property name to its
//! rendered C# type, so subclasses can detect and skip fields already
//! declared by their base. It also accumulates diagnostics.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Immutable-once-committed field set of one rendered class.
///
/// A subtype's snapshot overlays its own fields onto a shared reference to
/// its base's snapshot instead of deep-cloning the base's map. Lookups walk
/// the overlay chain.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    base: Option<Arc<FieldSnapshot>>,
    own: BTreeMap<String, String>,
}

impl FieldSnapshot {
    /// Creates an empty snapshot with no base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot overlaying an existing base snapshot.
    #[must_use]
    pub fn with_base(base: Arc<FieldSnapshot>) -> Self {
        Self {
            base: Some(base),
            own: BTreeMap::new(),
        }
    }

    /// Records a field's rendered type, shadowing any inherited entry.
    pub fn insert(&mut self, name: impl Into<String>, rendered_type: impl Into<String>) {
        self.own.insert(name.into(), rendered_type.into());
    }

    /// Returns true if the field exists here or anywhere up the base chain.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a field's rendered type, walking the base chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.own.get(name) {
            Some(rendered) => Some(rendered.as_str()),
            None => self.base.as_ref().and_then(|base| base.get(name)),
        }
    }

    /// Number of fields declared directly on this snapshot.
    #[must_use]
    pub fn own_len(&self) -> usize {
        self.own.len()
    }
}

/// Mutable state of one generation run.
#[derive(Debug, Default)]
pub struct GenContext {
    cache: HashMap<String, Arc<FieldSnapshot>>,
    diagnostics: Vec<Diagnostic>,
}

impl GenContext {
    /// Creates a fresh context for one run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed snapshot for a class name, if rendered earlier
    /// in this run.
    #[must_use]
    pub fn snapshot(&self, class_name: &str) -> Option<&Arc<FieldSnapshot>> {
        self.cache.get(class_name)
    }

    /// Commits a root class's snapshot. Nested component types are never
    /// committed; their snapshots are ephemeral.
    pub fn commit(&mut self, class_name: impl Into<String>, snapshot: FieldSnapshot) {
        self.cache.insert(class_name.into(), Arc::new(snapshot));
    }

    /// Records a warning.
    pub fn warn(&mut self, kind: DiagnosticKind, detail: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(kind, detail));
    }

    /// Returns the warnings recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the context and returns its warnings.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
