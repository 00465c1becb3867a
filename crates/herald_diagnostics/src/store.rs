//! Ordered accumulation of diagnostics with stable sequential ids.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use herald_source::Position;
use std::collections::BTreeMap;

/// An ordered collection of recorded diagnostics.
///
/// Insertion order is id order: `record` assigns `id = len + 1`, so ids form
/// `1..=n` within a cycle and restart at 1 after [`reset`](Self::reset). The
/// store is single-owner and mutated through `&mut self` only; a host that
/// feeds it from multiple producers must serialize the `record` path itself,
/// because id assignment is a strict monotonic counter.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic, assigning the next sequential id.
    ///
    /// Always succeeds; returns a reference to the stored value.
    pub fn record(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        position: Position,
    ) -> &Diagnostic {
        let id = self.diagnostics.len() as u32 + 1;
        self.diagnostics
            .push(Diagnostic::new(id, severity, message, position));
        self.diagnostics.last().unwrap()
    }

    /// Clears all diagnostics; the next recorded diagnostic gets id 1 again.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
    }

    /// Returns `true` if any error-severity diagnostics are stored.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Returns `true` if any warning-severity diagnostics are stored.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Returns the number of stored diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if no diagnostics are stored.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns all stored diagnostics in id order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the highest severity present, or `None` when empty.
    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    /// Groups stored diagnostics by normalized file path.
    ///
    /// Built fresh on every call; see [`group_by_file`].
    pub fn group_by_file(&self) -> BTreeMap<String, Vec<&Diagnostic>> {
        group_by_file(&self.diagnostics)
    }
}

/// Groups a diagnostic slice by the normalized file path of each position.
///
/// Keys are [`Position::group_key`] values (leading path separators stripped,
/// `"unknown"` for positions without a resolvable file). Within a group the
/// store's insertion order is preserved; the map iterates keys in ascending
/// lexicographic order.
pub fn group_by_file(diagnostics: &[Diagnostic]) -> BTreeMap<String, Vec<&Diagnostic>> {
    let mut groups: BTreeMap<String, Vec<&Diagnostic>> = BTreeMap::new();
    for diag in diagnostics {
        groups.entry(diag.position.group_key()).or_default().push(diag);
    }
    groups
}
