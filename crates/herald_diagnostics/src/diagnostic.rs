//! Recorded diagnostic values with stable sequential ids.

use crate::severity::Severity;
use herald_source::Position;
use serde::{Deserialize, Serialize};

/// One reported diagnostic with its assigned id, severity, text, and position.
///
/// Ids are assigned by [`DiagnosticStore`](crate::DiagnosticStore) in strictly
/// increasing arrival order starting at 1. A diagnostic is never mutated after
/// it is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The sequential id assigned at recording time.
    pub id: u32,
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The diagnostic message (may span multiple lines).
    pub message: String,
    /// The source position the diagnostic refers to.
    pub position: Position,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit id.
    ///
    /// Normal recording goes through
    /// [`DiagnosticStore::record`](crate::DiagnosticStore::record), which
    /// assigns the id; this constructor exists for stores and tests.
    pub fn new(id: u32, severity: Severity, message: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
            position,
        }
    }
}
