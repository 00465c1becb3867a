//! Immutable source positions attached to diagnostics.

use crate::path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The source location of a diagnostic.
///
/// Every field is optional except the source line text: diagnostics from a
/// build step that cannot attribute a file or line still carry a position,
/// and the accessors supply the documented fallbacks (`"unknown"` for the
/// file, 0 for the line). Positions are never mutated after creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// The source file the diagnostic refers to, if known.
    pub file: Option<PathBuf>,
    /// The 1-indexed line number, if known.
    pub line: Option<u32>,
    /// The literal text of the offending source line (may be empty).
    pub line_content: String,
    /// Prefix written before the `^` marker on the caret line, usually the
    /// whitespace preceding the column of the issue.
    pub pointer_prefix: Option<String>,
}

impl Position {
    /// Creates a position in the given file at the given line.
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            line_content: String::new(),
            pointer_prefix: None,
        }
    }

    /// Creates a position with no resolvable file or line.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Sets the literal source line text.
    pub fn with_line_content(mut self, content: impl Into<String>) -> Self {
        self.line_content = content.into();
        self
    }

    /// Sets the pointer prefix used to place the `^` marker.
    pub fn with_pointer_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.pointer_prefix = Some(prefix.into());
        self
    }

    /// Returns the line number, defaulting to 0 when absent.
    pub fn line_or_zero(&self) -> u32 {
        self.line.unwrap_or(0)
    }

    /// Returns the normalized file-group key for this position.
    ///
    /// Leading path separators are stripped from the reported path;
    /// positions without a resolvable path map to `"unknown"`.
    pub fn group_key(&self) -> String {
        path::group_key(self.file.as_deref())
    }

    /// Returns the path to display for this position.
    ///
    /// When a base path is configured, that prefix is removed before
    /// display. Display never affects group membership.
    pub fn display_path(&self, base: Option<&Path>) -> String {
        path::display_path(self.file.as_deref(), base)
    }
}
