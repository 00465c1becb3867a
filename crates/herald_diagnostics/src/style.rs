//! ANSI styling applied to designated substrings of rendered output.

use crate::severity::Severity;

/// ANSI escape sequences for the styles used in rendered output.
mod codes {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const PATH: &str = "\x1b[1m"; // Bold
    pub const RANGES: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// A named span style used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Error-severity emphasis (counts, line numbers).
    Error,
    /// Warning-severity emphasis.
    Warning,
    /// Info-severity emphasis.
    Info,
    /// File-path emphasis on the first summary line of a file.
    Path,
    /// Compressed id-range emphasis.
    Ranges,
}

impl Style {
    /// Returns the style matching a diagnostic severity.
    pub fn for_severity(severity: Severity) -> Style {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
            Severity::Info => Style::Info,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Style::Error => codes::ERROR,
            Style::Warning => codes::WARNING,
            Style::Info => codes::INFO,
            Style::Path => codes::PATH,
            Style::Ranges => codes::RANGES,
        }
    }
}

/// Style configuration passed explicitly to the renderer.
///
/// When disabled, [`apply`](Self::apply) is the identity on the text; there
/// is no module-level styling state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Styles {
    enabled: bool,
}

impl Styles {
    /// Creates a style configuration with the given on/off state.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Creates a configuration that wraps spans in ANSI codes.
    pub fn colored() -> Self {
        Self::new(true)
    }

    /// Creates a configuration that passes text through unchanged.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Returns `true` when styling is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the markers for `style`, resetting afterwards.
    ///
    /// Pure: the same inputs always produce the same output, and disabled
    /// styling returns the text unchanged.
    pub fn apply(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{}", style.code(), codes::RESET)
        } else {
            text.to_string()
        }
    }
}
