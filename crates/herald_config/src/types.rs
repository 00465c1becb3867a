//! Configuration types deserialized from `herald.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level reporter configuration parsed from `herald.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ReporterConfig {
    /// Settings controlling summary rendering and display.
    #[serde(default)]
    pub report: ReportSection,
}

/// The `[report]` section of `herald.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ReportSection {
    /// When to apply ANSI styling to rendered output.
    #[serde(default)]
    pub color: ColorMode,
    /// Base directory stripped from absolute file paths before display.
    ///
    /// Affects display only; file grouping always uses the source-reported
    /// path.
    #[serde(default)]
    pub base_path: Option<PathBuf>,
}

/// Controls whether rendered output carries ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the output channel is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Resolves the mode to a concrete on/off decision.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`]; the caller owns
    /// terminal detection.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReporterConfig::default();
        assert_eq!(config.report.color, ColorMode::Auto);
        assert!(config.report.base_path.is_none());
    }

    #[test]
    fn auto_follows_tty() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
    }

    #[test]
    fn always_and_never_ignore_tty() {
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
