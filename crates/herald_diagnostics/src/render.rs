//! Rendering of full-detail diagnostic blocks and per-file summaries.

use crate::diagnostic::Diagnostic;
use crate::ranges;
use crate::severity::Severity;
use crate::store::group_by_file;
use crate::style::{Style, Styles};
use std::path::PathBuf;

/// Returns "s" for plural counts, "" for singular.
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn digit_width(count: usize) -> usize {
    count.to_string().len()
}

/// Renders diagnostics as detail blocks and aggregate per-file summaries.
///
/// Produces detail output like:
/// ```text
/// [1] src/top.c:10:
///     expected ';'
///     int x = 1
///             ^
/// ```
/// and, for a cycle spanning several files, a summary like:
/// ```text
/// 2 src/top.c 1,3 @ 10,12
/// 1 src/uart.c 2 @ 3
/// 1 warning found.
/// 2 errors found.
/// ```
#[derive(Debug, Clone)]
pub struct SummaryRenderer {
    styles: Styles,
    base_path: Option<PathBuf>,
}

impl SummaryRenderer {
    /// Creates a renderer with the given style configuration and no base path.
    pub fn new(styles: Styles) -> Self {
        Self {
            styles,
            base_path: None,
        }
    }

    /// Sets the base directory stripped from displayed file paths.
    pub fn with_base_path(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base.into());
        self
    }

    /// Renders the full-detail block for one diagnostic.
    ///
    /// The first line carries the `[<id>] ` prefix — warnings get one extra
    /// leading space so their brackets line up against the error channel's
    /// wider severity label — and every continuation line is indented to the
    /// prefix width. The header shows the display path and the line number
    /// styled per severity; the body shows the message, the literal source
    /// line when present, and a caret line when a pointer prefix is known.
    pub fn render_detail(&self, diag: &Diagnostic) -> String {
        let prefix = if diag.severity.is_warning() {
            format!(" [{}] ", diag.id)
        } else {
            format!("[{}] ", diag.id)
        };
        let indent = " ".repeat(prefix.len());

        let line = diag.position.line_or_zero();
        let styled_line = self
            .styles
            .apply(Style::for_severity(diag.severity), &line.to_string());
        let path = diag.position.display_path(self.base_path.as_deref());

        let mut out = String::new();
        out.push_str(&prefix);
        out.push_str(&format!("{path}:{styled_line}:"));

        for message_line in diag.message.lines() {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(message_line);
        }
        if !diag.position.line_content.is_empty() {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(&diag.position.line_content);
        }
        if let Some(pointer) = &diag.position.pointer_prefix {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(pointer);
            out.push('^');
        }
        out
    }

    /// Renders the aggregate summary for a completed cycle.
    ///
    /// The per-file breakdown only appears when diagnostics span more than
    /// one distinct file group; groups render in ascending path order, each
    /// with its Error subset line before its Warning subset line (Info never
    /// appears in the breakdown). Totals follow, Warning before Error,
    /// omitting zero counts. Rendering mutates nothing, so repeated calls
    /// over an unchanged snapshot produce identical text.
    pub fn render_summary(&self, diagnostics: &[Diagnostic]) -> String {
        let total_errors = diagnostics.iter().filter(|d| d.severity.is_error()).count();
        let total_warnings = diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count();
        // Global totals bound every per-file subset count, so this width
        // right-aligns the count column across all printed lines.
        let width = digit_width(total_errors).max(digit_width(total_warnings));

        let mut lines: Vec<String> = Vec::new();
        let groups = group_by_file(diagnostics);
        if groups.len() > 1 {
            for (file, group) in &groups {
                let mut file_shown = false;
                for severity in [Severity::Error, Severity::Warning] {
                    let subset: Vec<&Diagnostic> = group
                        .iter()
                        .copied()
                        .filter(|d| d.severity == severity)
                        .collect();
                    if subset.is_empty() {
                        continue;
                    }

                    let ids: Vec<u32> = subset.iter().map(|d| d.id).collect();
                    let line_numbers: Vec<u32> =
                        subset.iter().map(|d| d.position.line_or_zero()).collect();

                    let count = self.styles.apply(
                        Style::for_severity(severity),
                        &format!("{:>width$}", subset.len()),
                    );
                    let name = if file_shown {
                        " ".repeat(file.chars().count())
                    } else {
                        file_shown = true;
                        self.styles.apply(Style::Path, file)
                    };
                    let ids = self.styles.apply(Style::Ranges, &ranges::short(&ids));
                    lines.push(format!(
                        "{count} {name} {ids} @ {}",
                        ranges::short(&line_numbers)
                    ));
                }
            }
        }

        if total_warnings > 0 {
            lines.push(format!(
                "{total_warnings} warning{} found.",
                plural_s(total_warnings)
            ));
        }
        if total_errors > 0 {
            lines.push(format!(
                "{total_errors} error{} found.",
                plural_s(total_errors)
            ));
        }
        lines.join("\n")
    }
}
