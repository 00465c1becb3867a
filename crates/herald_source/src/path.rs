//! Path normalization for grouping and display of diagnostic locations.

use std::path::Path;

/// Group key used for diagnostics whose position has no resolvable file path.
pub const UNKNOWN_FILE: &str = "unknown";

/// Normalizes a source-reported path into a file-group key.
///
/// Strips any leading path-separator characters from the reported path, so
/// `/src/top.c` and `src/top.c` land in the same group. Returns
/// [`UNKNOWN_FILE`] when the path is absent or empty after stripping.
/// Base-path configuration never affects group membership.
pub fn group_key(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return UNKNOWN_FILE.to_string();
    };
    let stripped = strip_leading_separators(&path.to_string_lossy()).to_string();
    if stripped.is_empty() {
        UNKNOWN_FILE.to_string()
    } else {
        stripped
    }
}

/// Renders a path for human display, removing a configured base-path prefix.
///
/// When `base` is set and `path` starts with it, the prefix and any
/// separators left at the front are removed; otherwise the path is shown as
/// reported. Returns [`UNKNOWN_FILE`] when the path is absent.
pub fn display_path(path: Option<&Path>, base: Option<&Path>) -> String {
    let Some(path) = path else {
        return UNKNOWN_FILE.to_string();
    };
    if let Some(base) = base {
        if let Ok(rest) = path.strip_prefix(base) {
            let rest = rest.to_string_lossy();
            let rest = strip_leading_separators(&rest);
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }
    path.to_string_lossy().into_owned()
}

/// Strips leading `/` and `\` characters from a path string.
fn strip_leading_separators(path: &str) -> &str {
    path.trim_start_matches(['/', '\\'])
}
