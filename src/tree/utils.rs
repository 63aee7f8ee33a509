//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::Path;

/// Sibling order: case-insensitive, with a case-sensitive comparison breaking ties.
///
/// `"apple" < "Banana" < "cherry"`, and `"B" < "b"` since only case differs.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Name shown for a path: its final component.
///
/// Paths without one (`.`, `..`, `/`) fall back to the final component of the
/// canonical path, then to the path as given.
pub fn display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }

    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}
