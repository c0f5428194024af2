//! Module path resolution utilities

use crate::models::FileId;

/// Resolve a raw module path written in `importer` to a candidate [`FileId`] string.
///
/// Relative specifiers are joined onto the importer's directory and
/// normalized. Anything else (bare package names, absolute URLs) is returned
/// unchanged and simply fails the known-file membership check later.
pub fn resolve_import(importer: &FileId, raw: &str) -> String {
    match raw.chars().next() {
        Some('.') => resolve_relative(importer, raw),
        Some(_) | None => raw.to_string(),
    }
}

/// Join a relative specifier onto the importer's directory
fn resolve_relative(importer: &FileId, raw: &str) -> String {
    let base = importer.dirname();
    if base.is_empty() {
        normalize_path(raw)
    } else {
        normalize_path(&format!("{}/{}", base, raw))
    }
}

/// Normalize a `/`-separated relative path.
///
/// Empty and `.` segments are dropped; `..` pops the previous segment unless
/// that segment is itself a leading `..`. A path that collapses to nothing is
/// returned as `.`.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}
