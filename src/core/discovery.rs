//! Discovery of the known file set
//!
//! Walks the root directory, keeps files with a configured extension,
//! intersects them with the files git tracks (when git is usable) and drops
//! everything an ignore pattern matches.

use crate::error::{handle_error, ImportsGraphError, Result, ResultExt};
use crate::models::{config::Settings, FileId, KnownFileSet};
use crate::utils::normalize_path;
use glob::Pattern;
use std::collections::HashSet;
use std::path::{Component, Path};
use std::process::Command;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Compile ignore patterns, failing on the first one that is not a valid glob.
///
/// A leading `./` is stripped since file ids never carry it. Patterns are
/// matched with default options: `*` also matches `/` and a pattern must
/// match the whole file id.
pub fn compile_ignore_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|raw| {
            let trimmed = raw.strip_prefix("./").unwrap_or(raw);
            Pattern::new(trimmed)
                .map_err(|err| ImportsGraphError::ignore_pattern_error(raw.clone(), err))
        })
        .collect()
}

/// Check if a file id matches any ignore pattern
pub fn is_ignored(file: &FileId, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(file.as_str()))
}

/// Finds the files that take part in the graph
pub struct FileDiscovery<'a> {
    settings: &'a Settings,
}

impl<'a> FileDiscovery<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Produce the known file set for the configured root
    pub fn discover(&self) -> Result<KnownFileSet> {
        let root = &self.settings.root;
        if !root.is_dir() {
            return Err(ImportsGraphError::InvalidPath { path: root.clone() });
        }

        // Fail fast before touching the file system
        let patterns = compile_ignore_patterns(&self.settings.ignore_patterns)?;

        let walked = self.walk_files()?;
        debug!("walked {} candidate files under {}", walked.len(), root.display());

        let tracked = if self.settings.use_git {
            match git_tracked_files(root) {
                Ok(tracked) => Some(tracked),
                Err(err) => {
                    warn!("{}; using every file found on disk", err.user_message());
                    None
                }
            }
        } else {
            None
        };

        let files: KnownFileSet = walked
            .into_iter()
            .filter(|file| match &tracked {
                Some(tracked) => tracked.contains(file.as_str()),
                None => true,
            })
            .filter(|file| !is_ignored(file, &patterns))
            .collect();

        debug!("{} files in the known set", files.len());
        Ok(files)
    }

    /// Walk the root and collect every file with a configured extension
    fn walk_files(&self) -> Result<Vec<FileId>> {
        let root = &self.settings.root;
        let mut walker = WalkDir::new(root)
            .follow_links(self.settings.follow_links)
            .sort_by_file_name();
        if let Some(max_depth) = self.settings.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let mut files = Vec::new();
        for entry in walker.into_iter().filter_entry(|entry| !is_git_dir(entry)) {
            let entry = match entry.with_file_context(root) {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable directories are skipped, anything critical stops the walk
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_known_extension(entry.path()) {
                continue;
            }

            if let Some(id) = relative_file_id(root, entry.path()) {
                files.push(id);
            }
        }

        Ok(files)
    }

    fn has_known_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.settings
            .extensions
            .iter()
            .any(|known| known.trim_start_matches('.') == ext)
    }
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ".git"
}

/// Express a walked path as a `/`-separated id relative to the root
fn relative_file_id(root: &Path, path: &Path) -> Option<FileId> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(FileId::new(segments.join("/")))
    }
}

/// Ask git for tracked plus untracked-but-not-ignored files under `root`
pub fn git_tracked_files(root: &Path) -> Result<HashSet<String>> {
    let output = Command::new("git")
        .args(["ls-files", "-co", "--exclude-standard", "-z"])
        .current_dir(root)
        .output()
        .map_err(|err| ImportsGraphError::git_tracking_error(root, err.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ImportsGraphError::git_tracking_error(
            root,
            stderr.trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .split('\0')
        .filter(|path| !path.is_empty())
        .map(normalize_path)
        .collect())
}
