//! Edge construction over the known file set

use crate::core::parallel::{process_with_progress, ProgressUpdate};
use crate::error::{handle_error, ImportsGraphError, Result};
use crate::models::{Edge, FileId, KnownFileSet};
use crate::parsers::extract_imports;
use crate::utils::resolve_import;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Source of file contents, keyed by file id
pub trait SourceReader: Sync {
    fn read(&self, file: &FileId) -> Result<String>;
}

/// Reads files relative to the scanned root
#[derive(Debug, Clone)]
pub struct FsSourceReader {
    root: PathBuf,
}

impl FsSourceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceReader for FsSourceReader {
    fn read(&self, file: &FileId) -> Result<String> {
        let path = self.root.join(file.as_str());
        fs::read_to_string(&path).map_err(|err| ImportsGraphError::file_read_error(path, err))
    }
}

/// In-memory sources, for building graphs without touching the disk
#[derive(Debug, Clone, Default)]
pub struct MemorySourceReader {
    sources: HashMap<String, String>,
}

impl MemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: impl Into<String>, content: impl Into<String>) {
        self.sources.insert(file.into(), content.into());
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MemorySourceReader {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut reader = Self::new();
        for (file, content) in iter {
            reader.insert(file, content);
        }
        reader
    }
}

impl SourceReader for MemorySourceReader {
    fn read(&self, file: &FileId) -> Result<String> {
        self.sources.get(file.as_str()).cloned().ok_or_else(|| {
            ImportsGraphError::file_read_error(
                file.as_str(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no source registered"),
            )
        })
    }
}

/// Result of the edge building stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeBuild {
    /// Merged edges sorted by (importer, imported)
    pub edges: Vec<Edge>,
    /// Files whose content could not be read
    pub unreadable: usize,
}

/// Build the merged edge list of a file set
pub fn build_edges<S: SourceReader>(files: &KnownFileSet, source: &S, parallel: bool) -> EdgeBuild {
    build_edges_with_progress(files, source, parallel, |_| {})
}

/// Build the merged edge list, reporting one progress update per file
pub fn build_edges_with_progress<S, P>(
    files: &KnownFileSet,
    source: &S,
    parallel: bool,
    progress_callback: P,
) -> EdgeBuild
where
    S: SourceReader,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let per_file = process_with_progress(
        files.iter().collect::<Vec<_>>(),
        parallel,
        |file| file_edges(file, files, source),
        progress_callback,
    );

    let mut merged: BTreeMap<(FileId, FileId), Vec<String>> = BTreeMap::new();
    let mut unreadable = 0;

    for (importer, targets) in files.iter().zip(per_file) {
        let Some(targets) = targets else {
            unreadable += 1;
            continue;
        };
        for (imported, fragments) in targets {
            merged
                .entry((importer.clone(), imported))
                .or_default()
                .extend(fragments);
        }
    }

    let edges = merged
        .into_iter()
        .map(|((importer, imported), fragments)| Edge::new(importer, imported, fragments))
        .collect();

    EdgeBuild { edges, unreadable }
}

/// Import targets of one file in statement order, `None` when it cannot be read
fn file_edges<S: SourceReader>(
    file: &FileId,
    files: &KnownFileSet,
    source: &S,
) -> Option<Vec<(FileId, Vec<String>)>> {
    let content = match source.read(file) {
        Ok(content) => content,
        Err(err) => {
            // Read failures are warnings: logged, never fatal
            handle_error(err);
            return None;
        }
    };

    let statements = extract_imports(&content);
    debug!("{}: {} import statements", file, statements.len());

    Some(
        statements
            .into_iter()
            .filter_map(|statement| {
                let resolved = resolve_import(file, &statement.source);
                let target = files.get(&resolved)?;
                Some((target.clone(), statement.fragments))
            })
            .collect(),
    )
}
