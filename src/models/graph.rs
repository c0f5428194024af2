//! Core graph data structures: file identities, edges and heights

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Separator used between label fragments of a merged edge
pub const LABEL_SEPARATOR: &str = "\n";

/// Canonical, `/`-separated path of a file relative to the scanned root.
///
/// Two `FileId`s are the same node iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Wrap an already normalized path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the display label of a node
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Directory part of the path, empty for files at the root
    pub fn dirname(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// Path segments in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FileId {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl Borrow<str> for FileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The closed, sorted set of files being analyzed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownFileSet {
    files: BTreeSet<FileId>,
}

impl KnownFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: FileId) -> bool {
        self.files.insert(file)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }

    /// Look up the stored id for a path string
    pub fn get(&self, file: &str) -> Option<&FileId> {
        self.files.get(file)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileId> {
        self.files.iter()
    }
}

impl FromIterator<FileId> for KnownFileSet {
    fn from_iter<I: IntoIterator<Item = FileId>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for KnownFileSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(FileId::from).collect()
    }
}

impl<'a> IntoIterator for &'a KnownFileSet {
    type Item = &'a FileId;
    type IntoIter = std::collections::btree_set::Iter<'a, FileId>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// A directed import relationship between two known files.
///
/// All statements between the same pair are merged into one edge; the
/// fragments keep the order in which the importer's statements appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The file containing the import statement
    pub importer: FileId,
    /// The file being imported
    pub imported: FileId,
    /// One or more label fragments per import statement, possibly empty
    #[serde(rename = "labels")]
    pub fragments: Vec<String>,
}

impl Edge {
    pub fn new(importer: FileId, imported: FileId, fragments: Vec<String>) -> Self {
        Self {
            importer,
            imported,
            fragments,
        }
    }

    /// Merged label text: non-empty fragments joined by a line break
    pub fn label(&self) -> String {
        self.fragments
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }

    /// True when no fragment carries any text
    pub fn has_empty_label(&self) -> bool {
        self.fragments.iter().all(|fragment| fragment.is_empty())
    }

    pub fn is_self_loop(&self) -> bool {
        self.importer == self.imported
    }
}

/// Per-file node height, a rendering hint only
pub type HeightMap = BTreeMap<FileId, f64>;
