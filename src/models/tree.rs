//! Directory tree used to group nodes into clusters

use super::graph::{FileId, KnownFileSet};
use std::collections::BTreeMap;

/// An entry of a [`DirectoryTree`] level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    /// A nested directory, keyed by its segment name
    Directory(DirectoryTree),
    /// A file leaf, keyed by its full id
    File(FileId),
}

/// Map key of one level: the name plus whether it is a file.
///
/// The flag keeps a file and a directory with the same name (`x.ts` next
/// to `x.ts/`) apart; directories sort before files of equal name.
type EntryKey = (String, bool);

/// Nested mapping mirroring the directories of the known file set.
///
/// Directory entries are keyed by segment name; file leaves are keyed by
/// their full [`FileId`] so a leaf keeps its identity wherever it sits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    entries: BTreeMap<EntryKey, TreeEntry>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tree for every file of the set
    pub fn build(files: &KnownFileSet) -> Self {
        let mut tree = Self::new();
        for file in files {
            tree.add(file);
        }
        tree
    }

    /// Insert one file, creating intermediate directories as needed
    pub fn add(&mut self, file: &FileId) {
        let segments: Vec<&str> = file.segments().collect();
        let (_, dirs) = match segments.split_last() {
            Some(split) => split,
            None => return,
        };

        let mut level = self;
        for dir in dirs {
            let entry = level
                .entries
                .entry(((*dir).to_string(), false))
                .or_insert_with(|| TreeEntry::Directory(DirectoryTree::new()));
            level = match entry {
                TreeEntry::Directory(subtree) => subtree,
                TreeEntry::File(_) => return,
            };
        }

        level
            .entries
            .insert((file.as_str().to_string(), true), TreeEntry::File(file.clone()));
    }

    /// Entries of this level in sorted key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TreeEntry)> {
        self.entries.iter().map(|((name, _), entry)| (name.as_str(), entry))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of file leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|entry| match entry {
                TreeEntry::Directory(subtree) => subtree.leaf_count(),
                TreeEntry::File(_) => 1,
            })
            .sum()
    }

    /// All file leaves in depth-first order
    pub fn leaves(&self) -> Vec<&FileId> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a FileId>) {
        for entry in self.entries.values() {
            match entry {
                TreeEntry::Directory(subtree) => subtree.collect_leaves(out),
                TreeEntry::File(file) => out.push(file),
            }
        }
    }

    /// Follow directory segments from this level
    pub fn subtree(&self, path: &str) -> Option<&DirectoryTree> {
        let mut level = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            level = match level.entries.get(&(segment.to_string(), false))? {
                TreeEntry::Directory(subtree) => subtree,
                TreeEntry::File(_) => return None,
            };
        }
        Some(level)
    }
}
