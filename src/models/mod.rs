//! Data models for the imports graph

pub mod config;
pub mod graph;
pub mod tree;

pub use graph::{Edge, FileId, HeightMap, KnownFileSet};
pub use tree::{DirectoryTree, TreeEntry};
