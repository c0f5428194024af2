//! imports-graph - a module dependency graph builder for JS/TS source trees
//!
//! Scans a directory for source files, extracts their relative imports and
//! emits a Graphviz DOT graph: one node per file, one labelled edge per
//! importing file and imported file, with directories drawn as clusters.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{imports_graph_dot, imports_graph_svg, GraphOutput, GraphStats, ImportsGraph};
pub use error::{handle_error, ErrorSeverity, ImportsGraphError, Result, ResultExt};
pub use models::{
    config::{OutputFormat, Settings},
    graph::{Edge, FileId, HeightMap, KnownFileSet},
    tree::DirectoryTree,
};
pub use output::{render_dot, RenderOptions};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
