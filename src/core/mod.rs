//! Core functionality: file discovery, edge building and graph analysis

pub mod discovery;
pub mod graph_builder;
pub mod heights;
pub mod parallel;
pub mod pipeline;
pub mod stats;

pub use discovery::FileDiscovery;
pub use graph_builder::{build_edges, EdgeBuild, FsSourceReader, MemorySourceReader, SourceReader};
pub use heights::compute_heights;
pub use pipeline::{imports_graph_dot, imports_graph_svg, GraphOutput, ImportsGraph};
pub use stats::{compute_stats, GraphStats};
