//! End-to-end graph construction
//!
//! Composes the stages: discovery, edges, heights, directory tree and
//! statistics. Each stage is a pure function of the previous results.

use crate::core::discovery::FileDiscovery;
use crate::core::graph_builder::{build_edges_with_progress, FsSourceReader, SourceReader};
use crate::core::heights::compute_heights;
use crate::core::parallel::ProgressUpdate;
use crate::core::stats::{compute_stats, GraphStats};
use crate::error::Result;
use crate::models::{config::Settings, DirectoryTree, Edge, HeightMap, KnownFileSet};
use crate::output::dot::{render_dot, RenderOptions};
use crate::output::render::render_svg;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything computed for one run
#[derive(Debug, Clone)]
pub struct GraphOutput {
    pub root: PathBuf,
    pub files: KnownFileSet,
    pub edges: Vec<Edge>,
    pub heights: HeightMap,
    pub tree: DirectoryTree,
    pub stats: GraphStats,
    /// Files that could not be read and contributed no edges
    pub unreadable: usize,
}

impl GraphOutput {
    /// Assemble the derived structures for an already known file set and edge list
    pub fn assemble(root: PathBuf, files: KnownFileSet, edges: Vec<Edge>, unreadable: usize) -> Self {
        let heights = compute_heights(&edges, &files);
        let tree = DirectoryTree::build(&files);
        let stats = compute_stats(&files, &edges);
        Self {
            root,
            files,
            edges,
            heights,
            tree,
            stats,
            unreadable,
        }
    }

    pub fn to_dot(&self, options: &RenderOptions) -> String {
        render_dot(&self.tree, &self.edges, &self.heights, options)
    }
}

/// Builds the import graph of a directory
pub struct ImportsGraph {
    settings: Settings,
}

impl ImportsGraph {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// DOT options derived from the settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            graph_name: self.settings.graph_name.clone(),
            cluster_directories: self.settings.cluster_directories,
            reverse: self.settings.reverse,
        }
    }

    pub fn build(&self) -> Result<GraphOutput> {
        self.build_with_progress(|_| {})
    }

    /// Build, reporting one progress update per scanned file
    pub fn build_with_progress<P>(&self, progress_callback: P) -> Result<GraphOutput>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let reader = FsSourceReader::new(&self.settings.root);
        self.build_from(&reader, progress_callback)
    }

    /// Build with file contents taken from `source` instead of the disk
    pub fn build_from<S, P>(&self, source: &S, progress_callback: P) -> Result<GraphOutput>
    where
        S: SourceReader,
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let start = Instant::now();

        let files = FileDiscovery::new(&self.settings).discover()?;
        let build = build_edges_with_progress(&files, source, self.settings.parallel, progress_callback);
        if build.unreadable > 0 {
            warn!("{} files could not be read and have no outgoing edges", build.unreadable);
        }

        let output = GraphOutput::assemble(self.settings.root.clone(), files, build.edges, build.unreadable);

        info!(
            "{} files, {} edges in {:.2?}",
            output.stats.files,
            output.stats.edges,
            start.elapsed()
        );
        for cycle in &output.stats.cycles {
            debug!(
                "import cycle: {}",
                cycle.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(" -> ")
            );
        }

        Ok(output)
    }
}

fn convenience_settings(root: &Path, ignore: &[String], no_dir: bool, reverse: bool) -> Settings {
    Settings {
        root: root.to_path_buf(),
        ignore_patterns: ignore.to_vec(),
        cluster_directories: !no_dir,
        reverse,
        show_progress: false,
        ..Settings::default()
    }
}

/// DOT text of the import graph under `root`
pub fn imports_graph_dot(
    root: impl AsRef<Path>,
    ignore: &[String],
    no_dir: bool,
    reverse: bool,
) -> Result<String> {
    let graph = ImportsGraph::new(convenience_settings(root.as_ref(), ignore, no_dir, reverse));
    let output = graph.build()?;
    Ok(output.to_dot(&graph.render_options()))
}

/// SVG of the import graph under `root`, laid out by the `dot` executable
pub fn imports_graph_svg(
    root: impl AsRef<Path>,
    ignore: &[String],
    no_dir: bool,
    reverse: bool,
) -> Result<String> {
    let dot = imports_graph_dot(root, ignore, no_dir, reverse)?;
    render_svg(&dot, &Settings::default().graphviz_command)
}
