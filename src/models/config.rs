//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for a graph run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to scan
    pub root: PathBuf,

    /// Glob patterns matched against the whole relative path of a file
    pub ignore_patterns: Vec<String>,

    /// File extensions (without the dot) that take part in the graph
    pub extensions: Vec<String>,

    /// Whether directories are drawn as clusters
    pub cluster_directories: bool,

    /// Whether edges are drawn from the imported file to the importer
    pub reverse: bool,

    /// Whether to restrict the file set to files tracked by git
    pub use_git: bool,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Output format (dot, svg, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Name of the emitted DOT graph
    pub graph_name: String,

    /// Layout engine executable used for SVG output
    pub graphviz_command: String,

    /// Whether to read and scan files in parallel
    pub parallel: bool,

    /// Whether to show a progress bar
    pub show_progress: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug information
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_patterns: Vec::new(),
            extensions: vec!["ts".to_string(), "js".to_string(), "mjs".to_string()],
            cluster_directories: true,
            reverse: false,
            use_git: true,
            follow_links: false,
            max_depth: None,
            output_format: OutputFormat::Dot,
            output_file: None,
            graph_name: "imports".to_string(),
            graphviz_command: "dot".to_string(),
            parallel: true,
            show_progress: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Graphviz DOT text
    Dot,
    /// SVG rendered by the external layout engine
    Svg,
    /// JSON report of files, edges, heights and statistics
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(OutputFormat::Dot),
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root: Option<PathBuf>,
    pub ignore_patterns: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub cluster_directories: Option<bool>,
    pub reverse: Option<bool>,
    pub use_git: Option<bool>,
    pub follow_links: Option<bool>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub graph_name: Option<String>,
    pub graphviz_command: Option<String>,
    pub parallel: Option<bool>,
    pub show_progress: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root.is_some() {
            self.root = other.root;
        }
        if other.ignore_patterns.is_some() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.cluster_directories.is_some() {
            self.cluster_directories = other.cluster_directories;
        }
        if other.reverse.is_some() {
            self.reverse = other.reverse;
        }
        if other.use_git.is_some() {
            self.use_git = other.use_git;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.graph_name.is_some() {
            self.graph_name = other.graph_name;
        }
        if other.graphviz_command.is_some() {
            self.graphviz_command = other.graphviz_command;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(ignore_patterns) = &self.ignore_patterns {
            settings.ignore_patterns = ignore_patterns.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        if let Some(cluster_directories) = self.cluster_directories {
            settings.cluster_directories = cluster_directories;
        }
        if let Some(reverse) = self.reverse {
            settings.reverse = reverse;
        }
        if let Some(use_git) = self.use_git {
            settings.use_git = use_git;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(graph_name) = &self.graph_name {
            settings.graph_name = graph_name.clone();
        }
        if let Some(graphviz_command) = &self.graphviz_command {
            settings.graphviz_command = graphviz_command.clone();
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
