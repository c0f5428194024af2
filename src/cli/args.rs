//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// imports-graph - draw the import dependencies of a JS/TS source tree
#[derive(Parser, Debug, Clone)]
#[command(name = "imports-graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build a Graphviz graph of which JS/TS files import which")]
#[command(long_about = "imports-graph scans a directory for JavaScript and TypeScript files, extracts their \
static, re-export and dynamic import statements, and emits a DOT graph with one node per file, one edge \
per importing pair and one cluster per directory. Only imports between scanned files become edges.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Graph the current directory as DOT
    imports-graph

    # Graph a specific directory
    imports-graph ./my-project

    # Ignore files (glob matched against the whole relative path)
    imports-graph -i 'tests/*' -i '*.test.ts'

Layout:
    # Do not group files by directory
    imports-graph --no-dir

    # Point arrows from the imported file to the importer
    imports-graph --reverse

Output Options:
    # Render SVG with the Graphviz 'dot' executable
    imports-graph --format svg --output-file graph.svg

    # Machine-readable report with heights and cycles
    imports-graph --format json

File Selection:
    # Include TSX files too
    imports-graph -e ts -e tsx -e js

    # Include files git does not know about
    imports-graph --no-git

Configuration:
    # Use a specific configuration file
    imports-graph --config ./imports-graph.toml

    # Create a default configuration file
    imports-graph --init
")]
pub struct Args {
    /// Root directory to scan
    #[arg(value_name = "ROOT", help = "Directory to scan (defaults to the current directory)")]
    pub root: Option<PathBuf>,

    /// Ignore files matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob pattern of files to leave out; '*' also matches '/' (can be specified multiple times)")]
    pub ignore: Vec<String>,

    /// Do not cluster files by directory
    #[arg(long, help = "Draw a flat graph without directory clusters")]
    pub no_dir: bool,

    /// Reverse the drawn arrows
    #[arg(long, help = "Draw arrows from the imported file to the importing file")]
    pub reverse: bool,

    /// File extensions to scan
    #[arg(short, long = "ext", value_name = "EXT", help = "File extension to scan, without the dot (can be specified multiple times; default: ts, js, mjs)")]
    pub extensions: Vec<String>,

    /// Do not restrict files to those known to git
    #[arg(long, help = "Scan every matching file on disk instead of asking 'git ls-files'")]
    pub no_git: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse (1 scans only the root directory)")]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Output format: 'dot' text, 'svg' rendered by Graphviz, or a 'json' report (default: dot)")]
    pub format: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Name of the DOT graph
    #[arg(long, value_name = "NAME", help = "Name of the emitted graph (default: imports)")]
    pub graph_name: Option<String>,

    /// Graphviz executable used for SVG output
    #[arg(long, value_name = "CMD", help = "Graphviz layout executable used for --format svg (default: dot)")]
    pub graphviz: Option<String>,

    /// Disable parallel processing
    #[arg(long, help = "Read and scan files on a single thread")]
    pub no_parallel: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar (useful for CI environments)")]
    pub no_progress: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only log errors")]
    pub quiet: bool,

    /// Show debug information
    #[arg(short, long, help = "Log per-file debug information")]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long, help = "Disable colored log output")]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .imports-graph.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.imports-graph.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT text
    Dot,
    /// SVG rendered by the Graphviz executable
    Svg,
    /// JSON report
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["imports-graph"]).unwrap();
        assert!(args.root.is_none());
        assert!(args.ignore.is_empty());
        assert!(args.format.is_none());
        assert!(!args.no_dir);
        assert!(!args.init);
    }

    #[test]
    fn test_positional_root_and_repeated_flags() {
        let args = Args::try_parse_from([
            "imports-graph",
            "./project",
            "-i",
            "b.ts",
            "--ignore",
            "tests/*",
            "--no-dir",
            "--reverse",
            "-e",
            "ts",
            "--ext",
            "tsx",
            "-f",
            "svg",
            "-o",
            "graph.svg",
        ])
        .unwrap();

        assert_eq!(args.root, Some(PathBuf::from("./project")));
        assert_eq!(args.ignore, vec!["b.ts", "tests/*"]);
        assert!(args.no_dir);
        assert!(args.reverse);
        assert_eq!(args.extensions, vec!["ts", "tsx"]);
        assert_eq!(args.format, Some(OutputFormat::Svg));
        assert_eq!(args.output_file, Some(PathBuf::from("graph.svg")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["imports-graph", "--format", "png"]).is_err());
    }
}
