//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub ignore: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub no_dir: bool,
    pub reverse: bool,
    pub no_git: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub graph_name: Option<String>,
    pub graphviz_command: Option<String>,
    pub no_parallel: bool,
    pub no_progress: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Collect the configuration-relevant parts of parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            root: args.root.clone(),
            ignore: (!args.ignore.is_empty()).then(|| args.ignore.clone()),
            extensions: (!args.extensions.is_empty()).then(|| args.extensions.clone()),
            no_dir: args.no_dir,
            reverse: args.reverse,
            no_git: args.no_git,
            follow_links: args.follow_links,
            max_depth: args.max_depth,
            output_format: args.format.map(|format| match format {
                CliOutputFormat::Dot => OutputFormat::Dot,
                CliOutputFormat::Svg => OutputFormat::Svg,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            graph_name: args.graph_name.clone(),
            graphviz_command: args.graphviz.clone(),
            no_parallel: args.no_parallel,
            no_progress: args.no_progress,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(root) = &self.args.root {
            settings.root = Some(root.clone());
        }

        if let Some(ignore) = &self.args.ignore {
            settings.ignore_patterns = Some(ignore.clone());
        }

        if let Some(extensions) = &self.args.extensions {
            settings.extensions = Some(extensions.clone());
        }

        if let Some(max_depth) = self.args.max_depth {
            settings.max_depth = Some(max_depth);
        }

        if let Some(format) = self.args.output_format {
            settings.output_format = Some(format);
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        if let Some(graph_name) = &self.args.graph_name {
            settings.graph_name = Some(graph_name.clone());
        }

        if let Some(command) = &self.args.graphviz_command {
            settings.graphviz_command = Some(command.clone());
        }

        // Boolean flags only override when set
        if self.args.no_dir {
            settings.cluster_directories = Some(false);
        }

        if self.args.reverse {
            settings.reverse = Some(true);
        }

        if self.args.no_git {
            settings.use_git = Some(false);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.no_parallel {
            settings.parallel = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_config_source() {
        let args = CliArgs {
            root: Some(PathBuf::from("/cli/path")),
            ignore: Some(vec!["b.ts".to_string()]),
            max_depth: Some(10),
            output_format: Some(OutputFormat::Json),
            no_dir: true,
            verbose: true,
            ..Default::default()
        };

        let cli_config = CliConfig::new(args);
        assert!(cli_config.is_available());
        assert_eq!(cli_config.priority(), 30);

        let settings = cli_config.load().unwrap();

        assert_eq!(settings.root, Some(PathBuf::from("/cli/path")));
        assert_eq!(settings.ignore_patterns, Some(vec!["b.ts".to_string()]));
        assert_eq!(settings.max_depth, Some(10));
        assert_eq!(settings.output_format, Some(OutputFormat::Json));
        assert_eq!(settings.cluster_directories, Some(false));
        assert_eq!(settings.verbose, Some(true));
        // Unset flags leave lower layers alone
        assert_eq!(settings.reverse, None);
        assert_eq!(settings.use_git, None);
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "imports-graph",
            "/test/path",
            "-i",
            "vendor/*",
            "-e",
            "tsx",
            "--reverse",
            "--no-git",
            "--format",
            "svg",
            "--graphviz",
            "/usr/local/bin/dot",
            "--no-parallel",
            "--no-progress",
            "-q",
        ])
        .unwrap();

        let cli_config = CliConfig::from_args(&args);
        assert!(cli_config.config_path().is_none());
        let settings = cli_config.load().unwrap();

        assert_eq!(settings.root, Some(PathBuf::from("/test/path")));
        assert_eq!(settings.ignore_patterns, Some(vec!["vendor/*".to_string()]));
        assert_eq!(settings.extensions, Some(vec!["tsx".to_string()]));
        assert_eq!(settings.reverse, Some(true));
        assert_eq!(settings.use_git, Some(false));
        assert_eq!(settings.output_format, Some(OutputFormat::Svg));
        assert_eq!(settings.graphviz_command, Some("/usr/local/bin/dot".to_string()));
        assert_eq!(settings.parallel, Some(false));
        assert_eq!(settings.show_progress, Some(false));
        assert_eq!(settings.quiet, Some(true));
        assert_eq!(settings.cluster_directories, None);
    }
}
