//! Command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::ImportsGraph;
use crate::error::{ErrorSeverity, Result};
use crate::models::config::Settings;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan a source tree and emit its import graph
    Generate(Args),
    /// Write a default configuration file to the current directory
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                let settings = config::load_config(CliArgs::from_args(args))?;
                debug!("settings: {:?}", settings);
                generate(&settings)
            }
            Command::Init => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if init_config_at(&path)? {
                    println!("Created default configuration file at: {}", path.display());
                } else {
                    println!("Configuration file already exists at: {}", path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                }
                Ok(())
            }
        }
    }

    /// Run the command, report any error on stderr and return the exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }

                exit_code(err.severity())
            }
        }
    }
}

/// Process exit code for an error of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Build the graph described by `settings` and write it out
pub fn generate(settings: &Settings) -> Result<()> {
    let reporter = Arc::new(ProgressReporter::new(settings.show_progress && !settings.quiet));
    reporter.start(0, &format!("Scanning {}", settings.root.display()));

    let graph = ImportsGraph::new(settings.clone());
    let result = graph.build_with_progress(create_progress_callback(reporter.clone()));
    reporter.finish();
    let output = result?;

    if output.stats.has_cycles() {
        warn!("{} import cycles found", output.stats.cycles.len());
    }

    let content = create_formatter(settings).format(&output)?;
    create_writer(settings.output_file.as_ref()).write(&content)?;

    if let Some(path) = &settings.output_file {
        info!("wrote {} graph to {}", settings.output_format, path.display());
    }

    Ok(())
}

/// Create the default config file unless one is already there.
/// Returns whether a file was written.
pub fn init_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    config::create_default_config(path)?;
    Ok(true)
}
