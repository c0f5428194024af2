//! Configuration file and environment handling

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ImportsGraphError, Result};
use crate::models::config::{OutputFormat, PartialSettings};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".imports-graph.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "IMPORTS_GRAPH";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20, // Lower priority than environment variables and CLI
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ImportsGraphError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 25, // Overrides config files, yields to CLI
        }
    }

    fn var(&self, suffix: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, suffix)).ok()
    }
}

/// Split a comma separated variable, dropping blank items
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

const ENV_SUFFIXES: [&str; 4] = ["ROOT", "IGNORE", "EXTENSIONS", "FORMAT"];

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(root) = self.var("ROOT") {
            settings.root = Some(PathBuf::from(root));
        }

        if let Some(ignore) = self.var("IGNORE") {
            settings.ignore_patterns = Some(split_list(&ignore));
        }

        if let Some(extensions) = self.var("EXTENSIONS") {
            settings.extensions = Some(split_list(&extensions));
        }

        if let Some(format) = self.var("FORMAT") {
            let output_format = format.parse::<OutputFormat>().map_err(|message| {
                ImportsGraphError::config_error(format!("{}_FORMAT: {}", self.prefix, message))
            })?;
            settings.output_format = Some(output_format);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_SUFFIXES.iter().any(|suffix| self.var(suffix).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
