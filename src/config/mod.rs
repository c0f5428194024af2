//! Configuration management
//!
//! Settings are layered: defaults, then a config file, then
//! `IMPORTS_GRAPH_*` environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use tracing::debug;

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// One layer of settings: a file, the environment or the command line
pub trait ConfigSource {
    /// Only the fields this layer sets are `Some`
    fn load(&self) -> Result<PartialSettings>;

    /// Whether this layer has anything to contribute
    fn is_available(&self) -> bool;

    /// Human readable name used in debug logs
    fn name(&self) -> &str;

    /// Layers with higher priority are merged later and win
    fn priority(&self) -> u8 {
        10
    }
}

/// Accumulates layers over the defaults, then validates
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Overlay `partial`; fields it leaves `None` keep their current value
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Overlay a source if it is available
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            debug!("loading settings from {}", source.name());
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Overlay an explicitly named config file, which must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        if !file_config.is_available() {
            return Err(crate::error::ImportsGraphError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.load_from(&file_config)
    }

    /// Overlay the first config file found in the default locations, if any
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Resolve defaults and validate the result
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();

        settings::SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for a run: defaults < config file < environment < command line
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, DEFAULT_ENV_PREFIX)
}

/// Same as [`load_config`] with a different environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    builder = match &cli_args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.add_default_config_file()?,
    };

    let mut sources: Vec<Box<dyn ConfigSource>> = vec![
        Box::new(EnvConfig::new(env_prefix)),
        Box::new(CliConfig::new(cli_args)),
    ];
    sources.sort_by_key(|source| source.priority());

    for source in &sources {
        if source.is_available() {
            debug!("loading settings from {}", source.name());
            builder = builder.merge(source.load()?);
        }
    }

    builder.build()
}
