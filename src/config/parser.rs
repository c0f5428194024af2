//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::core::discovery::compile_ignore_patterns;
use crate::error::{ImportsGraphError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImportsGraphError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ImportsGraphError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| ImportsGraphError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(root) = &settings.root {
        if root.as_os_str().is_empty() {
            return Err(ImportsGraphError::config_error(format!(
                "Invalid empty root in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.ignore_patterns {
        if patterns.iter().any(|pattern| pattern.is_empty()) {
            return Err(ImportsGraphError::config_error(format!(
                "Empty ignore pattern in config file: {}",
                path.display()
            )));
        }
        compile_ignore_patterns(patterns)?;
    }

    if let Some(extensions) = &settings.extensions {
        if extensions.is_empty() {
            return Err(ImportsGraphError::config_error(format!(
                "Empty extensions list in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(depth) = settings.max_depth {
        if depth == 0 {
            return Err(ImportsGraphError::config_error(format!(
                "Invalid max_depth 0 in config file: {}. Must be at least 1.",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ImportsGraphError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("imports-graph").join("config.toml"));
    }

    locations
}

/// Load the first existing configuration file among `locations`
pub fn find_config_in(locations: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for location in locations {
        if location.is_file() {
            return Ok(Some(parse_config_file(location)?));
        }
    }
    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_locations())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ImportsGraphError::io_error)?;
        }
    }

    // Use the embedded default configuration template
    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(ImportsGraphError::io_error)?;

    Ok(())
}
