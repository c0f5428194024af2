//! Settings validation

use crate::core::discovery::compile_ignore_patterns;
use crate::error::{ImportsGraphError, Result};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.root.is_dir() {
            return Err(ImportsGraphError::InvalidPath {
                path: settings.root.clone(),
            });
        }

        compile_ignore_patterns(&settings.ignore_patterns)?;

        if settings.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(ImportsGraphError::config_error(
                "At least one file extension is required",
            ));
        }

        if let Some(depth) = settings.max_depth {
            if depth == 0 {
                return Err(ImportsGraphError::config_error("Max depth must be at least 1"));
            }
        }

        if settings.graph_name.trim().is_empty() {
            return Err(ImportsGraphError::config_error("Graph name must not be empty"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ImportsGraphError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}
