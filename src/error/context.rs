//! Error context utilities
//!
//! Helpers for attaching context to errors and for handling errors by
//! severity in one place.

use crate::error::{ErrorSeverity, ImportsGraphError, Result};
use std::path::Path;
use tracing::{error, warn};

/// Attach the walked path to directory traversal errors
pub trait ResultExt<T> {
    /// Permission problems become [`ImportsGraphError::PermissionDenied`],
    /// anything else [`ImportsGraphError::DirectoryTraversal`]. The error's
    /// own path is used when it has one, `root` otherwise.
    fn with_file_context<P: AsRef<Path>>(self, root: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, walkdir::Error> {
    fn with_file_context<P: AsRef<Path>>(self, root: P) -> Result<T> {
        self.map_err(|err| {
            let path = err.path().unwrap_or_else(|| root.as_ref()).to_path_buf();
            match err.io_error().map(std::io::Error::kind) {
                Some(std::io::ErrorKind::PermissionDenied) => {
                    ImportsGraphError::PermissionDenied { path }
                }
                _ => ImportsGraphError::directory_traversal_error(path, err.to_string()),
            }
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: log and return None
/// - Error: log and return None
/// - Critical: log and return Some(error)
pub fn handle_error(err: ImportsGraphError) -> Option<ImportsGraphError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            error!("critical: {}", message);
            Some(err)
        }
    }
}
