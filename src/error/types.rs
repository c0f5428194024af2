//! Error types and definitions for imports-graph
//!
//! Every failure the builder can hit is a variant of [`ImportsGraphError`].
//! Each variant carries a severity so callers can decide whether a run
//! degrades gracefully or stops.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for imports-graph operations
#[derive(Debug, Error)]
pub enum ImportsGraphError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// An ignore pattern that does not compile
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    IgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A source file that could not be read
    #[error("Could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `git ls-files` could not be used
    #[error("Git tracking unavailable in {path}: {message}")]
    GitTracking { path: PathBuf, message: String },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// External layout engine failures
    #[error("Rendering with '{command}' failed: {message}")]
    Render { command: String, message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl ImportsGraphError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the run degrades but continues
            ImportsGraphError::FileRead { .. } => ErrorSeverity::Warning,
            ImportsGraphError::GitTracking { .. } => ErrorSeverity::Warning,
            ImportsGraphError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ImportsGraphError::Config { .. } => ErrorSeverity::Critical,
            ImportsGraphError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ImportsGraphError::ConfigRead { .. } => ErrorSeverity::Critical,
            ImportsGraphError::ConfigParse { .. } => ErrorSeverity::Critical,
            ImportsGraphError::IgnorePattern { .. } => ErrorSeverity::Critical,
            ImportsGraphError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ImportsGraphError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ImportsGraphError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied.", path.display())
            }
            ImportsGraphError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ImportsGraphError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            ImportsGraphError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            ImportsGraphError::IgnorePattern { pattern, source } => {
                format!("Ignore pattern '{}' is not a valid glob: {}.", pattern, source)
            }
            ImportsGraphError::FileRead { path, source } => {
                format!("Could not read '{}': {}. The file contributes no edges.", path.display(), source)
            }
            ImportsGraphError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Suggest a fix for errors the user can act on
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ImportsGraphError::InvalidPath { .. } => {
                Some("Check that the root directory exists and is accessible")
            }
            ImportsGraphError::ConfigNotFound { .. } => Some(
                "Run `imports-graph --init` to create a .imports-graph.toml, or pass --config",
            ),
            ImportsGraphError::IgnorePattern { .. } => {
                Some("Ignore patterns are globs matched against the whole path, e.g. 'tests/*' or '*.test.ts'")
            }
            ImportsGraphError::Render { .. } => {
                Some("Install Graphviz or point --graphviz at the `dot` executable")
            }
            ImportsGraphError::OutputDirectoryNotFound { .. } => {
                Some("Create the output directory first or specify a different path")
            }
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ImportsGraphError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ImportsGraphError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid ignore pattern error
    pub fn ignore_pattern_error(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        ImportsGraphError::IgnorePattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportsGraphError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a git tracking error
    pub fn git_tracking_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImportsGraphError::GitTracking {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImportsGraphError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a rendering error
    pub fn render_error(command: impl Into<String>, message: impl Into<String>) -> Self {
        ImportsGraphError::Render {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ImportsGraphError {
    fn from(err: std::io::Error) -> Self {
        ImportsGraphError::io_error(err)
    }
}

impl From<serde_json::Error> for ImportsGraphError {
    fn from(err: serde_json::Error) -> Self {
        ImportsGraphError::JsonSerialize { source: err }
    }
}

/// Result type alias for imports-graph operations
pub type Result<T> = std::result::Result<T, ImportsGraphError>;
