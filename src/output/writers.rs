//! Destinations for the rendered graph
//!
//! Graph text goes either to stdout, so it can be piped into `dot`, or to a
//! file named by `--output-file`.

use crate::error::{ImportsGraphError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Somewhere a finished document can be written
pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

/// Writes to the locked stdout handle
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| ImportsGraphError::StdoutWrite { source })
    }
}

/// Replaces the file at `path` with the document
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> ImportsGraphError {
        ImportsGraphError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        debug!("writing {} bytes to {}", content.len(), self.path.display());

        let file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        let mut out = BufWriter::new(file);
        out.write_all(content.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| self.write_error(e))
    }
}

/// Stdout unless an output file is configured
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
