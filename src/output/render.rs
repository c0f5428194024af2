//! Rendering DOT text through an external Graphviz layout engine

use crate::error::{ImportsGraphError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// Pipe `dot` through `<command> -Tsvg` and return the SVG document
pub fn render_svg(dot: &str, command: &str) -> Result<String> {
    debug!("rendering {} bytes of DOT with {}", dot.len(), command);

    let mut child = Command::new(command)
        .arg("-Tsvg")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| ImportsGraphError::render_error(command, format!("could not start: {}", err)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ImportsGraphError::render_error(command, "stdin unavailable"))?;

    // Feed stdin from another thread so a full stdout pipe cannot deadlock us
    let (output, written) = thread::scope(|scope| {
        let writer = scope.spawn(move || stdin.write_all(dot.as_bytes()));
        let output = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
        (output, written)
    });

    let output = output.map_err(|err| ImportsGraphError::render_error(command, err.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ImportsGraphError::render_error(
            command,
            format!("exited with {}: {}", output.status, stderr.trim()),
        ));
    }
    written.map_err(|err| ImportsGraphError::render_error(command, format!("writing input: {}", err)))?;

    String::from_utf8(output.stdout)
        .map_err(|err| ImportsGraphError::render_error(command, format!("output is not UTF-8: {}", err)))
}
