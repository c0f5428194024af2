//! Output formatting and writing functionality

pub mod dot;
mod formatters;
mod progress;
pub mod render;
mod writers;

pub use self::dot::{render_dot, RenderOptions};
pub use self::formatters::{format_report_json, GraphReport};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::render::render_svg;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::core::pipeline::GraphOutput;
use crate::error::Result;
use crate::models::config::{OutputFormat, Settings};

/// Trait for different output formatters
pub trait Formatter {
    /// Format a built graph into a string
    fn format(&self, output: &GraphOutput) -> Result<String>;
}

/// Graphviz DOT text
pub struct DotFormatter {
    pub options: RenderOptions,
}

impl DotFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Formatter for DotFormatter {
    fn format(&self, output: &GraphOutput) -> Result<String> {
        Ok(output.to_dot(&self.options))
    }
}

/// SVG produced by an external layout engine
pub struct SvgFormatter {
    pub options: RenderOptions,
    pub command: String,
}

impl SvgFormatter {
    pub fn new(options: RenderOptions, command: impl Into<String>) -> Self {
        Self {
            options,
            command: command.into(),
        }
    }
}

impl Formatter for SvgFormatter {
    fn format(&self, output: &GraphOutput) -> Result<String> {
        render_svg(&output.to_dot(&self.options), &self.command)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, output: &GraphOutput) -> Result<String> {
        format_report_json(output, self.pretty)
    }
}

/// Create a formatter based on the configured output format
pub fn create_formatter(settings: &Settings) -> Box<dyn Formatter> {
    let options = RenderOptions {
        graph_name: settings.graph_name.clone(),
        cluster_directories: settings.cluster_directories,
        reverse: settings.reverse,
    };

    match settings.output_format {
        OutputFormat::Dot => Box::new(DotFormatter::new(options)),
        OutputFormat::Svg => Box::new(SvgFormatter::new(options, settings.graphviz_command.clone())),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)), // Use pretty printing by default
    }
}
