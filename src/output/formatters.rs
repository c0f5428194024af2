//! Output formatting functionality
//!
//! Serialization of a built graph into the machine-readable JSON report.

use crate::core::pipeline::GraphOutput;
use crate::core::stats::GraphStats;
use crate::error::Result;
use crate::models::{Edge, FileId, HeightMap};
use serde::Serialize;

/// JSON view of a [`GraphOutput`]
#[derive(Debug, Serialize)]
pub struct GraphReport<'a> {
    pub root: String,
    pub files: Vec<&'a FileId>,
    pub edges: &'a [Edge],
    pub heights: &'a HeightMap,
    pub stats: &'a GraphStats,
    pub unreadable: usize,
}

impl<'a> GraphReport<'a> {
    pub fn new(output: &'a GraphOutput) -> Self {
        Self {
            root: output.root.display().to_string(),
            files: output.files.iter().collect(),
            edges: &output.edges,
            heights: &output.heights,
            stats: &output.stats,
            unreadable: output.unreadable,
        }
    }
}

/// Format a graph as JSON
pub fn format_report_json(output: &GraphOutput, pretty: bool) -> Result<String> {
    let report = GraphReport::new(output);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json + "\n")
}
