//! Graphviz DOT serialization

use crate::core::heights::BASE_HEIGHT;
use crate::models::{DirectoryTree, Edge, FileId, HeightMap, TreeEntry};
use std::collections::BTreeSet;

/// Options controlling the emitted DOT text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name after `strict digraph`
    pub graph_name: String,
    /// Draw each directory as a cluster subgraph
    pub cluster_directories: bool,
    /// Draw arrows from the imported file to the importer
    pub reverse: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            graph_name: "imports".to_string(),
            cluster_directories: true,
            reverse: false,
        }
    }
}

/// Escape text for use inside a double-quoted DOT string
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Subgraph name for a directory path; the `cluster_` prefix makes Graphviz draw a box
pub fn cluster_name(dir_path: &str) -> String {
    let id: String = dir_path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("cluster_{}", id)
}

/// Hands out cluster names, unique within one document.
///
/// Distinct paths can map to the same name (`ui-components` and
/// `ui_components`); later ones get a `_2`, `_3`... suffix.
#[derive(Debug, Default)]
struct ClusterNames {
    used: BTreeSet<String>,
}

impl ClusterNames {
    fn claim(&mut self, dir_path: &str) -> String {
        let base = cluster_name(dir_path);
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Serialize the tree, edges and heights into a DOT document
pub fn render_dot(
    tree: &DirectoryTree,
    edges: &[Edge],
    heights: &HeightMap,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    let depth = 1;
    let pad = indent(depth);

    out.push_str(&format!("strict digraph {} {{\n", dot_id(&options.graph_name)));
    out.push_str(&format!(
        "{}graph [rankdir=\"LR\"; labelloc=\"b\"; concentrate=true; overlap=false; splines=true; color=blue];\n",
        pad
    ));
    out.push_str(&format!("{}node [shape=box, fontsize=16, color=blue];\n", pad));
    out.push_str(&format!("{}edge [fontsize=12, color=blue];\n", pad));
    if !options.cluster_directories {
        out.push_str(&format!("{}clusterrank=\"none\";\n", pad));
    }

    write_level(&mut out, tree, "", heights, &mut ClusterNames::default(), depth);

    for edge in edges {
        write_edge(&mut out, edge, options.reverse, depth);
    }

    out.push_str("}\n");
    out
}

/// Graph names are emitted bare when they are plain identifiers
fn dot_id(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}

fn write_level(
    out: &mut String,
    level: &DirectoryTree,
    prefix: &str,
    heights: &HeightMap,
    names: &mut ClusterNames,
    depth: usize,
) {
    for (key, entry) in level.entries() {
        match entry {
            TreeEntry::Directory(subtree) => {
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{}/{}", prefix, key)
                };
                let pad = indent(depth);
                out.push_str(&format!("{}subgraph {} {{\n", pad, names.claim(&path)));
                out.push_str(&format!("{}\tlabel=\"{}\"; fontsize=24;\n", pad, escape(key)));
                write_level(out, subtree, &path, heights, names, depth + 1);
                out.push_str(&format!("{}}}\n", pad));
            }
            TreeEntry::File(file) => write_node(out, file, heights, depth),
        }
    }
}

fn write_node(out: &mut String, file: &FileId, heights: &HeightMap, depth: usize) {
    let id = escape(file.as_str());
    let height = heights.get(file).copied().unwrap_or(BASE_HEIGHT);
    out.push_str(&format!(
        "{}\"{}\" [label=\"{}\"; height={}; href=\"{}\"; tooltip=\"{}\"];\n",
        indent(depth),
        id,
        escape(file.basename()),
        height,
        id,
        id
    ));
}

fn write_edge(out: &mut String, edge: &Edge, reverse: bool, depth: usize) {
    let (from, to) = if reverse {
        (&edge.imported, &edge.importer)
    } else {
        (&edge.importer, &edge.imported)
    };

    out.push_str(&format!(
        "{}\"{}\" -> \"{}\"",
        indent(depth),
        escape(from.as_str()),
        escape(to.as_str())
    ));
    if !edge.has_empty_label() {
        out.push_str(&format!(" [label=\"{}\"]", escape(&edge.label())));
    }
    out.push_str(";\n");
}
