//! Informational statistics over the import graph

use crate::models::{Edge, FileId, KnownFileSet};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of a built graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStats {
    pub files: usize,
    pub edges: usize,
    pub self_loops: usize,
    /// Files with neither incoming nor outgoing edges
    pub isolated: usize,
    /// Import cycles of two or more files, each sorted, ordered by first file
    pub cycles: Vec<Vec<FileId>>,
}

impl GraphStats {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Compute counts and import cycles
pub fn compute_stats(files: &KnownFileSet, edges: &[Edge]) -> GraphStats {
    let mut graph: DiGraph<&FileId, ()> = DiGraph::new();
    let index: BTreeMap<&FileId, NodeIndex> =
        files.iter().map(|file| (file, graph.add_node(file))).collect();

    for edge in edges {
        if let (Some(&from), Some(&to)) = (index.get(&edge.importer), index.get(&edge.imported)) {
            graph.add_edge(from, to, ());
        }
    }

    let isolated = graph
        .node_indices()
        .filter(|&node| graph.neighbors_undirected(node).next().is_none())
        .count();

    let mut cycles: Vec<Vec<FileId>> = kosaraju_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut members: Vec<FileId> = component
                .into_iter()
                .map(|node| graph[node].clone())
                .collect();
            members.sort();
            members
        })
        .collect();
    cycles.sort();

    GraphStats {
        files: files.len(),
        edges: edges.len(),
        self_loops: edges.iter().filter(|edge| edge.is_self_loop()).count(),
        isolated,
        cycles,
    }
}
