//! Node height heuristic
//!
//! A node grows with the heavier of its incoming and outgoing import weight.
//! Heights are a layout hint only.

use crate::models::{Edge, HeightMap, KnownFileSet};
use std::collections::BTreeMap;

/// Height of a node with no incident edges
pub const BASE_HEIGHT: f64 = 0.5;

/// Height added per unit of edge weight
pub const HEIGHT_PER_WEIGHT: f64 = 0.25;

/// Weight of one edge: one for the edge plus half a unit per label fragment
pub fn edge_weight(edge: &Edge) -> f64 {
    1.0 + edge.fragments.len() as f64 / 2.0
}

/// Compute the height of every known file
pub fn compute_heights(edges: &[Edge], files: &KnownFileSet) -> HeightMap {
    let mut incoming: BTreeMap<&str, f64> = files.iter().map(|f| (f.as_str(), 0.0)).collect();
    let mut outgoing = incoming.clone();

    for edge in edges {
        let weight = edge_weight(edge);
        if let Some(out) = outgoing.get_mut(edge.importer.as_str()) {
            *out += weight;
        }
        if let Some(inc) = incoming.get_mut(edge.imported.as_str()) {
            *inc += weight;
        }
    }

    files
        .iter()
        .map(|file| {
            let inc = incoming.get(file.as_str()).copied().unwrap_or(0.0);
            let out = outgoing.get(file.as_str()).copied().unwrap_or(0.0);
            (file.clone(), inc.max(out) * HEIGHT_PER_WEIGHT + BASE_HEIGHT)
        })
        .collect()
}
