// src/graph/neighborhood.rs
//! Bounded breadth-first subgraph around a center node.

use std::collections::{HashMap, HashSet, VecDeque};

use super::types::ConceptGraph;

/// Returns the nodes within `hops` edges of `center`, and the edges among them.
///
/// An unknown center yields an empty graph.
#[must_use]
pub fn neighborhood(graph: &ConceptGraph, center: &str, hops: usize) -> ConceptGraph {
    if !graph.contains(center) {
        return ConceptGraph::empty();
    }

    let adjacency = build_adjacency(graph);
    let visited = traverse(&adjacency, center, hops);

    let nodes = graph
        .nodes
        .iter()
        .filter(|n| visited.contains(n.id.as_str()))
        .cloned()
        .collect();
    let edges = graph
        .edges
        .iter()
        .filter(|e| visited.contains(e.source.as_str()) && visited.contains(e.target.as_str()))
        .cloned()
        .collect();

    ConceptGraph { nodes, edges }
}

fn build_adjacency(graph: &ConceptGraph) -> HashMap<&str, Vec<&str>> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        adjacency
            .entry(edge.target.as_str())
            .or_default()
            .push(edge.source.as_str());
    }
    adjacency
}

fn traverse<'a>(
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    center: &'a str,
    hops: usize,
) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    visited.insert(center);
    queue.push_back((center, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= hops {
            continue;
        }
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for &next in neighbors {
            if visited.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    visited
}
