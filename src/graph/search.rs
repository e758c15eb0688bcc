// src/graph/search.rs
//! Case-insensitive substring search over node names and aliases.

use std::collections::HashSet;

use super::types::GraphNode;

/// Nodes whose name or any alias contains `query`, in input order.
///
/// A blank query matches nothing rather than everything.
#[must_use]
pub fn match_nodes<'a>(nodes: &'a [GraphNode], query: &str) -> Vec<&'a GraphNode> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    nodes.iter().filter(|n| node_matches(n, &needle)).collect()
}

/// Ids of matching nodes, for highlighting.
#[must_use]
pub fn matched_ids(nodes: &[GraphNode], query: &str) -> HashSet<String> {
    match_nodes(nodes, query)
        .into_iter()
        .map(|n| n.id.clone())
        .collect()
}

fn node_matches(node: &GraphNode, needle: &str) -> bool {
    if node.name.to_lowercase().contains(needle) {
        return true;
    }
    node.aliases
        .iter()
        .flatten()
        .any(|alias| alias.to_lowercase().contains(needle))
}
