// src/graph/types.rs
//! Derived view data. Rebuilt from scratch on every filter change.

use serde::Serialize;
use std::collections::BTreeSet;

/// A concept as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    /// Radius derived from `degree`.
    pub size: f64,
    /// Distinct edges touching this node in the graph it was built for.
    pub degree: usize,
    pub tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// An undirected relation between two distinct concepts.
///
/// `source`/`target` keep the orientation of the first declaration seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.source, &self.target)
    }
}

/// Orientation-free identity of an edge: the id pair in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(String, String);

impl EdgeKey {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConceptGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ConceptGraph {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    #[must_use]
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_orientation_free() {
        assert_eq!(EdgeKey::new("b", "a"), EdgeKey::new("a", "b"));
        let edge = GraphEdge::new("zeta", "alpha");
        assert_eq!(edge.key(), GraphEdge::new("alpha", "zeta").key());
        assert!(edge.key() < EdgeKey::new("beta", "omega"));
    }

}
