// src/graph/builder.rs
//! Graph construction: filtering, edge deduplication, and node sizing.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::palette::Palette;
use super::types::{ConceptGraph, EdgeKey, GraphEdge, GraphNode};
use crate::explored::ExploredSet;
use crate::filter::{ExploredFilter, FilterState};
use crate::types::ConceptRecord;

pub const MIN_NODE_SIZE: f64 = 2.0;
pub const MAX_NODE_SIZE: f64 = 12.0;
const SIZE_PER_EDGE: f64 = 0.5;

/// Predicates applied to the collection before edges are derived.
///
/// `Default` keeps everything.
#[derive(Debug, Clone, Default)]
pub struct GraphFilters<'a> {
    /// `None` disables the category filter. `Some(empty)` keeps nothing.
    pub visible_categories: Option<HashSet<String>>,
    pub selected_tags: BTreeSet<String>,
    pub featured_only: bool,
    pub min_connections: usize,
    pub explored_filter: ExploredFilter,
    /// `None` means nothing is tracked and `explored_filter` is ignored.
    pub explored: Option<&'a ExploredSet>,
}

impl<'a> GraphFilters<'a> {
    /// Derives builder predicates from a view state.
    ///
    /// The visible set is the known categories minus the hidden ones.
    #[must_use]
    pub fn from_state(
        state: &FilterState,
        known_categories: &[String],
        explored: Option<&'a ExploredSet>,
    ) -> Self {
        let visible = state
            .visible_categories(known_categories)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            visible_categories: Some(visible),
            selected_tags: state.selected_tags.clone(),
            featured_only: state.featured_only,
            min_connections: state.min_connections,
            explored_filter: state.explored_filter,
            explored,
        }
    }

    /// Whether a single record passes every dimension.
    #[must_use]
    pub fn admits(&self, concept: &ConceptRecord) -> bool {
        self.admits_category(concept)
            && concept.has_all_tags(&self.selected_tags)
            && (!self.featured_only || concept.featured)
            && concept.declared_connections() >= self.min_connections
            && self.admits_explored(concept)
    }

    fn admits_category(&self, concept: &ConceptRecord) -> bool {
        self.visible_categories
            .as_ref()
            .map_or(true, |visible| visible.contains(&concept.category))
    }

    fn admits_explored(&self, concept: &ConceptRecord) -> bool {
        let Some(explored) = self.explored else {
            return true;
        };
        self.explored_filter.admits(explored.contains(&concept.id))
    }
}

/// Builds the graph with the built-in palette.
#[must_use]
pub fn build(concepts: &[ConceptRecord], filters: &GraphFilters<'_>) -> ConceptGraph {
    build_with_palette(concepts, filters, &Palette::default())
}

/// Filters the collection, links the survivors, and sizes nodes by degree.
#[must_use]
pub fn build_with_palette(
    concepts: &[ConceptRecord],
    filters: &GraphFilters<'_>,
    palette: &Palette,
) -> ConceptGraph {
    let survivors: Vec<&ConceptRecord> = concepts.iter().filter(|c| filters.admits(c)).collect();
    let edges = build_edges(&survivors);
    let degrees = count_degrees(&edges);

    let nodes = survivors
        .iter()
        .map(|concept| {
            let degree = degrees.get(concept.id.as_str()).copied().unwrap_or(0);
            make_node(concept, degree, palette)
        })
        .collect::<Vec<_>>();

    log::debug!(
        "built graph: {} of {} concepts, {} edges",
        nodes.len(),
        concepts.len(),
        edges.len()
    );

    ConceptGraph { nodes, edges }
}

/// Node radius for a given post-filter degree.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn node_size(degree: usize) -> f64 {
    (MIN_NODE_SIZE + degree as f64 * SIZE_PER_EDGE).clamp(MIN_NODE_SIZE, MAX_NODE_SIZE)
}

fn build_edges(survivors: &[&ConceptRecord]) -> Vec<GraphEdge> {
    let alive: HashSet<&str> = survivors.iter().map(|c| c.id.as_str()).collect();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut seen: HashSet<EdgeKey> = HashSet::new();

    for concept in survivors {
        for target in concept.related() {
            if target == &concept.id || !alive.contains(target.as_str()) {
                continue;
            }
            let edge = GraphEdge::new(concept.id.clone(), target.clone());
            if !seen.insert(edge.key()) {
                continue;
            }
            edges.push(edge);
        }
    }

    edges
}

fn count_degrees(edges: &[GraphEdge]) -> HashMap<&str, usize> {
    let mut degrees: HashMap<&str, usize> = HashMap::new();
    for edge in edges {
        *degrees.entry(edge.source.as_str()).or_default() += 1;
        *degrees.entry(edge.target.as_str()).or_default() += 1;
    }
    degrees
}

fn make_node(concept: &ConceptRecord, degree: usize, palette: &Palette) -> GraphNode {
    GraphNode {
        id: concept.id.clone(),
        name: concept.name.clone(),
        category: concept.category.clone(),
        color: palette.color_for(&concept.category).to_string(),
        size: node_size(degree),
        degree,
        tags: concept.tags.clone(),
        aliases: concept.aliases.clone(),
        summary: concept.summary.clone(),
        icon: concept.icon.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_size_clamps() {
        let cases = vec![
            (0, 2.0, "Isolated node gets the minimum"),
            (1, 2.5, "One edge"),
            (4, 4.0, "Four edges"),
            (20, 12.0, "Exactly at the cap"),
            (500, 12.0, "Hub is capped"),
        ];
        for (degree, expected, desc) in cases {
            assert!((node_size(degree) - expected).abs() < f64::EPSILON, "Failed: {desc}");
        }
    }

    #[test]
    fn test_self_relation_ignored() {
        let concepts = vec![ConceptRecord::new("a", "A", "Methods").with_related(["a"])];
        let graph = build(&concepts, &GraphFilters::default());
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.nodes[0].degree, 0);
    }

    #[test]
    fn test_first_orientation_kept() {
        let concepts = vec![
            ConceptRecord::new("b", "B", "Methods").with_related(["a"]),
            ConceptRecord::new("a", "A", "Methods").with_related(["b"]),
        ];
        let graph = build(&concepts, &GraphFilters::default());
        assert_eq!(graph.edges, vec![GraphEdge::new("b", "a")]);
    }

    #[test]
    fn test_repeated_relation_single_edge() {
        let concepts = vec![
            ConceptRecord::new("a", "A", "Methods").with_related(["b", "b"]),
            ConceptRecord::new("b", "B", "Methods").with_related(["a", "a"]),
        ];
        let graph = build(&concepts, &GraphFilters::default());
        assert_eq!(graph.edges, vec![GraphEdge::new("a", "b")]);
        assert!(graph.nodes.iter().all(|n| n.degree == 1));
    }

    #[test]
    fn test_dangling_relation_dropped() {
        let concepts = vec![ConceptRecord::new("a", "A", "Methods").with_related(["ghost"])];
        let graph = build(&concepts, &GraphFilters::default());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_unknown_category_uses_fallback_color() {
        let concepts = vec![ConceptRecord::new("a", "A", "Astrology")];
        let graph = build(&concepts, &GraphFilters::default());
        assert_eq!(graph.nodes[0].color, crate::graph::palette::DEFAULT_COLOR);
    }
}
