// src/graph/mod.rs
//! Concept graph construction and traversal.

pub mod builder;
pub mod facets;
pub mod neighborhood;
pub mod palette;
pub mod search;
pub mod types;

pub use builder::{build, build_with_palette, GraphFilters};
pub use neighborhood::neighborhood;
pub use palette::Palette;
pub use search::{match_nodes, matched_ids};
pub use types::{ConceptGraph, EdgeKey, GraphEdge, GraphNode};
