// src/view.rs
//! The page controller: holds the view state and derives what to display.
//!
//! Every change rebuilds the graph in full. Structural filter changes are
//! written to the query string at once; free-text edits go through the
//! debouncer and land on the next `tick` after the quiet period.

use std::collections::HashSet;
use std::time::Instant;

use crate::config::Config;
use crate::explored::ExploredSet;
use crate::filter::{self, ExploredFilter, FilterState, QueryDebouncer};
use crate::graph::{self, ConceptGraph, GraphFilters, Palette};
use crate::types::ConceptCatalog;

pub struct ViewController {
    catalog: ConceptCatalog,
    known_categories: Vec<String>,
    palette: Palette,
    explored: Option<ExploredSet>,
    state: FilterState,
    center: Option<String>,
    hops: usize,
    debouncer: QueryDebouncer,
    query_string: String,
}

impl ViewController {
    #[must_use]
    pub fn new(catalog: ConceptCatalog, config: &Config, explored: Option<ExploredSet>) -> Self {
        Self {
            catalog,
            known_categories: config.known_categories(),
            palette: config.palette(),
            explored,
            state: FilterState::default(),
            center: None,
            hops: config.view.hops,
            debouncer: QueryDebouncer::new(config.debounce()),
            query_string: String::new(),
        }
    }

    /// Seeds the state from an incoming query string.
    ///
    /// The stored query string is the normalized re-encoding, so unknown
    /// tokens do not survive the first write.
    #[must_use]
    pub fn from_query(
        catalog: ConceptCatalog,
        config: &Config,
        explored: Option<ExploredSet>,
        query: &str,
    ) -> Self {
        let mut view = Self::new(catalog, config, explored);
        view.state = filter::decode_query_string(query, &view.known_categories);
        view.commit();
        view
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    #[must_use]
    pub fn known_categories(&self) -> &[String] {
        &self.known_categories
    }

    #[must_use]
    pub fn center(&self) -> Option<&str> {
        self.center.as_deref()
    }

    #[must_use]
    pub fn hops(&self) -> usize {
        self.hops
    }

    /// The filtered graph over the whole collection.
    #[must_use]
    pub fn global_graph(&self) -> ConceptGraph {
        let filters =
            GraphFilters::from_state(&self.state, &self.known_categories, self.explored.as_ref());
        graph::build_with_palette(self.catalog.concepts(), &filters, &self.palette)
    }

    /// The neighborhood of the focused concept, or the global graph when
    /// nothing is focused or the focused concept has been filtered out.
    #[must_use]
    pub fn displayed_graph(&self) -> ConceptGraph {
        let global = self.global_graph();
        match self.center.as_deref() {
            Some(center) if global.contains(center) => {
                graph::neighborhood(&global, center, self.hops)
            }
            Some(center) => {
                log::debug!("focused concept {center:?} is filtered out, showing global graph");
                global
            }
            None => global,
        }
    }

    /// Ids in the displayed graph matching the free-text query.
    #[must_use]
    pub fn highlights(&self) -> HashSet<String> {
        graph::matched_ids(&self.displayed_graph().nodes, &self.state.query)
    }

    /// Records a free-text edit. The query string follows after the debounce delay.
    pub fn set_query(&mut self, now: Instant, query: impl Into<String>) {
        self.state.query = query.into();
        let encoded = filter::encode_query_string(&self.state, &self.known_categories);
        self.debouncer.schedule(now, encoded);
    }

    /// Applies a debounced write if one is due. Returns true if the query string changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(encoded) = self.debouncer.poll(now) else {
            return false;
        };
        let changed = encoded != self.query_string;
        self.query_string = encoded;
        changed
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.state.toggle_category(category);
        self.commit();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
        self.commit();
    }

    pub fn set_featured_only(&mut self, featured_only: bool) {
        self.state.featured_only = featured_only;
        self.commit();
    }

    pub fn set_min_connections(&mut self, min_connections: usize) {
        self.state.min_connections = min_connections;
        self.commit();
    }

    pub fn set_explored_filter(&mut self, explored_filter: ExploredFilter) {
        self.state.explored_filter = explored_filter;
        self.commit();
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.commit();
    }

    pub fn focus(&mut self, id: impl Into<String>) {
        self.center = Some(id.into());
    }

    pub fn clear_focus(&mut self) {
        self.center = None;
    }

    pub fn set_hops(&mut self, hops: usize) {
        self.hops = hops;
    }

    /// Writes the whole state now. Supersedes any pending debounced write,
    /// since the full state already includes the latest query text.
    fn commit(&mut self) {
        self.debouncer.cancel();
        self.query_string = filter::encode_query_string(&self.state, &self.known_categories);
        log::debug!("query string: {:?}", self.query_string);
    }
}
