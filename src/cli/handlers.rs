// src/cli/handlers.rs
use crate::cli::args::FilterArgs;
use crate::config::Config;
use crate::exit::GraphExit;
use crate::explored::ExploredSet;
use crate::filter;
use crate::graph::{self, facets, ConceptGraph};
use crate::reporting;
use crate::types::ConceptCatalog;
use crate::view::ViewController;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Inputs shared by every command, resolved from config and global flags.
pub struct Session {
    pub config: Config,
    pub data: PathBuf,
    pub explored: PathBuf,
    pub json: bool,
}

impl Session {
    /// Loads `conceptgraph.toml` and applies path overrides.
    ///
    /// # Errors
    /// Returns error if the config file is malformed.
    pub fn load(data: Option<PathBuf>, explored: Option<PathBuf>, json: bool) -> Result<Self> {
        let config = Config::load()?;
        Ok(Self {
            data: data.unwrap_or_else(|| config.catalog.data.clone()),
            explored: explored.unwrap_or_else(|| config.catalog.explored.clone()),
            config,
            json,
        })
    }

    fn catalog(&self) -> Result<ConceptCatalog> {
        ConceptCatalog::load(&self.data)
            .with_context(|| format!("loading concepts from {}", self.data.display()))
    }

    fn view(&self, filters: &FilterArgs) -> Result<ViewController> {
        let catalog = self.catalog()?;
        let explored = ExploredSet::load(&self.explored)?;
        let known = self.config.known_categories();
        let state = filters.to_state(&known);
        let query = filter::encode_query_string(&state, &known);
        Ok(ViewController::from_query(catalog, &self.config, explored, &query))
    }
}

#[derive(Serialize)]
struct GraphOutput<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    center: Option<&'a str>,
    progress: &'static str,
    nodes: &'a [graph::GraphNode],
    edges: &'a [graph::GraphEdge],
    highlights: Vec<&'a str>,
}

fn emit_graph(session: &Session, view: &ViewController, shown: &ConceptGraph) -> Result<()> {
    let highlights = graph::matched_ids(&shown.nodes, &view.state().query);
    if session.json {
        let mut ids: Vec<&str> = highlights.iter().map(String::as_str).collect();
        ids.sort_unstable();
        return reporting::print_json(&GraphOutput {
            query: view.query_string(),
            center: view.center(),
            progress: view.state().explored_filter.as_str(),
            nodes: &shown.nodes,
            edges: &shown.edges,
            highlights: ids,
        });
    }
    if let Some(line) = reporting::render_view_line(view.state(), view.query_string()) {
        println!("{line}");
    }
    reporting::print_graph(shown, &highlights);
    Ok(())
}

/// Handles the graph command.
///
/// # Errors
/// Returns error if the collection cannot be loaded.
pub fn handle_graph(session: &Session, filters: &FilterArgs) -> Result<GraphExit> {
    let view = session.view(filters)?;
    emit_graph(session, &view, &view.displayed_graph())?;
    Ok(GraphExit::Success)
}

/// Handles the focus command.
///
/// # Errors
/// Returns error if the collection cannot be loaded.
pub fn handle_focus(
    session: &Session,
    id: &str,
    hops: Option<usize>,
    filters: &FilterArgs,
) -> Result<GraphExit> {
    let mut view = session.view(filters)?;
    if !view.global_graph().contains(id) {
        eprintln!("{} no visible concept with id {id:?}", "[!!]".red().bold());
        return Ok(GraphExit::NotFound);
    }
    view.focus(id);
    if let Some(hops) = hops {
        view.set_hops(hops);
    }
    emit_graph(session, &view, &view.displayed_graph())?;
    Ok(GraphExit::Success)
}

/// Handles the search command.
///
/// # Errors
/// Returns error if the collection cannot be loaded.
pub fn handle_search(session: &Session, text: &str, filters: &FilterArgs) -> Result<GraphExit> {
    let view = session.view(filters)?;
    let shown = view.global_graph();
    let matches = graph::match_nodes(&shown.nodes, text);
    if session.json {
        reporting::print_json(&matches)?;
    } else {
        reporting::print_matches(&matches, text);
    }
    if matches.is_empty() {
        Ok(GraphExit::NotFound)
    } else {
        Ok(GraphExit::Success)
    }
}

/// Handles the url command: decode, then re-encode.
pub fn handle_url(session: &Session, query: &str) -> GraphExit {
    let known = session.config.known_categories();
    let state = filter::decode_query_string(query, &known);
    let normalized = filter::encode_query_string(&state, &known);
    if session.json {
        println!("{}", serde_json::Value::String(normalized));
    } else {
        println!("?{normalized}");
    }
    GraphExit::Success
}

#[derive(Serialize)]
struct FacetsOutput {
    categories: Vec<(String, usize)>,
    tags: Vec<(String, usize)>,
}

/// Handles the facets command.
///
/// # Errors
/// Returns error if the collection cannot be loaded.
pub fn handle_facets(session: &Session) -> Result<GraphExit> {
    let catalog = session.catalog()?;
    let known = session.config.known_categories();
    let output = FacetsOutput {
        categories: facets::category_counts(catalog.concepts(), &known),
        tags: facets::tag_counts(catalog.concepts()),
    };
    if session.json {
        reporting::print_json(&output)?;
    } else {
        reporting::print_counts("CATEGORIES", &output.categories);
        reporting::print_counts("TAGS", &output.tags);
        warn_unknown_categories(&catalog, &known);
    }
    Ok(GraphExit::Success)
}

fn warn_unknown_categories(catalog: &ConceptCatalog, known: &[String]) {
    let known: HashSet<&str> = known.iter().map(String::as_str).collect();
    let unknown = catalog
        .concepts()
        .iter()
        .filter(|c| !known.contains(c.category.as_str()))
        .count();
    if unknown > 0 {
        log::warn!("{unknown} concept(s) use a category outside the known list");
    }
}
