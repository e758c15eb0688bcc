// src/reporting.rs
//! Console rendering of graphs, matches, and facets.

use crate::filter::{ExploredFilter, FilterState};
use crate::graph::{ConceptGraph, GraphNode};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;

/// Prints any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a graph summary: one line per node, then the edge list.
pub fn print_graph(graph: &ConceptGraph, highlights: &HashSet<String>) {
    print!("{}", render_graph(graph, highlights));
}

#[must_use]
pub fn render_graph(graph: &ConceptGraph, highlights: &HashSet<String>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} nodes, {} edges",
        "GRAPH".bold(),
        graph.nodes.len(),
        graph.edges.len()
    );

    for node in &graph.nodes {
        let marker = if highlights.contains(&node.id) { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<32} {:<12} deg {:>2}  size {:>4.1}",
            marker.yellow().bold(),
            display_name(node),
            node.category.dimmed(),
            node.degree,
            node.size
        );
    }

    if !graph.edges.is_empty() {
        let _ = writeln!(out, "{}", "EDGES".bold());
        for edge in &graph.edges {
            let _ = writeln!(out, "  {} -- {}", edge.source, edge.target);
        }
    }
    out
}

/// Header naming the active view, or `None` for the unfiltered one.
#[must_use]
pub fn render_view_line(state: &FilterState, query_string: &str) -> Option<String> {
    if state.is_default() {
        return None;
    }
    let mut line = format!("{} ?{query_string}", "VIEW".bold());
    if state.explored_filter != ExploredFilter::All {
        let _ = write!(line, "  progress: {}", state.explored_filter.as_str());
    }
    Some(line)
}

/// Prints search matches in input order.
pub fn print_matches(matches: &[&GraphNode], query: &str) {
    if matches.is_empty() {
        println!("{} no concepts match {query:?}", "[--]".yellow());
        return;
    }
    println!("{} {} match(es) for {query:?}", "[OK]".green().bold(), matches.len());
    for node in matches {
        let aliases = node
            .aliases
            .as_ref()
            .filter(|a| !a.is_empty())
            .map(|a| format!(" (aka {})", a.join(", ")))
            .unwrap_or_default();
        println!("  {}{}", display_name(node), aliases.dimmed());
    }
}

/// Prints `(label, count)` rows under a heading.
pub fn print_counts(heading: &str, rows: &[(String, usize)]) {
    println!("{}", heading.bold());
    for (label, count) in rows {
        let line = format!("  {label:<28} {count:>4}");
        if *count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
}

fn display_name(node: &GraphNode) -> String {
    format!("{} [{}]", node.name, node.id)
}
