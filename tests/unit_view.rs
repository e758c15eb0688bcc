// tests/unit_view.rs
//! Page-controller flow: seed from the query string, rebuild, re-serialize.

use conceptgraph_core::config::Config;
use conceptgraph_core::explored::ExploredSet;
use conceptgraph_core::filter::ExploredFilter;
use conceptgraph_core::types::{ConceptCatalog, ConceptRecord};
use conceptgraph_core::view::ViewController;
use std::time::{Duration, Instant};

fn catalog() -> ConceptCatalog {
    ConceptCatalog::new(vec![
        ConceptRecord::new("A", "Alpha", "Methods")
            .with_tags(["psychology", "learning"])
            .with_related(["B", "C"])
            .featured(true),
        ConceptRecord::new("B", "Bravo", "Tools")
            .with_tags(["psychology"])
            .with_related(["A"]),
        ConceptRecord::new("C", "Charlie", "Methods")
            .with_tags(["learning", "education"])
            .with_related(["A", "D"]),
        ConceptRecord::new("D", "Delta", "Principles")
            .with_tags(["philosophy"])
            .with_related(["C"])
            .featured(true),
        ConceptRecord::new("E", "Echo", "Tools"),
    ])
}

fn config() -> Config {
    let mut config = Config::new();
    config.categories = vec!["Methods".into(), "Tools".into(), "Principles".into()];
    config.view.hops = 1;
    config
}

#[test]
fn test_seeded_from_query_string() {
    let view = ViewController::from_query(catalog(), &config(), None, "?hide=Tools&bogus=1&hide=Tools,Nope");
    assert_eq!(view.query_string(), "hide=Tools");
    assert_eq!(view.global_graph().node_ids(), vec!["A", "C", "D"]);
}

#[test]
fn test_filter_changes_serialize_immediately() {
    let mut view = ViewController::new(catalog(), &config(), None);
    assert_eq!(view.query_string(), "");

    view.set_featured_only(true);
    assert_eq!(view.query_string(), "featured=1");
    assert_eq!(view.global_graph().node_ids(), vec!["A", "D"]);

    view.set_min_connections(2);
    view.toggle_tag("learning");
    assert_eq!(view.query_string(), "tags=learning&featured=1&minDeg=2");
    assert_eq!(view.global_graph().node_ids(), vec!["A"]);

    view.clear_filters();
    assert_eq!(view.query_string(), "");
}

#[test]
fn test_query_edits_are_debounced() {
    let mut view = ViewController::new(catalog(), &config(), None);
    let start = Instant::now();
    view.set_query(start, "a");
    view.set_query(start + Duration::from_millis(50), "al");
    view.set_query(start + Duration::from_millis(100), "alp");

    assert_eq!(view.query_string(), "", "Nothing written mid-burst");
    assert!(!view.tick(start + Duration::from_millis(200)));
    assert!(view.tick(start + Duration::from_millis(400)));
    assert_eq!(view.query_string(), "q=alp");
    assert!(!view.tick(start + Duration::from_millis(800)));
}

#[test]
fn test_filter_change_supersedes_pending_query() {
    let mut view = ViewController::new(catalog(), &config(), None);
    let start = Instant::now();
    view.set_query(start, "delta");
    view.toggle_category("Tools");
    assert_eq!(view.query_string(), "q=delta&hide=Tools");
    assert!(!view.tick(start + Duration::from_secs(5)));
}

#[test]
fn test_focus_narrows_display() {
    let mut view = ViewController::new(catalog(), &config(), None);
    view.focus("A");
    assert_eq!(view.displayed_graph().node_ids(), vec!["A", "B", "C"]);
    view.set_hops(2);
    assert_eq!(view.displayed_graph().node_ids(), vec!["A", "B", "C", "D"]);
    view.clear_focus();
    assert_eq!(view.displayed_graph().nodes.len(), 5);
}

#[test]
fn test_focus_filtered_out_falls_back_to_global() {
    let mut view = ViewController::new(catalog(), &config(), None);
    view.focus("B");
    view.toggle_category("Tools");
    assert_eq!(view.center(), Some("B"));
    assert_eq!(view.displayed_graph().node_ids(), vec!["A", "C", "D"]);
}

#[test]
fn test_highlights_follow_displayed_graph() {
    let mut view = ViewController::new(catalog(), &config(), None);
    view.set_query(Instant::now(), "ha");
    let hits = view.highlights();
    assert!(hits.contains("A") && hits.contains("C"));
    assert_eq!(hits.len(), 2);

    view.focus("D");
    let hits = view.highlights();
    assert_eq!(hits.len(), 1, "Only Charlie is within one hop of Delta");
    assert!(hits.contains("C"));
}

#[test]
fn test_explored_progress_filter() {
    let explored = ExploredSet::new(["A", "B"]);
    let mut view = ViewController::new(catalog(), &config(), Some(explored));
    view.set_explored_filter(ExploredFilter::NotExplored);
    assert_eq!(view.query_string(), "explored=0");
    assert_eq!(view.global_graph().node_ids(), vec!["C", "D", "E"]);
}

#[test]
fn test_explored_filter_without_tracking() {
    let mut view = ViewController::new(catalog(), &config(), None);
    view.set_explored_filter(ExploredFilter::Explored);
    assert_eq!(view.query_string(), "explored=1");
    assert_eq!(view.global_graph().nodes.len(), 5);
}
