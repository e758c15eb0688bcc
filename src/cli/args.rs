use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::{self, ExploredFilter, FilterState};

#[derive(Parser, Debug)]
#[command(name = "conceptgraph", version, about = "Explore a concept collection as a filtered graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Concept collection (JSON array); overrides `catalog.data`
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,
    /// Explored-id list (JSON array); overrides `catalog.explored`
    #[arg(long, global = true, value_name = "FILE")]
    pub explored: Option<PathBuf>,
    /// Emit JSON instead of a terminal summary
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the filtered graph over the whole collection
    Graph {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the neighborhood around one concept
    Focus {
        #[arg(value_name = "ID")]
        id: String,
        /// Neighborhood radius; defaults to `view.hops`
        #[arg(long)]
        hops: Option<usize>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List concepts whose name or alias contains the text
    Search {
        #[arg(value_name = "TEXT")]
        text: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Normalize a view query string
    Url {
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// List categories and tags with concept counts
    Facets,
}

/// View constraints, either as a query string or as individual flags.
/// Flags are layered on top of `--view`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Seed the view from a query string, e.g. `hide=Tools&featured=1`
    #[arg(long, value_name = "QUERY")]
    pub view: Option<String>,
    /// Free-text query used for highlighting
    #[arg(long, short)]
    pub query: Option<String>,
    /// Categories to hide
    #[arg(long, value_delimiter = ',')]
    pub hide: Vec<String>,
    /// Tags every concept must carry
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Only featured concepts
    #[arg(long)]
    pub featured: bool,
    /// Minimum number of declared relations
    #[arg(long)]
    pub min_deg: Option<usize>,
    /// all | explored | not-explored
    #[arg(long, value_parser = parse_explored_filter)]
    pub progress: Option<ExploredFilter>,
}

impl FilterArgs {
    /// Resolves the flags into a state. Unknown categories are dropped.
    #[must_use]
    pub fn to_state(&self, known_categories: &[String]) -> FilterState {
        let mut state = self
            .view
            .as_deref()
            .map(|q| filter::decode_query_string(q, known_categories))
            .unwrap_or_default();

        if let Some(query) = &self.query {
            state.query = query.trim().to_string();
        }
        for category in &self.hide {
            if known_categories.contains(category) {
                state.hidden_categories.insert(category.clone());
            } else {
                log::warn!("ignoring unknown category {category:?}");
            }
        }
        state.selected_tags.extend(
            self.tags
                .iter()
                .filter(|t| !t.is_empty())
                .cloned(),
        );
        if self.featured {
            state.featured_only = true;
        }
        if let Some(min_deg) = self.min_deg {
            state.min_connections = min_deg;
        }
        if let Some(progress) = self.progress {
            state.explored_filter = progress;
        }
        state
    }
}

fn parse_explored_filter(value: &str) -> Result<ExploredFilter, String> {
    ExploredFilter::parse(value)
        .ok_or_else(|| format!("expected all, explored, or not-explored (got {value:?})"))
}
