//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_facets, handle_focus, handle_graph, handle_search, handle_url, Session},
};
use crate::exit::GraphExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, session: &Session) -> Result<GraphExit> {
    match command {
        Commands::Graph { filters } => handle_graph(session, &filters),
        Commands::Focus { id, hops, filters } => handle_focus(session, &id, hops, &filters),
        Commands::Search { text, filters } => handle_search(session, &text, &filters),
        Commands::Url { query } => Ok(handle_url(session, &query)),
        Commands::Facets => handle_facets(session),
    }
}

/// Exit code for a command line clap refused. `--help` and `--version` also
/// arrive as errors but are not failures.
#[must_use]
pub fn parse_failure(err: &clap::Error) -> GraphExit {
    if err.use_stderr() {
        GraphExit::InvalidInput
    } else {
        GraphExit::Success
    }
}
