use clap::{CommandFactory, Parser};
use colored::Colorize;
use conceptgraph_core::cli::{self, handlers::Session, Cli};
use conceptgraph_core::exit::GraphExit;

fn main() -> GraphExit {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.print().is_err() {
                return GraphExit::Error;
            }
            return cli::dispatch::parse_failure(&e);
        }
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = if let Some(command) = cli.command {
        Session::load(cli.data, cli.explored, cli.json)
            .and_then(|session| cli::dispatch::execute(command, &session))
    } else {
        Cli::command()
            .print_help()
            .map(|()| GraphExit::Success)
            .map_err(Into::into)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            GraphExit::Error
        }
    }
}
