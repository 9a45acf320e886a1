use anyhow::Result;

use pool_tracker::cli::{Cli, Command};
use pool_tracker::{
    build_reports, handle_add, handle_completions, handle_delete, handle_history, handle_serve,
    handle_standings, handle_stats, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let Cli { games, command } = cli;
    match command {
        Command::Completions { shell } => handle_completions(shell),
        Command::Serve { port } => handle_serve(port, build_reports(games)?),
        Command::Standings => handle_standings(&build_reports(games)?),
        Command::Stats => handle_stats(&build_reports(games)?),
        Command::History { query, mode } => handle_history(&build_reports(games)?, &query, &mode),
        Command::Add {
            mode,
            winners,
            losers,
            date,
            black,
        } => handle_add(&build_reports(games)?, mode, &winners, &losers, date.as_deref(), black),
        Command::Delete { id } => handle_delete(&build_reports(games)?, &id),
    }
}
