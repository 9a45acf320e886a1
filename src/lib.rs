pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod history;
pub mod output;
pub mod rating;
pub mod services;
pub mod stats;
pub mod store;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::domain::{GameMode, NewGame, DATE_FORMAT};
use crate::history::ModeFilter;
use crate::services::{ReportService, ServerService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_reports(games_path: Option<PathBuf>) -> Result<ReportService> {
    let mut config = AppConfig::from_env();
    if let Some(path) = games_path {
        config.store.path = path;
    }
    let store = store::open_store(&config.store)?;
    Ok(ReportService::new(store, config))
}

pub fn handle_serve(port: u16, reports: ReportService) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, reports);
        service.run().await
    })
}

pub fn handle_standings(reports: &ReportService) -> Result<()> {
    output::display_standings(&reports.elo()?);
    Ok(())
}

pub fn handle_stats(reports: &ReportService) -> Result<()> {
    output::display_stats(&reports.stats()?);
    Ok(())
}

pub fn handle_history(reports: &ReportService, query: &str, mode: &str) -> Result<()> {
    let mode = ModeFilter::parse(mode)
        .with_context(|| format!("Unknown mode filter '{}', expected all, 1v1 or 2v2", mode))?;
    output::display_history(&reports.history(query, mode)?);
    Ok(())
}

pub fn handle_add(
    reports: &ReportService,
    mode: GameMode,
    winners: &[String],
    losers: &[String],
    date: Option<&str>,
    lost_on_black: bool,
) -> Result<()> {
    let new_game = NewGame {
        date_iso: date
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string()),
        mode,
        winners: winners.to_vec(),
        losers: losers.to_vec(),
        lost_on_black,
    };

    let (game, count) = reports.add_game(new_game)?;
    println!("Recorded game {} ({} games stored)", game.id, count);
    Ok(())
}

pub fn handle_delete(reports: &ReportService, id: &str) -> Result<()> {
    let removed = reports.delete_game(id)?;
    if removed == 0 {
        anyhow::bail!("No game with id {}", id);
    }
    println!("Removed {} game(s)", removed);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
