use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::domain::{Game, NewGame};
use crate::history::{build_history, HistoryView, ModeFilter};
use crate::rating::{calculate_elo, AnnotatedGame, EloResult};
use crate::stats::{calculate_stats, StatsView};
use crate::store::SharedStore;

/// Reads a fresh snapshot from the store for every view it builds.
#[derive(Clone)]
pub struct ReportService {
    store: SharedStore,
    config: AppConfig,
}

impl ReportService {
    pub fn new(store: SharedStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    pub fn games(&self) -> Result<Vec<Game>> {
        self.store.list()
    }

    pub fn elo(&self) -> Result<EloResult> {
        let games = self.store.list()?;
        Ok(calculate_elo(&games, &self.config.rating))
    }

    pub fn stats(&self) -> Result<StatsView> {
        let games = self.store.list()?;
        Ok(calculate_stats(&games, &self.config.stats))
    }

    /// History of rated games with their Elo changes, filtered and grouped by day.
    pub fn history(&self, query: &str, mode: ModeFilter) -> Result<HistoryView<AnnotatedGame>> {
        let elo = self.elo()?;
        Ok(build_history(&elo.history, query, mode))
    }

    /// Validates and stores a new game; returns it with the new store size.
    pub fn add_game(&self, new_game: NewGame) -> Result<(Game, usize)> {
        let game = new_game.into_game()?;
        let count = self.store.append(game.clone())?;
        info!("Recorded {} game {} on {}", game.mode.as_str(), game.id, game.date_iso);
        Ok((game, count))
    }

    pub fn delete_game(&self, id: &str) -> Result<usize> {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameMode, GameValidationError};
    use crate::store::JsonFileStore;
    use std::sync::Arc;

    fn service(dir: &tempfile::TempDir) -> ReportService {
        let store: SharedStore = Arc::new(JsonFileStore::new(dir.path().join("games.json")));
        ReportService::new(store, AppConfig::new())
    }

    fn new_game(date: &str, winner: &str, loser: &str) -> NewGame {
        NewGame {
            date_iso: date.to_string(),
            mode: GameMode::OneVOne,
            winners: vec![winner.to_string()],
            losers: vec![loser.to_string()],
            lost_on_black: false,
        }
    }

    #[test]
    fn test_views_follow_store_changes() {
        let dir = tempfile::tempdir().unwrap();
        let reports = service(&dir);

        let (first, count) = reports.add_game(new_game("2024-02-01", "Ann", "Bob")).unwrap();
        assert_eq!(count, 1);
        reports.add_game(new_game("2024-02-02", "Bob", "Cid")).unwrap();

        let elo = reports.elo().unwrap();
        assert_eq!(elo.standings.len(), 3);
        assert_eq!(reports.stats().unwrap().total_games, 2);

        let history = reports.history("ann", ModeFilter::All).unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.groups[0].items[0].game.id, first.id);

        assert_eq!(reports.delete_game(&first.id).unwrap(), 1);
        assert_eq!(reports.games().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_game_is_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let reports = service(&dir);

        let err = reports.add_game(new_game("2024-02-01", "Ann", "  ")).unwrap_err();
        assert!(err.downcast_ref::<GameValidationError>().is_some());
        assert!(reports.games().unwrap().is_empty());
    }
}
