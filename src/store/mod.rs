pub mod json_file;
pub mod sqlite;

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::config::StoreSettings;
use crate::domain::Game;

pub use json_file::JsonFileStore;
pub use sqlite::SqliteStore;

/// Persistent, append-only collection of game records.
pub trait GameStore: Send + Sync {
    /// All stored games in insertion order
    fn list(&self) -> Result<Vec<Game>>;

    /// Appends a game and returns the new number of stored games
    fn append(&self, game: Game) -> Result<usize>;

    /// Removes every game with this id and returns how many were removed
    fn remove(&self, id: &str) -> Result<usize>;
}

pub type SharedStore = Arc<dyn GameStore>;

/// Picks the backend from the file extension: SQLite for `.db`/`.sqlite`/`.sqlite3`,
/// JSON otherwise.
pub fn open_store(settings: &StoreSettings) -> Result<SharedStore> {
    let path = settings.path.as_path();
    if is_sqlite_path(path) {
        info!("Using SQLite game store at {}", path.display());
        Ok(Arc::new(SqliteStore::open(path)?))
    } else {
        info!("Using JSON game store at {}", path.display());
        Ok(Arc::new(JsonFileStore::new(path)))
    }
}

fn is_sqlite_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("db" | "sqlite" | "sqlite3")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        assert!(is_sqlite_path(Path::new("data/games.db")));
        assert!(is_sqlite_path(Path::new("games.sqlite3")));
        assert!(!is_sqlite_path(Path::new("games.json")));
        assert!(!is_sqlite_path(Path::new("games")));
    }
}
