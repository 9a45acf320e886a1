use anyhow::Result;
use log::info;
use std::path::Path;

use super::GameStore;
use crate::database::{self, DbPool};
use crate::domain::Game;

/// Games kept in a SQLite database, one row per record
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let pool = database::create_pool(path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        Ok(Self { pool })
    }
}

impl GameStore for SqliteStore {
    fn list(&self) -> Result<Vec<Game>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::games::list_all(&mut conn)
    }

    fn append(&self, game: Game) -> Result<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        info!("Appending game {} ({})", game.id, game.date_iso);
        database::games::insert_game(&mut conn, &game)?;
        database::games::count_games(&mut conn)
    }

    fn remove(&self, id: &str) -> Result<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::games::delete_by_id(&mut conn, id)?;
        info!("Removed {} game(s) with id {}", removed, id);
        Ok(removed)
    }
}
