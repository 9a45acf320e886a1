use anyhow::{Context, Result};
use rusqlite::params;
use rusqlite::types::Type;

use super::connection::DbConn;
use crate::domain::{Game, GameMode};

pub fn insert_game(conn: &mut DbConn, game: &Game) -> Result<()> {
    let sql = "INSERT INTO games (id, date_iso, mode, winners, losers, lost_on_black) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    let winners = serde_json::to_string(&game.winners).context("Failed to encode winners")?;
    let losers = serde_json::to_string(&game.losers).context("Failed to encode losers")?;

    conn.execute(
        sql,
        params![
            game.id,
            game.date_iso,
            game.mode.as_str(),
            winners,
            losers,
            game.lost_on_black
        ],
    )
    .context("Failed to insert game")?;

    Ok(())
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    let mode: String = row.get(2)?;
    let mode = GameMode::parse(&mode).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, format!("unknown game mode '{}'", mode).into())
    })?;

    Ok(Game {
        id: row.get(0)?,
        date_iso: row.get(1)?,
        mode,
        winners: parse_names(row, 3)?,
        losers: parse_names(row, 4)?,
        lost_on_black: row.get(5)?,
    })
}

fn parse_names(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Game>> {
    let sql = "SELECT id, date_iso, mode, winners, losers, lost_on_black FROM games ORDER BY seq";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read games")?;

    Ok(rows)
}

pub fn delete_by_id(conn: &mut DbConn, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM games WHERE id = ?1", params![id])
        .context("Failed to delete game")
}

pub fn count_games(conn: &mut DbConn) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .context("Failed to count games")?;
    Ok(count as usize)
}
