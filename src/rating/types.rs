use serde::Serialize;
use std::collections::HashMap;

use crate::domain::Game;

pub type PlayerName = String;
pub type RatingValue = f64;
pub type RatingMap = HashMap<PlayerName, RatingValue>;

/// Final rating of one player after replaying every valid game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub name: PlayerName,
    pub rating: i64,
    /// Change from the player's most recent game
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub name: PlayerName,
    pub delta: i64,
}

/// A game together with the rating changes it caused.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedGame {
    #[serde(flatten)]
    pub game: Game,
    pub elo_changes: Vec<RatingChange>,
}

impl AsRef<Game> for AnnotatedGame {
    fn as_ref(&self) -> &Game {
        &self.game
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EloResult {
    /// Sorted by rating, highest first
    pub standings: Vec<Standing>,
    /// Valid games, oldest first
    pub history: Vec<AnnotatedGame>,
    /// Games left out for missing winners or losers
    pub skipped: usize,
}
