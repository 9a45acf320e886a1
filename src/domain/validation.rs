use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::models::{normalize_name, Game, GameMode, DATE_FORMAT};

/// A game as submitted by a user, before it gets an id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub mode: GameMode,
    #[serde(default)]
    pub winners: Vec<String>,
    #[serde(default)]
    pub losers: Vec<String>,
    #[serde(default)]
    pub lost_on_black: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum GameValidationError {
    #[error("{mode} needs exactly {expected} winner(s) and {expected} loser(s), got {winners} and {losers}")]
    WrongTeamSize {
        mode: &'static str,
        expected: usize,
        winners: usize,
        losers: usize,
    },
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl NewGame {
    /// Checks the submission and turns it into a storable game with a fresh id.
    pub fn into_game(self) -> Result<Game, GameValidationError> {
        let winners: Vec<String> = self.winners.iter().filter_map(|n| normalize_name(n)).collect();
        let losers: Vec<String> = self.losers.iter().filter_map(|n| normalize_name(n)).collect();

        let expected = self.mode.team_size();
        if winners.len() != expected || losers.len() != expected {
            return Err(GameValidationError::WrongTeamSize {
                mode: self.mode.as_str(),
                expected,
                winners: winners.len(),
                losers: losers.len(),
            });
        }

        let date_iso = self.date_iso.trim().to_string();
        if NaiveDate::parse_from_str(&date_iso, DATE_FORMAT).is_err() {
            return Err(GameValidationError::InvalidDate(date_iso));
        }

        Ok(Game {
            id: Uuid::new_v4().to_string(),
            date_iso,
            mode: self.mode,
            winners,
            losers,
            lost_on_black: self.lost_on_black,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(mode: GameMode, winners: &[&str], losers: &[&str]) -> NewGame {
        NewGame {
            date_iso: "2024-03-09".to_string(),
            mode,
            winners: winners.iter().map(|s| s.to_string()).collect(),
            losers: losers.iter().map(|s| s.to_string()).collect(),
            lost_on_black: false,
        }
    }

    #[test]
    fn test_valid_one_v_one() {
        let game = new_game(GameMode::OneVOne, &[" Ann "], &["Bob", ""])
            .into_game()
            .unwrap();

        assert_eq!(game.winners, vec!["Ann"]);
        assert_eq!(game.losers, vec!["Bob"]);
        assert!(!game.id.is_empty());
    }

    #[test]
    fn test_two_v_two_needs_two_per_side() {
        let err = new_game(GameMode::TwoVTwo, &["Ann", "Bob"], &["Cid"])
            .into_game()
            .unwrap_err();

        assert_eq!(
            err,
            GameValidationError::WrongTeamSize {
                mode: "2v2",
                expected: 2,
                winners: 2,
                losers: 1
            }
        );
    }

    #[test]
    fn test_rejects_bad_date() {
        let mut submission = new_game(GameMode::OneVOne, &["Ann"], &["Bob"]);
        submission.date_iso = "09.03.2024".to_string();

        assert!(matches!(
            submission.into_game(),
            Err(GameValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_game(GameMode::OneVOne, &["Ann"], &["Bob"]).into_game().unwrap();
        let b = new_game(GameMode::OneVOne, &["Ann"], &["Bob"]).into_game().unwrap();
        assert_ne!(a.id, b.id);
    }
}
