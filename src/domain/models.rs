use serde::{Deserialize, Deserializer, Serialize};

/// Format of `Game::date_iso`; lexicographic order on it is chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Team size of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "1v1")]
    OneVOne,
    #[serde(rename = "2v2")]
    TwoVTwo,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::OneVOne => "1v1",
            GameMode::TwoVTwo => "2v2",
        }
    }

    pub fn team_size(&self) -> usize {
        match self {
            GameMode::OneVOne => 1,
            GameMode::TwoVTwo => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1v1" => Some(GameMode::OneVOne),
            "2v2" => Some(GameMode::TwoVTwo),
            _ => None,
        }
    }
}

/// A recorded game, as kept in the store.
///
/// Records are never edited; they are only appended or deleted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub mode: GameMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub winners: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lost_on_black: bool,
}

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Game {
    /// Winner names after normalization, blanks dropped.
    pub fn winner_names(&self) -> Vec<String> {
        normalize_names(&self.winners)
    }

    /// Loser names after normalization, blanks dropped.
    pub fn loser_names(&self) -> Vec<String> {
        normalize_names(&self.losers)
    }

    /// A game takes part in rating only if both sides have at least one player.
    pub fn has_both_sides(&self) -> bool {
        !self.winner_names().is_empty() && !self.loser_names().is_empty()
    }
}

impl AsRef<Game> for Game {
    fn as_ref(&self) -> &Game {
        self
    }
}

/// Player identity: surrounding whitespace is ignored, case is significant.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_names(names: &[String]) -> Vec<String> {
    names.iter().filter_map(|n| normalize_name(n)).collect()
}

/// Sorts games oldest first. Games on the same day keep their input order.
pub fn sort_chronologically<T: AsRef<Game>>(games: &mut [T]) {
    games.sort_by(|a, b| a.as_ref().date_iso.cmp(&b.as_ref().date_iso));
}
