use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{Game, GameMode};

/// Which game modes a history view keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFilter {
    #[default]
    All,
    Only(GameMode),
}

impl ModeFilter {
    /// Parses `all`, `1v1` or `2v2`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "all" => Some(ModeFilter::All),
            other => GameMode::parse(other).map(ModeFilter::Only),
        }
    }

    pub fn matches(&self, game: &Game) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Only(mode) => game.mode == *mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryGroup<T> {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView<T> {
    pub total: usize,
    pub groups: Vec<HistoryGroup<T>>,
}

/// Filters games by mode and player-name query, then groups them by day, newest first.
pub fn build_history<T>(games: &[T], query: &str, mode: ModeFilter) -> HistoryView<T>
where
    T: AsRef<Game> + Clone,
{
    let term = query.trim().to_lowercase();

    let mut list: Vec<&T> = games.iter().collect();
    list.sort_by(|a, b| game_of(*b).date_iso.cmp(&game_of(*a).date_iso));
    list.retain(|g| mode.matches(game_of(*g)));
    if !term.is_empty() {
        list.retain(|g| names_haystack(game_of(*g)).contains(&term));
    }

    HistoryView {
        total: list.len(),
        groups: group_by_date(list),
    }
}

fn game_of<T: AsRef<Game>>(item: &T) -> &Game {
    item.as_ref()
}

fn names_haystack(game: &Game) -> String {
    game.winners
        .iter()
        .chain(game.losers.iter())
        .map(|n| n.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn group_by_date<T: AsRef<Game> + Clone>(list: Vec<&T>) -> Vec<HistoryGroup<T>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<HistoryGroup<T>> = Vec::new();

    for item in list {
        let date_iso = &game_of(item).date_iso;
        let slot = match index.get(date_iso) {
            Some(&slot) => slot,
            None => {
                groups.push(HistoryGroup {
                    date_iso: date_iso.clone(),
                    items: Vec::new(),
                });
                index.insert(date_iso.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].items.push(item.clone());
    }

    groups.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
    groups
}
