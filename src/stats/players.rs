use std::collections::HashMap;

use super::types::{Outcome, PlayerRow, Trend};
use crate::config::StatsSettings;
use crate::domain::Game;

/// Raw per-player counts collected while replaying games
#[derive(Debug, Clone)]
pub struct PlayerTally {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub series: Vec<Outcome>,
}

impl PlayerTally {
    fn new(name: String) -> Self {
        Self {
            name,
            wins: 0,
            losses: 0,
            series: Vec::new(),
        }
    }

    fn record(&mut self, won: bool, date_iso: &str) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.series.push(Outcome {
            won,
            date_iso: date_iso.to_string(),
        });
    }
}

/// Tallies every player over games that are already sorted oldest first.
///
/// Players come back in order of first appearance.
pub fn tally_players(ordered: &[&Game]) -> Vec<PlayerTally> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<PlayerTally> = Vec::new();

    for game in ordered {
        let sides = [(game.winner_names(), true), (game.loser_names(), false)];
        for (names, won) in sides {
            for name in names {
                let slot = *index.entry(name.clone()).or_insert_with(|| {
                    tallies.push(PlayerTally::new(name));
                    tallies.len() - 1
                });
                tallies[slot].record(won, &game.date_iso);
            }
        }
    }

    tallies
}

pub fn build_row(tally: &PlayerTally, settings: &StatsSettings) -> PlayerRow {
    let games = tally.wins + tally.losses;
    let ratio = win_ratio(tally.wins, games);
    let (max_win_streak, max_lose_streak) = max_streaks(&tally.series);
    let [w5, w10, w20] = settings.recent_windows;
    let trend_recent = recent_ratio(&tally.series, settings.trend_window);

    PlayerRow {
        name: tally.name.clone(),
        wins: tally.wins,
        losses: tally.losses,
        games,
        ratio,
        last5: recent_ratio(&tally.series, w5),
        last10: recent_ratio(&tally.series, w10),
        last20: recent_ratio(&tally.series, w20),
        max_win_streak,
        max_lose_streak,
        trend: classify_trend(trend_recent, ratio, settings.trend_threshold),
        participation: games,
    }
}

pub fn win_ratio(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(games)
    }
}

/// Longest run of wins and of losses, in that order.
pub fn max_streaks(series: &[Outcome]) -> (u32, u32) {
    let mut ordered: Vec<&Outcome> = series.iter().collect();
    ordered.sort_by(|a, b| a.date_iso.cmp(&b.date_iso));

    let (mut win_run, mut lose_run) = (0, 0);
    let (mut max_win, mut max_lose) = (0, 0);

    for outcome in ordered {
        if outcome.won {
            win_run += 1;
            lose_run = 0;
            max_win = max_win.max(win_run);
        } else {
            lose_run += 1;
            win_run = 0;
            max_lose = max_lose.max(lose_run);
        }
    }

    (max_win, max_lose)
}

/// Win ratio over the latest `window` appearances; 0 when there are none.
pub fn recent_ratio(series: &[Outcome], window: usize) -> f64 {
    let recent: Vec<&Outcome> = series.iter().rev().take(window).collect();
    let wins = recent.iter().filter(|o| o.won).count();
    win_ratio(wins as u32, recent.len() as u32)
}

pub fn classify_trend(recent: f64, overall: f64, threshold: f64) -> Trend {
    let diff = recent - overall;
    if diff > threshold {
        Trend::Up
    } else if diff < -threshold {
        Trend::Down
    } else {
        Trend::Flat
    }
}
