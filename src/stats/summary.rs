use chrono::{Datelike, NaiveDate};
use log::warn;
use std::cmp::Ordering;

use super::types::{Leader, ModeTotals, PlayerRow, Rankings, WeekdayCount};
use crate::domain::{Game, GameMode, DATE_FORMAT};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Number of latest games in a row (oldest-first input) not lost on the black.
pub fn proper_streak(ordered: &[&Game]) -> usize {
    ordered
        .iter()
        .rev()
        .take_while(|g| !g.lost_on_black)
        .count()
}

pub fn black_ball_ratio(games: &[Game]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    let black = games.iter().filter(|g| g.lost_on_black).count();
    black as f64 / games.len() as f64
}

/// Weekday with the most games; ties go to the earlier day, Sunday first.
pub fn most_common_weekday(games: &[Game]) -> Option<WeekdayCount> {
    let mut counts = [0usize; 7];

    for game in games {
        match NaiveDate::parse_from_str(game.date_iso.trim(), DATE_FORMAT) {
            Ok(date) => counts[date.weekday().num_days_from_sunday() as usize] += 1,
            Err(_) => warn!("Game {} has unparseable date '{}'", game.id, game.date_iso),
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count > 0 && best.is_none_or(|(_, top)| count > top) {
            best = Some((idx, count));
        }
    }

    best.map(|(idx, games)| WeekdayCount {
        weekday: WEEKDAYS[idx].to_string(),
        games,
    })
}

/// Names of eligible players sharing the highest and the lowest ratio.
pub fn best_and_worst(rows: &[PlayerRow], min_games: u32) -> (Vec<String>, Vec<String>) {
    let eligible: Vec<&PlayerRow> = rows.iter().filter(|r| r.games >= min_games).collect();
    if eligible.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let max = eligible.iter().map(|r| r.ratio).fold(f64::MIN, f64::max);
    let min = eligible.iter().map(|r| r.ratio).fold(f64::MAX, f64::min);

    let names_with = |target: f64| -> Vec<String> {
        eligible
            .iter()
            .filter(|r| r.ratio == target)
            .map(|r| r.name.clone())
            .collect()
    };

    (names_with(max), names_with(min))
}

/// First player holding the highest value; "—" when nobody has one above zero.
pub fn top_by(rows: &[PlayerRow], value: impl Fn(&PlayerRow) -> u32) -> Leader {
    let mut leader = Leader::default();
    for row in rows {
        let v = value(row);
        if v > leader.value {
            leader = Leader {
                name: row.name.clone(),
                value: v,
            };
        }
    }
    leader
}

pub fn mode_totals(games: &[Game]) -> ModeTotals {
    ModeTotals {
        total: games.len(),
        one_v_one: games.iter().filter(|g| g.mode == GameMode::OneVOne).count(),
        two_v_two: games.iter().filter(|g| g.mode == GameMode::TwoVTwo).count(),
        black_ball_losses: games.iter().filter(|g| g.lost_on_black).count(),
    }
}

pub fn rankings(rows: &[PlayerRow]) -> Rankings {
    let mut by_wins = rows.to_vec();
    by_wins.sort_by(|a, b| b.wins.cmp(&a.wins));

    let mut by_ratio = rows.to_vec();
    by_ratio.sort_by(|a, b| cmp_desc(a.ratio, b.ratio));

    let mut by_participation = rows.to_vec();
    by_participation.sort_by(|a, b| b.participation.cmp(&a.participation));

    Rankings {
        max_wins: rows.iter().map(|r| r.wins).max().unwrap_or(0).max(1),
        max_participation: rows.iter().map(|r| r.participation).max().unwrap_or(0).max(1),
        by_wins,
        by_ratio,
        by_participation,
    }
}

/// Main table order: ratio, then wins, both descending.
pub fn sort_rows(rows: &mut [PlayerRow]) {
    rows.sort_by(|a, b| cmp_desc(a.ratio, b.ratio).then_with(|| b.wins.cmp(&a.wins)));
}

fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
