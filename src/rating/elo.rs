use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{AnnotatedGame, EloResult, PlayerName, RatingChange, RatingMap, Standing};
use crate::config::RatingSettings;
use crate::domain::{sort_chronologically, Game};

/// Replays all games oldest first and returns final standings plus per-game changes.
///
/// Each player moves once per game by the mean of their pairing changes, so a
/// 2v2 win is worth about as much as a 1v1 win against equal opposition.
pub fn calculate_elo(games: &[Game], config: &RatingSettings) -> EloResult {
    debug!("Replaying {} games for Elo (k={}, base={})", games.len(), config.k_factor, config.base_rating);

    let mut ordered: Vec<&Game> = games.iter().collect();
    sort_chronologically(&mut ordered);

    let mut ratings = RatingMap::new();
    let mut last_deltas: HashMap<PlayerName, i64> = HashMap::new();
    let mut history = Vec::with_capacity(ordered.len());
    let mut skipped = 0;

    for game in ordered {
        let winners = game.winner_names();
        let losers = game.loser_names();
        if winners.is_empty() || losers.is_empty() {
            skipped += 1;
            continue;
        }

        seed_players(&mut ratings, winners.iter().chain(losers.iter()), config.base_rating);
        let changes = mean_changes(&ratings, &winners, &losers, config.k_factor);
        let elo_changes = apply_changes(&mut ratings, &mut last_deltas, changes);

        history.push(AnnotatedGame {
            game: game.clone(),
            elo_changes,
        });
    }

    if skipped > 0 {
        debug!("Skipped {} games without winners or losers", skipped);
    }

    EloResult {
        standings: build_standings(&ratings, &last_deltas),
        history,
        skipped,
    }
}

/// Probability that a player rated `rating` beats one rated `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / 400.0))
}

fn seed_players<'a>(
    ratings: &mut RatingMap,
    names: impl Iterator<Item = &'a PlayerName>,
    base_rating: f64,
) {
    for name in names {
        ratings.entry(name.clone()).or_insert(base_rating);
    }
}

/// Running total of one player's raw pairing changes within a game
struct PairingTotal {
    name: PlayerName,
    sum: f64,
    count: u32,
}

fn mean_changes(
    ratings: &RatingMap,
    winners: &[PlayerName],
    losers: &[PlayerName],
    k_factor: f64,
) -> Vec<(PlayerName, f64)> {
    // winners first, then losers, each in team order
    let mut totals: Vec<PairingTotal> = winners
        .iter()
        .chain(losers.iter())
        .map(|name| PairingTotal {
            name: name.clone(),
            sum: 0.0,
            count: 0,
        })
        .collect();

    for winner in winners {
        for loser in losers {
            let expected_w = expected_score(ratings[winner], ratings[loser]);
            let expected_l = 1.0 - expected_w;

            add_change(&mut totals, winner, k_factor * (1.0 - expected_w));
            add_change(&mut totals, loser, -k_factor * expected_l);
        }
    }

    totals
        .into_iter()
        .filter(|t| t.count > 0)
        .map(|t| (t.name, t.sum / f64::from(t.count)))
        .collect()
}

fn add_change(totals: &mut [PairingTotal], name: &PlayerName, change: f64) {
    if let Some(total) = totals.iter_mut().find(|t| &t.name == name) {
        total.sum += change;
        total.count += 1;
    }
}

fn apply_changes(
    ratings: &mut RatingMap,
    last_deltas: &mut HashMap<PlayerName, i64>,
    changes: Vec<(PlayerName, f64)>,
) -> Vec<RatingChange> {
    changes
        .into_iter()
        .map(|(name, change)| {
            if let Some(rating) = ratings.get_mut(&name) {
                *rating += change;
            }
            let delta = change.round() as i64;
            last_deltas.insert(name.clone(), delta);
            RatingChange { name, delta }
        })
        .collect()
}

fn build_standings(ratings: &RatingMap, last_deltas: &HashMap<PlayerName, i64>) -> Vec<Standing> {
    let mut entries: Vec<(&PlayerName, f64)> = ratings.iter().map(|(n, &r)| (n, r)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    entries
        .into_iter()
        .map(|(name, rating)| Standing {
            name: name.clone(),
            rating: rating.round() as i64,
            delta: last_deltas.get(name).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameMode;

    fn game(id: &str, date: &str, winners: &[&str], losers: &[&str]) -> Game {
        Game {
            id: id.to_string(),
            date_iso: date.to_string(),
            mode: if winners.len() == 2 { GameMode::TwoVTwo } else { GameMode::OneVOne },
            winners: winners.iter().map(|s| s.to_string()).collect(),
            losers: losers.iter().map(|s| s.to_string()).collect(),
            lost_on_black: false,
        }
    }

    fn standing<'a>(result: &'a EloResult, name: &str) -> &'a Standing {
        result.standings.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_single_game_between_new_players() {
        let result = calculate_elo(&[game("1", "2024-01-01", &["A"], &["B"])], &RatingSettings::default());

        assert_eq!(standing(&result, "A"), &Standing { name: "A".into(), rating: 1016, delta: 16 });
        assert_eq!(standing(&result, "B"), &Standing { name: "B".into(), rating: 984, delta: -16 });
        assert_eq!(result.history.len(), 1);
        assert_eq!(
            result.history[0].elo_changes,
            vec![
                RatingChange { name: "A".into(), delta: 16 },
                RatingChange { name: "B".into(), delta: -16 },
            ]
        );
    }

    #[test]
    fn test_doubles_use_mean_not_sum() {
        let result = calculate_elo(
            &[game("1", "2024-01-01", &["A", "B"], &["C", "D"])],
            &RatingSettings::default(),
        );

        for name in ["A", "B"] {
            assert_eq!(standing(&result, name).rating, 1016);
        }
        for name in ["C", "D"] {
            assert_eq!(standing(&result, name).rating, 984);
        }
        let order: Vec<&str> = result.history[0].elo_changes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_second_game_uses_updated_ratings() {
        let games = vec![
            game("1", "2024-01-01", &["A"], &["B"]),
            game("2", "2024-01-02", &["A"], &["B"]),
        ];
        let result = calculate_elo(&games, &RatingSettings::default());

        // 1016 vs 984: A is favoured, so gains less than 16
        assert_eq!(standing(&result, "A"), &Standing { name: "A".into(), rating: 1031, delta: 15 });
        assert_eq!(standing(&result, "B"), &Standing { name: "B".into(), rating: 969, delta: -15 });
    }

    #[test]
    fn test_standings_delta_comes_from_last_game() {
        let games = vec![
            game("1", "2024-01-01", &["A"], &["B"]),
            game("2", "2024-01-02", &["C"], &["A"]),
        ];
        let result = calculate_elo(&games, &RatingSettings::default());

        assert!(standing(&result, "A").delta < 0);
        assert_eq!(standing(&result, "B").delta, -16);
    }

    #[test]
    fn test_skips_games_without_both_sides() {
        let games = vec![
            game("1", "2024-01-01", &["A"], &[]),
            game("2", "2024-01-02", &[" "], &["B"]),
            game("3", "2024-01-03", &["C"], &["D"]),
        ];
        let result = calculate_elo(&games, &RatingSettings::default());

        assert_eq!(result.skipped, 2);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.standings.len(), 2);
        assert!(result.standings.iter().all(|s| s.name != "A" && s.name != "B"));
    }

    #[test]
    fn test_empty_input() {
        let result = calculate_elo(&[], &RatingSettings::default());
        assert!(result.standings.is_empty());
        assert!(result.history.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let games = vec![
            game("1", "2024-01-01", &["A"], &["B"]),
            game("2", "2024-01-05", &["B", "C"], &["A", "D"]),
            game("3", "2024-01-03", &["C"], &["A"]),
            game("4", "2024-01-09", &["D"], &["B"]),
        ];
        let mut shuffled = games.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        let config = RatingSettings::default();
        let first = calculate_elo(&games, &config);
        let second = calculate_elo(&shuffled, &config);

        assert_eq!(first, second);
        assert_eq!(first, calculate_elo(&games, &config));

        let dates: Vec<&str> = first.history.iter().map(|g| g.game.date_iso.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-03", "2024-01-05", "2024-01-09"]);
    }

    #[test]
    fn test_names_are_trimmed_but_case_sensitive() {
        let games = vec![
            game("1", "2024-01-01", &[" Bob"], &["Ann"]),
            game("2", "2024-01-02", &["bob "], &["Ann"]),
        ];
        let result = calculate_elo(&games, &RatingSettings::default());

        let names: Vec<&str> = result.standings.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Bob"));
        assert!(names.contains(&"bob"));
        assert_eq!(result.standings.len(), 3);
    }

    #[test]
    fn test_expected_score_is_symmetric() {
        let e = expected_score(1200.0, 1000.0);
        assert!((e + expected_score(1000.0, 1200.0) - 1.0).abs() < 1e-12);
        assert!(e > 0.75 && e < 0.77);
    }
}
