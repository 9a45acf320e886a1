pub mod players;
pub mod summary;
pub mod types;

use log::debug;

use crate::config::StatsSettings;
use crate::domain::{sort_chronologically, Game};

pub use types::{Leader, ModeTotals, PlayerRow, Rankings, StatsView, Trend, WeekdayCount};

/// Builds the full statistics view from a snapshot of games in any order.
pub fn calculate_stats(games: &[Game], settings: &StatsSettings) -> StatsView {
    let mut ordered: Vec<&Game> = games.iter().collect();
    sort_chronologically(&mut ordered);

    let tallies = players::tally_players(&ordered);
    debug!("Aggregating stats for {} players over {} games", tallies.len(), games.len());

    let mut rows: Vec<_> = tallies
        .iter()
        .map(|tally| players::build_row(tally, settings))
        .collect();

    let (best_players, worst_players) = summary::best_and_worst(&rows, settings.min_ranked_games);
    let top_win = summary::top_by(&rows, |r| r.max_win_streak);
    let top_lose = summary::top_by(&rows, |r| r.max_lose_streak);
    let rankings = summary::rankings(&rows);
    summary::sort_rows(&mut rows);

    StatsView {
        total_games: games.len(),
        proper_streak: summary::proper_streak(&ordered),
        black_ball_ratio: summary::black_ball_ratio(games),
        most_common_weekday: summary::most_common_weekday(games),
        best_players,
        worst_players,
        top_win,
        top_lose,
        totals: summary::mode_totals(games),
        rankings,
        rows,
    }
}
