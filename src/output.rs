use colored::*;

use crate::history::HistoryView;
use crate::rating::{AnnotatedGame, EloResult, RatingChange};
use crate::stats::{StatsView, Trend};

pub fn display_standings(elo: &EloResult) {
    println!("\n{}", "Elo standings".bold().cyan());
    println!("{}", "=".repeat(40).cyan());

    if elo.standings.is_empty() {
        println!("{}", "No rated games yet".yellow());
        return;
    }

    for (idx, standing) in elo.standings.iter().enumerate() {
        let rank = format!("{:>4}", format!("#{}", idx + 1));
        let rank = if idx < 3 { rank.bold().yellow() } else { rank.normal() };
        println!(
            "{}  {:<20} {:>5}  {}",
            rank,
            standing.name,
            standing.rating,
            signed(standing.delta)
        );
    }

    if elo.skipped > 0 {
        println!("\n{}", format!("{} incomplete game(s) ignored", elo.skipped).dimmed());
    }
}

pub fn display_stats(stats: &StatsView) {
    println!("\n{}", "Overview".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!(
        "Games: {} ({} 1v1, {} 2v2)",
        stats.totals.total, stats.totals.one_v_one, stats.totals.two_v_two
    );
    println!(
        "Black-ball losses: {} ({:.1}%)",
        stats.totals.black_ball_losses,
        stats.black_ball_ratio * 100.0
    );
    println!("Games since last black-ball loss: {}", stats.proper_streak);
    if let Some(day) = &stats.most_common_weekday {
        println!("Favourite day: {} ({} games)", day.weekday, day.games);
    }
    println!("Best: {}", names_or_dash(&stats.best_players).green());
    println!("Worst: {}", names_or_dash(&stats.worst_players).red());
    println!("Longest win streak: {} ({})", stats.top_win.name, stats.top_win.value);
    println!("Longest losing streak: {} ({})", stats.top_lose.name, stats.top_lose.value);

    println!("\n{}", "Players".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!(
        "{:<20} {:>4} {:>4} {:>6} {:>6} {:>6} {:>6}  {}",
        "name", "W", "L", "ratio", "last5", "last10", "last20", "trend"
    );
    for row in &stats.rows {
        println!(
            "{:<20} {:>4} {:>4} {:>6} {:>6} {:>6} {:>6}  {}",
            row.name,
            row.wins,
            row.losses,
            percent(row.ratio),
            percent(row.last5),
            percent(row.last10),
            percent(row.last20),
            trend_marker(row.trend)
        );
    }
}

pub fn display_history(view: &HistoryView<AnnotatedGame>) {
    println!("\n{}", format!("History ({} games)", view.total).bold().cyan());

    for group in &view.groups {
        println!("\n{}", group.date_iso.bold());
        for item in &group.items {
            let game = &item.game;
            let badge = if game.lost_on_black {
                format!("{} • black-ball", game.mode.as_str())
            } else {
                game.mode.as_str().to_string()
            };
            println!(
                "  {} beat {}  [{}]  {}  {}",
                game.winners.join(" & ").green(),
                game.losers.join(" & ").red(),
                badge,
                changes(&item.elo_changes),
                game.id.dimmed()
            );
        }
    }
}

fn signed(delta: i64) -> ColoredString {
    let text = format!("{:+}", delta);
    match delta {
        d if d > 0 => text.green(),
        d if d < 0 => text.red(),
        _ => text.normal(),
    }
}

fn changes(elo_changes: &[RatingChange]) -> String {
    elo_changes
        .iter()
        .map(|c| format!("{} {:+}", c.name, c.delta))
        .collect::<Vec<_>>()
        .join(", ")
}

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn names_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "—".to_string()
    } else {
        names.join(", ")
    }
}

fn trend_marker(trend: Trend) -> ColoredString {
    match trend {
        Trend::Up => "▲".green(),
        Trend::Down => "▼".red(),
        Trend::Flat => "•".normal(),
    }
}
