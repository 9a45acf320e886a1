use serde::Serialize;

/// Direction of a player's recent form compared to their lifetime ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One appearance of a player, in chronological order
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub won: bool,
    pub date_iso: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
    pub ratio: f64,
    pub last5: f64,
    pub last10: f64,
    pub last20: f64,
    pub max_win_streak: u32,
    pub max_lose_streak: u32,
    pub trend: Trend,
    pub participation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub name: String,
    pub value: u32,
}

impl Default for Leader {
    fn default() -> Self {
        Self {
            name: "—".to_string(),
            value: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayCount {
    pub weekday: String,
    pub games: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeTotals {
    pub total: usize,
    pub one_v_one: usize,
    pub two_v_two: usize,
    pub black_ball_losses: usize,
}

/// Player rows in chart order, with axis maxima that are never zero
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub by_wins: Vec<PlayerRow>,
    pub by_ratio: Vec<PlayerRow>,
    pub by_participation: Vec<PlayerRow>,
    pub max_wins: u32,
    pub max_participation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub total_games: usize,
    pub proper_streak: usize,
    pub black_ball_ratio: f64,
    pub most_common_weekday: Option<WeekdayCount>,
    pub best_players: Vec<String>,
    pub worst_players: Vec<String>,
    pub top_win: Leader,
    pub top_lose: Leader,
    pub totals: ModeTotals,
    pub rankings: Rankings,
    /// Sorted by ratio, then wins, both descending
    pub rows: Vec<PlayerRow>,
}
