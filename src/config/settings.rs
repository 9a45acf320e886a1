use log::warn;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub k_factor: f64,
    pub base_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            base_rating: 1000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsSettings {
    /// Minimum games to be eligible for best/worst player
    pub min_ranked_games: u32,
    pub trend_threshold: f64,
    pub trend_window: usize,
    pub recent_windows: [usize; 3],
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            min_ranked_games: 3,
            trend_threshold: 0.02,
            trend_window: 10,
            recent_windows: [5, 10, 20],
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("games.json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub stats: StatsSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            stats: StatsSettings::default(),
            store: StoreSettings::default(),
        }
    }

    /// Defaults, overridden by `GAMES_PATH`, `ELO_K_FACTOR` and `ELO_BASE_RATING`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(path) = std::env::var("GAMES_PATH") {
            config.store.path = PathBuf::from(path);
        }
        if let Some(k) = parse_env("ELO_K_FACTOR") {
            config.rating.k_factor = k;
        }
        if let Some(base) = parse_env("ELO_BASE_RATING") {
            config.rating.base_rating = base;
        }

        config
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.base_rating, 1000.0);
        assert_eq!(config.stats.min_ranked_games, 3);
        assert_eq!(config.store.path, PathBuf::from("games.json"));
    }

    #[test]
    fn test_parse_value_falls_back_on_garbage() {
        assert_eq!(parse_value::<f64>("ELO_K_FACTOR", " 24 "), Some(24.0));
        assert_eq!(parse_value::<f64>("ELO_K_FACTOR", "fast"), None);
    }
}
