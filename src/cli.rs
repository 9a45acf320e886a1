use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::GameMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "pool game tracker")]
pub struct Cli {
    /// Games file (.json) or database (.db); overrides GAMES_PATH
    #[arg(long, global = true)]
    pub games: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print Elo standings
    Standings,
    /// Print player and overall statistics
    Stats,
    /// Print game history grouped by day
    History {
        /// Only games with a player name containing this text
        #[arg(short, long, default_value = "")]
        query: String,
        /// all, 1v1 or 2v2
        #[arg(short, long, default_value = "all")]
        mode: String,
    },
    /// Record a game
    Add {
        /// 1v1 or 2v2
        #[arg(short, long, default_value = "1v1", value_parser = parse_mode)]
        mode: GameMode,
        /// Winner name (repeat for 2v2)
        #[arg(short, long = "winner", required = true)]
        winners: Vec<String>,
        /// Loser name (repeat for 2v2)
        #[arg(short, long = "loser", required = true)]
        losers: Vec<String>,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// The losing side lost on the black ball
        #[arg(short, long)]
        black: bool,
    },
    /// Delete a game by id
    Delete { id: String },
    /// Print shell completions
    Completions { shell: Shell },
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    GameMode::parse(value).ok_or_else(|| format!("unknown mode '{}', expected 1v1 or 2v2", value))
}
