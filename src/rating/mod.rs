pub mod elo;
pub mod types;

pub use elo::{calculate_elo, expected_score};
pub use types::{AnnotatedGame, EloResult, RatingChange, Standing};
