pub mod models;
pub mod validation;

pub use models::{normalize_name, sort_chronologically, Game, GameMode, DATE_FORMAT};
pub use validation::{GameValidationError, NewGame};
