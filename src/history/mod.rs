pub mod filter;

pub use filter::{build_history, HistoryGroup, HistoryView, ModeFilter};
