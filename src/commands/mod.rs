//! Command implementations

pub mod check;
pub mod play;
pub mod score;

pub use check::{CheckReport, check_word_list};
pub use play::{PlayCommand, run_play};
pub use score::{ScoreResult, score_words};
