//! Read-only view of a game for presentation layers

use super::GameStatus;
use crate::core::{Feedback, KeyboardHints, Word};
use serde::Serialize;

/// One submitted guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Owned copy of everything a front end may show
///
/// The target only appears once the game is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub message: Option<String>,
    pub rows: Vec<BoardRow>,
    pub hints: KeyboardHints,
    pub current_input: String,
    pub attempts_used: usize,
    pub attempts_remaining: usize,
    pub revealed_target: Option<Word>,
}

impl GameSnapshot {
    /// Check if the game is over (won or lost)
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}
