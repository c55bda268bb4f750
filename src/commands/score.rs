//! Score command
//!
//! Scores one guess against a target without playing a game.

use crate::core::{Feedback, Word, WordError};
use serde::Serialize;

/// Result of scoring a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Neither word has to be in a dictionary.
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(ScoreResult {
        guess,
        target,
        feedback: Feedback::score(&guess, &target),
    })
}
