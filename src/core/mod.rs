//! Core domain types for the game
//!
//! Words, guess scoring and keyboard hints. Everything here is pure and has no
//! notion of turns or game state.

mod feedback;
mod hints;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use hints::KeyboardHints;
pub use word::{WORD_LENGTH, Word, WordError};
