//! Keyboard hints
//!
//! Aggregates the best feedback seen for each letter across all guesses,
//! for coloring an on-screen keyboard.

use super::{Feedback, LetterFeedback, Word};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Best-known feedback per letter
///
/// Precedence is Correct > Present > Absent. A hint never gets weaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyboardHints {
    letters: FxHashMap<char, LetterFeedback>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scored guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (letter, &value) in guess.letters().zip(feedback.values()) {
            self.merge(letter, value);
        }
    }

    /// Merge a single letter observation, keeping the stronger value
    pub fn merge(&mut self, letter: char, value: LetterFeedback) {
        self.letters
            .entry(letter.to_ascii_uppercase())
            .and_modify(|current| *current = (*current).max(value))
            .or_insert(value);
    }

    /// Hint for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Hint for a letter, or `fallback` if it has not been guessed yet
    ///
    /// ```
    /// use guess_the_word::core::{KeyboardHints, LetterFeedback};
    ///
    /// let mut hints = KeyboardHints::new();
    /// hints.merge('A', LetterFeedback::Present);
    ///
    /// assert_eq!(hints.get_or('A', LetterFeedback::Absent), LetterFeedback::Present);
    /// assert_eq!(hints.get_or('Q', LetterFeedback::Absent), LetterFeedback::Absent);
    /// ```
    #[must_use]
    pub fn get_or(&self, letter: char, fallback: LetterFeedback) -> LetterFeedback {
        self.get(letter).unwrap_or(fallback)
    }

    /// Number of letters with a hint
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
