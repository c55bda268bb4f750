//! Guess scoring
//!
//! Each position of a guess is classified against the target:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the target
//! - Absent: letter does not occur (or every occurrence is already accounted for)

use super::Word;
use super::word::WORD_LENGTH;
use serde::Serialize;
use std::ops::Index;

/// Feedback for a single letter of a guess
///
/// Ordered by strength, so `max` picks the better hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Single-character code: `G` correct, `Y` present, `-` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback row for a whole guess, positionally aligned with its letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Build a row from explicit values
    #[must_use]
    pub const fn new(values: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(values)
    }

    /// Score `guess` against `target`
    ///
    /// Exact-position matches consume the target's letter counts before any
    /// `Present` is handed out, so repeated letters are never over-credited.
    ///
    /// # Examples
    /// ```
    /// use guess_the_word::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let target = Word::new("SPEED").unwrap();
    /// let guess = Word::new("ERASE").unwrap();
    ///
    /// let feedback = Feedback::score(&guess, &target);
    /// assert_eq!(feedback.values(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let answer = target.chars();
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // First pass: exact matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = LetterFeedback::Correct;
                remaining[letter_index(guess[i])] -= 1;
            }
        }

        // Second pass: wrong position, drawing from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(guess[i])];
            if *count > 0 {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The five feedback values
    #[inline]
    #[must_use]
    pub const fn values(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    /// Number of present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Present)
            .count()
    }

    /// Render as a code string like `"GY-G-"`
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|f| f.code()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}
