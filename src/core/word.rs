//! Game word representation
//!
//! A Word is a validated 5-letter uppercase ASCII word. Every guess that reaches
//! scoring, every dictionary entry and every target is a `Word`.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAlphabetic,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is not trimmed; callers hand in the raw entry.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use guess_the_word::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        let mut chars = [0u8; WORD_LENGTH];
        for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { chars })
    }

    /// Create a Word from raw ASCII bytes in a const context
    ///
    /// Returns `None` if any byte is not an ASCII letter.
    #[must_use]
    pub const fn from_ascii(bytes: [u8; WORD_LENGTH]) -> Option<Self> {
        let mut chars = bytes;
        let mut i = 0;
        while i < WORD_LENGTH {
            if !chars[i].is_ascii_alphabetic() {
                return None;
            }
            chars[i] = chars[i].to_ascii_uppercase();
            i += 1;
        }
        Some(Self { chars })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - constructors only store ASCII letters.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("word holds only ASCII letters")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Iterate over the letters as `char`s
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|&b| char::from(b))
    }

    /// Count of each letter in the word, indexed by `letter - b'A'`
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}
