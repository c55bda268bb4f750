//! The set of words the game accepts

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Word picked when there is nothing else to pick from
pub const DEFAULT_TARGET: Word = match Word::from_ascii(*b"APPLE") {
    Some(word) => word,
    None => panic!("default target must be a valid word"),
};

/// Immutable dictionary of valid words
///
/// Used both to draw targets and to validate guesses. Duplicate entries
/// collapse to one, so every word is equally likely to be drawn.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| lookup.insert(*word))
            .collect();

        Self { words, lookup }
    }

    /// Single-word dictionary used in degraded mode
    #[must_use]
    pub fn fallback() -> Self {
        Self::new([DEFAULT_TARGET])
    }

    /// Check if a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Check a raw string, in any case
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Draw a word uniformly at random
    ///
    /// Returns `None` only when the dictionary is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
