//! Word lists and the dictionary
//!
//! Provides the built-in word list, JSON loading for custom lists, and the
//! immutable `Dictionary` the game validates against.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{DEFAULT_TARGET, Dictionary};
pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, load_from_file, load_words, parse_json, words_from_slice};

use std::path::Path;
use tracing::{info, warn};

/// Dictionary built from the embedded word list
#[must_use]
pub fn builtin() -> Dictionary {
    words_from_slice(WORDS)
}

/// Load the dictionary for play
///
/// With no path the built-in list is used. A word list that cannot be loaded
/// is not fatal: the game runs in degraded mode on the single fallback word.
#[must_use]
pub fn load_or_fallback(path: Option<&Path>) -> Dictionary {
    let Some(path) = path else {
        return builtin();
    };

    match load_from_file(path) {
        Ok(dictionary) => {
            info!(path = %path.display(), words = dictionary.len(), "word list loaded");
            dictionary
        }
        Err(err) => {
            warn!(error = %err, "word list unavailable, playing with the fallback word only");
            Dictionary::fallback()
        }
    }
}
