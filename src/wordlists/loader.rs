//! Word list loading utilities
//!
//! A word list is a flat JSON array of 5-letter strings in any case:
//!
//! ```json
//! ["apple", "Board", "CHAIR"]
//! ```

use super::Dictionary;
use crate::core::{Word, WordError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word list is empty")]
    Empty,
    #[error("entry {index} ({word:?}) is not a valid word: {source}")]
    Malformed {
        index: usize,
        word: String,
        #[source]
        source: WordError,
    },
}

/// Validate a list of words and build a dictionary from it
///
/// Every entry must be a 5-letter alphabetic word. Case is normalized.
///
/// # Errors
///
/// Returns `LoadError::Empty` for an empty list and `LoadError::Malformed` for
/// the first entry that is not a valid word.
///
/// # Examples
/// ```
/// use guess_the_word::wordlists::load_words;
///
/// let dictionary = load_words(["apple", "Board", "CHAIR"]).unwrap();
/// assert_eq!(dictionary.len(), 3);
/// assert!(dictionary.contains_str("BOARD"));
///
/// assert!(load_words(["apple", "pear"]).is_err());
/// ```
pub fn load_words<I, S>(list: I) -> Result<Dictionary, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = list
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            Word::new(entry).map_err(|source| LoadError::Malformed {
                index,
                word: entry.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Dictionary::new(words))
}

/// Parse a JSON word list
///
/// # Errors
///
/// Returns `LoadError::Json` if the text is not an array of strings, otherwise
/// any error from [`load_words`].
pub fn parse_json(json: &str) -> Result<Dictionary, LoadError> {
    let list: Vec<String> = serde_json::from_str(json)?;
    load_words(list)
}

/// Load a JSON word list from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise any error
/// from [`parse_json`].
///
/// # Examples
/// ```no_run
/// use guess_the_word::wordlists::load_from_file;
///
/// let dictionary = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = parse_json(&content)?;
    debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
    Ok(dictionary)
}

/// Convert an embedded string slice to a dictionary, skipping invalid entries
///
/// # Examples
/// ```
/// use guess_the_word::wordlists::{WORDS, words_from_slice};
///
/// let dictionary = words_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
}
