//! Word list check command

use crate::wordlists::{self, LoadError};
use std::path::Path;

/// Outcome of loading a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub source: String,
    pub words: usize,
}

/// Load a word list strictly and report its size
///
/// With no path the built-in list is checked.
///
/// # Errors
///
/// Returns the `LoadError` from loading the file.
pub fn check_word_list(path: Option<&Path>) -> Result<CheckReport, LoadError> {
    match path {
        Some(path) => {
            let dictionary = wordlists::load_from_file(path)?;
            Ok(CheckReport {
                source: path.display().to_string(),
                words: dictionary.len(),
            })
        }
        None => {
            let dictionary = wordlists::load_words(wordlists::WORDS)?;
            Ok(CheckReport {
                source: "built-in list".to_string(),
                words: dictionary.len(),
            })
        }
    }
}
