//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardHints, LetterFeedback, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a feedback row as emoji
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .values()
        .iter()
        .map(|value| match value {
            LetterFeedback::Correct => '🟩',
            LetterFeedback::Present => '🟨',
            LetterFeedback::Absent => '⬜',
        })
        .collect()
}

/// A single letter tile, colored by its feedback
///
/// `None` is an untouched tile (typed input or an unused key).
#[must_use]
pub fn tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(LetterFeedback::Correct) => text.black().on_green().bold(),
        Some(LetterFeedback::Present) => text.black().on_yellow().bold(),
        Some(LetterFeedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .zip(feedback.values())
        .map(|(letter, &value)| tile(letter, Some(value)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The in-progress guess, padded with blanks to a full row
#[must_use]
pub fn input_row(input: &str) -> String {
    input
        .chars()
        .chain(std::iter::repeat('_'))
        .take(WORD_LENGTH)
        .map(|letter| tile(letter, None).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows colored by the hints gathered so far
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys = row
                .chars()
                .map(|letter| tile(letter, hints.get(letter)).to_string())
                .collect::<Vec<_>>()
                .join("");
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Attempts as a bar of filled and empty squares
#[must_use]
pub fn attempts_bar(used: usize, total: usize) -> String {
    let used = used.min(total);
    format!("{}{}", "■".repeat(used), "□".repeat(total - used))
}
