//! Game status and the player-facing messages that go with it

use crate::core::Word;
use serde::Serialize;

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameStatus {
    /// Waiting for the next guess
    #[default]
    Playing,
    /// The target was guessed
    Won,
    /// All attempts used without guessing the target
    Lost,
    /// The last submission was not in the dictionary
    ///
    /// Recoverable: no attempt was used and the board is untouched.
    InvalidWord,
}

impl GameStatus {
    /// Won or Lost. Only a new game leaves these.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Language for result messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum Language {
    #[default]
    English,
    Hebrew,
}

impl Language {
    /// Message shown when a guess is not in the dictionary
    #[must_use]
    pub fn word_not_found(self, guess: &str) -> String {
        match self {
            Self::English => format!("❌ The word \"{guess}\" does not exist!"),
            Self::Hebrew => format!("❌ המילה \"{guess}\" לא קיימת!"),
        }
    }

    /// Message shown when the target is guessed
    #[must_use]
    pub fn won(self) -> String {
        match self {
            Self::English => "🎉 Well done! You guessed it!".to_string(),
            Self::Hebrew => "🎉 כל הכבוד! ניחשת נכון!".to_string(),
        }
    }

    /// Message shown when attempts run out, revealing the target
    #[must_use]
    pub fn lost(self, target: &Word) -> String {
        match self {
            Self::English => format!("😞 You lost! The word was {target}"),
            Self::Hebrew => format!("😞 הפסדת! המילה הייתה {target}"),
        }
    }

    /// Title for the alert raised by a status, if it raises one
    #[must_use]
    pub const fn alert_title(self, status: GameStatus) -> Option<&'static str> {
        let title = match (self, status) {
            (_, GameStatus::Playing) => return None,
            (Self::English, GameStatus::InvalidWord) => "Error",
            (Self::English, GameStatus::Won) => "🎉 Victory!",
            (Self::English, GameStatus::Lost) => "😞 You lost",
            (Self::Hebrew, GameStatus::InvalidWord) => "שגיאה",
            (Self::Hebrew, GameStatus::Won) => "🎉 ניצחון!",
            (Self::Hebrew, GameStatus::Lost) => "😞 הפסדת",
        };
        Some(title)
    }
}
