//! Game engine
//!
//! Owns the target word, the board and the keyboard hints, and is the only
//! place where guesses are scored and games are won or lost.

use super::snapshot::{BoardRow, GameSnapshot};
use super::{GameStatus, Language};
use crate::core::{Feedback, KeyboardHints, WORD_LENGTH, Word};
use crate::wordlists::{DEFAULT_TARGET, Dictionary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: the game is over or the input was not a full word
    Ignored,
    /// The word is not in the dictionary; no attempt was used
    InvalidWord,
    /// The guess was recorded
    Scored {
        feedback: Feedback,
        status: GameStatus,
    },
}

/// Single-player game state machine
///
/// Generic over the random source so games can be replayed from a seed.
///
/// # Examples
/// ```
/// use guess_the_word::game::{GameEngine, GameStatus, SubmitOutcome};
/// use guess_the_word::wordlists::load_words;
///
/// let dictionary = load_words(["crane"]).unwrap();
/// let mut engine = GameEngine::seeded(dictionary, 1);
///
/// assert_eq!(engine.submit_guess("QWERT"), SubmitOutcome::InvalidWord);
/// assert_eq!(engine.attempts_used(), 0);
///
/// engine.dismiss_alert();
/// for letter in "crane".chars() {
///     engine.append_letter(letter);
/// }
/// engine.submit_current();
/// assert_eq!(engine.status(), GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    dictionary: Dictionary,
    rng: R,
    language: Language,
    target: Word,
    guesses: Vec<Word>,
    feedback: Vec<Feedback>,
    hints: KeyboardHints,
    input: String,
    status: GameStatus,
    message: Option<String>,
}

impl GameEngine<StdRng> {
    /// Engine with a reproducible sequence of targets
    #[must_use]
    pub fn seeded(dictionary: Dictionary, seed: u64) -> Self {
        Self::new(dictionary, StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system
    #[must_use]
    pub fn from_os_rng(dictionary: Dictionary) -> Self {
        Self::new(dictionary, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and start the first game
    ///
    /// An empty dictionary is replaced by [`Dictionary::fallback`] so the game
    /// stays playable.
    pub fn new(dictionary: Dictionary, rng: R) -> Self {
        let dictionary = if dictionary.is_empty() {
            warn!(target_word = %DEFAULT_TARGET, "empty dictionary, falling back to a single word");
            Dictionary::fallback()
        } else {
            dictionary
        };

        let mut engine = Self {
            dictionary,
            rng,
            language: Language::default(),
            target: DEFAULT_TARGET,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            feedback: Vec::with_capacity(MAX_ATTEMPTS),
            hints: KeyboardHints::new(),
            input: String::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            message: None,
        };
        engine.start_new_game();
        engine
    }

    /// Set the language of result messages
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Draw a new target and reset the board
    pub fn start_new_game(&mut self) {
        // `new` never keeps an empty dictionary, so a word is always drawn
        self.target = self
            .dictionary
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_TARGET);

        self.guesses.clear();
        self.feedback.clear();
        self.hints.clear();
        self.input.clear();
        self.status = GameStatus::Playing;
        self.message = None;

        debug!(words = self.dictionary.len(), "new game started");
        trace!(target_word = %self.target, "target chosen");
    }

    /// Type a letter into the current input
    ///
    /// Ignored once the game is over, when the input is full, or when `letter`
    /// is not an ASCII letter. Returns whether the letter was added.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input() || self.input.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter, if any
    pub fn delete_last_letter(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Submit the current input if it holds a full word
    ///
    /// The input is cleared whenever a submission is made, including one that
    /// turns out not to be in the dictionary.
    pub fn submit_current(&mut self) -> SubmitOutcome {
        if self.input.len() != WORD_LENGTH {
            return SubmitOutcome::Ignored;
        }
        let guess = std::mem::take(&mut self.input);
        self.submit_guess(&guess)
    }

    /// Submit a guess
    ///
    /// Words outside the dictionary set [`GameStatus::InvalidWord`] without
    /// using an attempt. Valid words are scored, recorded and checked for a
    /// win or a loss. Any typed input is discarded.
    pub fn submit_guess(&mut self, guess: &str) -> SubmitOutcome {
        if self.is_finished() {
            debug!(status = ?self.status, "guess after game over ignored");
            return SubmitOutcome::Ignored;
        }
        self.input.clear();

        let upper = guess.to_uppercase();
        if !self.dictionary.contains_str(&upper) {
            debug!(guess = %upper, "word not in dictionary");
            self.status = GameStatus::InvalidWord;
            self.message = Some(self.language.word_not_found(&upper));
            return SubmitOutcome::InvalidWord;
        }

        let Ok(word) = Word::new(&upper) else {
            return SubmitOutcome::Ignored;
        };

        let feedback = Feedback::score(&word, &self.target);
        self.guesses.push(word);
        self.feedback.push(feedback);
        self.hints.record(&word, &feedback);

        if word == self.target {
            self.status = GameStatus::Won;
            self.message = Some(self.language.won());
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = Some(self.language.lost(&self.target));
        } else {
            self.status = GameStatus::Playing;
            self.message = None;
        }

        debug!(
            guess = %word,
            feedback = %feedback.to_code(),
            attempt = self.guesses.len(),
            status = ?self.status,
            "guess scored"
        );

        SubmitOutcome::Scored {
            feedback,
            status: self.status,
        }
    }

    /// Acknowledge an invalid-word alert and return to play
    pub fn dismiss_alert(&mut self) {
        if self.status == GameStatus::InvalidWord {
            self.status = GameStatus::Playing;
            self.message = None;
        }
    }
}

impl<R> GameEngine<R> {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Message for the current status, if it has one
    #[must_use]
    pub fn result_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Feedback rows, parallel to [`Self::guesses`]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    #[must_use]
    pub const fn keyboard_hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Letters typed so far for the next guess
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Check if the game is over (won or lost)
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if typing and submitting are currently accepted
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.is_finished()
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The target, once the game is lost
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        (self.status == GameStatus::Lost).then_some(&self.target)
    }

    /// Copy of the observable state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            message: self.message.clone(),
            rows: self
                .guesses
                .iter()
                .zip(&self.feedback)
                .map(|(&guess, &feedback)| BoardRow { guess, feedback })
                .collect(),
            hints: self.hints.clone(),
            current_input: self.input.clone(),
            attempts_used: self.attempts_used(),
            attempts_remaining: self.attempts_remaining(),
            revealed_target: self.revealed_target().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::wordlists::load_words;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    const WORDS: [&str; 10] = [
        "SPEED", "ERASE", "CRANE", "SLATE", "AUDIO", "ROBOT", "FLOOR", "HELLO", "LLAMA", "SKILL",
    ];

    /// Engine with a known target
    fn engine_with_target(target: &str) -> GameEngine {
        let mut engine = GameEngine::seeded(load_words(WORDS).unwrap(), 3);
        engine.target = Word::new(target).unwrap();
        engine
    }

    fn type_word(engine: &mut GameEngine, word: &str) {
        for letter in word.chars() {
            engine.append_letter(letter);
        }
    }

    #[test]
    fn new_engine_is_playing() {
        let engine = GameEngine::seeded(load_words(WORDS).unwrap(), 1);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.attempts_used(), 0);
        assert_eq!(engine.attempts_remaining(), MAX_ATTEMPTS);
        assert!(engine.dictionary().contains(&engine.target));
        assert_eq!(engine.result_message(), None);
    }

    #[test]
    #[traced_test]
    fn empty_dictionary_falls_back() {
        let mut engine = GameEngine::seeded(Dictionary::default(), 1);
        assert_eq!(engine.target, DEFAULT_TARGET);
        assert_eq!(engine.dictionary().len(), 1);

        let outcome = engine.submit_guess("apple");
        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                feedback: Feedback::PERFECT,
                status: GameStatus::Won
            }
        );
        assert!(logs_contain("empty dictionary, falling back to a single word"));
    }

    #[test]
    fn same_seed_same_targets() {
        let mut a = GameEngine::seeded(load_words(WORDS).unwrap(), 99);
        let mut b = GameEngine::seeded(load_words(WORDS).unwrap(), 99);
        for _ in 0..5 {
            assert_eq!(a.target, b.target);
            a.start_new_game();
            b.start_new_game();
        }
    }

    #[test]
    fn duplicate_letters_scored_from_engine() {
        let mut engine = engine_with_target("SPEED");
        let outcome = engine.submit_guess("erase");
        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                feedback: Feedback::new([Present, Absent, Absent, Present, Present]),
                status: GameStatus::Playing
            }
        );
        assert_eq!(engine.guesses(), &[Word::new("ERASE").unwrap()]);
        assert_eq!(engine.feedback().len(), 1);
    }

    #[test]
    fn correct_guess_wins() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("slate");
        let outcome = engine.submit_guess("CRANE");

        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                feedback: Feedback::PERFECT,
                status: GameStatus::Won
            }
        );
        assert!(engine.is_finished());
        assert_eq!(engine.result_message(), Some("🎉 Well done! You guessed it!"));
        assert_eq!(engine.revealed_target(), None);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut engine = engine_with_target("CRANE");
        for guess in ["SPEED", "ERASE", "SLATE", "AUDIO", "ROBOT"] {
            engine.submit_guess(guess);
            assert_eq!(engine.status(), GameStatus::Playing);
        }
        engine.submit_guess("FLOOR");

        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.attempts_remaining(), 0);
        assert_eq!(engine.revealed_target().map(Word::text), Some("CRANE"));
        assert!(engine.result_message().unwrap().contains("CRANE"));
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let mut engine = engine_with_target("CRANE");
        for guess in ["SPEED", "ERASE", "SLATE", "AUDIO", "ROBOT"] {
            engine.submit_guess(guess);
        }
        engine.submit_guess("CRANE");
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("CRANE");

        assert_eq!(engine.submit_guess("SLATE"), SubmitOutcome::Ignored);
        assert!(!engine.append_letter('A'));
        assert_eq!(engine.attempts_used(), 1);
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn invalid_word_uses_no_attempt() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("SLATE");

        let before = engine.snapshot();
        let outcome = engine.submit_guess("qwert");

        assert_eq!(outcome, SubmitOutcome::InvalidWord);
        assert_eq!(engine.status(), GameStatus::InvalidWord);
        assert_eq!(engine.attempts_used(), 1);
        assert_eq!(
            engine.guesses().to_vec(),
            before.rows.iter().map(|r| r.guess).collect::<Vec<_>>()
        );
        assert_eq!(engine.keyboard_hints(), &before.hints);
        assert_eq!(
            engine.result_message(),
            Some("❌ The word \"QWERT\" does not exist!")
        );
    }

    #[test]
    fn wrong_length_guess_is_invalid_word() {
        let mut engine = engine_with_target("CRANE");
        assert_eq!(engine.submit_guess("CRAN"), SubmitOutcome::InvalidWord);
        assert_eq!(engine.submit_guess("CRANES"), SubmitOutcome::InvalidWord);
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn dismiss_alert_returns_to_playing() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("QWERT");
        engine.dismiss_alert();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.result_message(), None);
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn dismiss_alert_does_not_leave_terminal_states() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("CRANE");
        engine.dismiss_alert();
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn valid_guess_after_invalid_clears_alert() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("QWERT");
        engine.submit_guess("SLATE");

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.result_message(), None);
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn typing_and_deleting() {
        let mut engine = engine_with_target("CRANE");
        assert_eq!(engine.delete_last_letter(), None);
        assert_eq!(engine.current_input(), "");

        type_word(&mut engine, "cranes");
        assert_eq!(engine.current_input(), "CRANE");

        assert_eq!(engine.delete_last_letter(), Some('E'));
        assert_eq!(engine.current_input(), "CRAN");

        assert!(!engine.append_letter('1'));
        assert!(!engine.append_letter('é'));
        assert_eq!(engine.current_input(), "CRAN");
    }

    #[test]
    fn submit_current_requires_full_word() {
        let mut engine = engine_with_target("CRANE");
        type_word(&mut engine, "CRA");

        assert_eq!(engine.submit_current(), SubmitOutcome::Ignored);
        assert_eq!(engine.current_input(), "CRA");
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn submit_current_clears_input_even_when_invalid() {
        let mut engine = engine_with_target("CRANE");
        type_word(&mut engine, "QWERT");
        assert_eq!(engine.submit_current(), SubmitOutcome::InvalidWord);
        assert_eq!(engine.current_input(), "");

        type_word(&mut engine, "SLATE");
        assert!(matches!(
            engine.submit_current(),
            SubmitOutcome::Scored { .. }
        ));
        assert_eq!(engine.current_input(), "");
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn direct_submission_discards_typed_input() {
        let mut engine = GameEngine::seeded(load_words(["crane"]).unwrap(), 1);
        type_word(&mut engine, "SL");

        engine.submit_guess("CRANE");
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_input(), "");
        assert_eq!(engine.snapshot().current_input, "");
    }

    #[test]
    fn invalid_direct_submission_discards_typed_input() {
        let mut engine = engine_with_target("CRANE");
        type_word(&mut engine, "SLA");

        assert_eq!(engine.submit_guess("QWERT"), SubmitOutcome::InvalidWord);
        assert_eq!(engine.current_input(), "");
    }

    #[test]
    fn keyboard_hints_follow_guesses() {
        let mut engine = engine_with_target("SPEED");
        engine.submit_guess("SLATE");
        assert_eq!(engine.keyboard_hints().get('S'), Some(Correct));
        assert_eq!(engine.keyboard_hints().get('E'), Some(Present));
        assert_eq!(engine.keyboard_hints().get('L'), Some(Absent));

        engine.submit_guess("ERASE");
        assert_eq!(engine.keyboard_hints().get('S'), Some(Correct));
        assert_eq!(engine.keyboard_hints().get('E'), Some(Present));
    }

    #[test]
    fn start_new_game_resets_everything() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("SLATE");
        engine.submit_guess("CRANE");
        type_word(&mut engine, "AB");
        assert_eq!(engine.status(), GameStatus::Won);

        engine.start_new_game();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.message, None);
        assert!(snapshot.rows.is_empty());
        assert!(snapshot.hints.is_empty());
        assert_eq!(snapshot.current_input, "");
        assert_eq!(snapshot.attempts_remaining, MAX_ATTEMPTS);
    }

    #[test]
    fn snapshot_hides_target_until_lost() {
        let mut engine = engine_with_target("CRANE");
        engine.submit_guess("SLATE");
        assert_eq!(engine.snapshot().revealed_target, None);

        for guess in ["SPEED", "ERASE", "AUDIO", "ROBOT", "FLOOR"] {
            engine.submit_guess(guess);
        }
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.revealed_target, Word::new("CRANE").ok());
        assert_eq!(snapshot.rows.len(), MAX_ATTEMPTS);
        assert!(snapshot.is_finished());
    }

    #[test]
    fn snapshot_rows_pair_guesses_with_feedback() {
        let mut engine = engine_with_target("FLOOR");
        engine.submit_guess("ROBOT");

        let rows = engine.snapshot().rows;
        assert_eq!(
            rows,
            vec![BoardRow {
                guess: Word::new("ROBOT").unwrap(),
                feedback: Feedback::new([Present, Present, Absent, Correct, Absent]),
            }]
        );
    }

    #[test]
    fn hebrew_messages() {
        let mut engine = engine_with_target("CRANE").with_language(Language::Hebrew);
        engine.submit_guess("CRANE");
        assert_eq!(engine.language(), Language::Hebrew);
        assert_eq!(engine.result_message(), Some("🎉 כל הכבוד! ניחשת נכון!"));
    }
}
