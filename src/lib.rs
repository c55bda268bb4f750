//! Guess the Word
//!
//! A five-letter word guessing game: six attempts, per-letter feedback, and a
//! scoring rule that handles repeated letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_the_word::game::{GameEngine, GameStatus};
//! use guess_the_word::wordlists::builtin;
//!
//! let mut engine = GameEngine::seeded(builtin(), 7);
//! engine.submit_guess("crane");
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.rows.len(), 1);
//! assert_ne!(snapshot.status, GameStatus::InvalidWord);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and the dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
