//! Interactive game in the terminal
//!
//! A line-oriented front end: each line is a whole guess or a command. Letters
//! go through the engine one at a time, the same way an on-screen keyboard
//! would feed them.

use crate::game::{GameEngine, SubmitOutcome};
use crate::output::{print_alert, print_board, print_keyboard, print_summary};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    NewGame,
    Help,
    Guess(String),
    Empty,
}

impl PlayCommand {
    /// Interpret a line of input
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewGame,
            ":h" | ":help" | "?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the interactive game until the player quits
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<R: Rng>(engine: &mut GameEngine<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║             Guess the Word                   ║");
    println!("╚══════════════════════════════════════════════╝\n");
    print_help();

    loop {
        let snapshot = engine.snapshot();
        print_board(&snapshot);
        print_keyboard(&snapshot);

        let Some(line) = read_line("Guess")? else {
            return Ok(());
        };

        match PlayCommand::parse(&line) {
            PlayCommand::Empty => {}
            PlayCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayCommand::NewGame => {
                engine.start_new_game();
                println!("\n🔄 New game started!");
            }
            PlayCommand::Help => print_help(),
            PlayCommand::Guess(guess) => {
                if !play_guess(engine, &guess)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Feed one guess through the engine; returns `false` when the player is done
fn play_guess<R: Rng>(engine: &mut GameEngine<R>, guess: &str) -> Result<bool> {
    if guess.chars().count() != crate::core::WORD_LENGTH {
        println!("{}", "Word must be exactly 5 letters!".red());
        return Ok(true);
    }

    while engine.delete_last_letter().is_some() {}
    for letter in guess.chars() {
        engine.append_letter(letter);
    }

    match engine.submit_current() {
        SubmitOutcome::Ignored => {
            println!("{}", "Use letters A-Z only.".red());
            while engine.delete_last_letter().is_some() {}
            Ok(true)
        }
        SubmitOutcome::InvalidWord => {
            print_alert(&engine.snapshot(), engine.language());
            engine.dismiss_alert();
            Ok(true)
        }
        SubmitOutcome::Scored { status, .. } if status.is_terminal() => {
            let snapshot = engine.snapshot();
            print_board(&snapshot);
            print_alert(&snapshot, engine.language());
            print_summary(&snapshot);

            let again = read_line("Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                engine.start_new_game();
                println!("\n🔄 New game started!");
                Ok(true)
            } else {
                Ok(false)
            }
        }
        SubmitOutcome::Scored { .. } => Ok(true),
    }
}

fn print_help() {
    println!("Guess the hidden five-letter word in six tries.");
    println!("  {} right letter, right spot", " G ".black().on_green());
    println!("  {} in the word, wrong spot", " Y ".black().on_yellow());
    println!("  {} not in the word", " - ".white().on_bright_black());
    println!("Commands: ':new' new game, ':help' this text, ':quit' exit\n");
}

/// Prompt and read one line; `None` at end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
