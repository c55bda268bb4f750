//! Guess the Word - CLI
//!
//! Play in the terminal, score single guesses, or check a word list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_the_word::{
    commands::{check_word_list, run_play, score_words},
    game::{GameEngine, Language},
    logging::init_tracing,
    output::{print_check_report, print_score_result},
    wordlists,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guess_the_word",
    about = "Guess the hidden five-letter word in six tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a JSON array of five-letter words (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Language of game messages
    #[arg(short, long, global = true, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Seed for a reproducible sequence of target words
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load the word list and report how many words it holds
    Check,
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = wordlists::load_or_fallback(cli.words.as_deref());
            let mut engine = match cli.seed {
                Some(seed) => GameEngine::seeded(dictionary, seed),
                None => GameEngine::from_os_rng(dictionary),
            }
            .with_language(cli.language);
            run_play(&mut engine)
        }
        Commands::Score {
            guess,
            target,
            json,
        } => {
            let result = score_words(&guess, &target)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_score_result(&result);
            }
            Ok(())
        }
        Commands::Check => {
            let report = check_word_list(cli.words.as_deref())?;
            print_check_report(&report);
            Ok(())
        }
    }
}
