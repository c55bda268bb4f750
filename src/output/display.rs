//! Display functions for the game and command results

use super::formatters::{attempts_bar, feedback_to_emoji, guess_row, input_row, keyboard_rows};
use crate::commands::{CheckReport, ScoreResult};
use crate::game::{GameSnapshot, GameStatus, Language, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the board: scored rows, the row being typed, then blank rows
pub fn print_board(snapshot: &GameSnapshot) {
    println!();
    for row in &snapshot.rows {
        println!("  {}", guess_row(&row.guess, &row.feedback));
    }

    let mut drawn = snapshot.rows.len();
    if !snapshot.is_finished() && drawn < MAX_ATTEMPTS {
        println!("  {}", input_row(&snapshot.current_input));
        drawn += 1;
    }
    for _ in drawn..MAX_ATTEMPTS {
        println!("  {}", input_row(""));
    }

    println!(
        "\n  Attempts: {} {}/{}",
        attempts_bar(snapshot.attempts_used, MAX_ATTEMPTS).cyan(),
        snapshot.attempts_used,
        MAX_ATTEMPTS
    );
}

/// Print the keyboard with hint colors
pub fn print_keyboard(snapshot: &GameSnapshot) {
    println!();
    for row in keyboard_rows(&snapshot.hints) {
        println!("  {row}");
    }
    println!();
}

/// Print the alert raised by the current status, if any
pub fn print_alert(snapshot: &GameSnapshot, language: Language) {
    let Some(title) = language.alert_title(snapshot.status) else {
        return;
    };
    let message = snapshot.message.as_deref().unwrap_or_default();

    let title = match snapshot.status {
        GameStatus::Won => title.bright_green().bold(),
        GameStatus::Lost => title.bright_yellow().bold(),
        // Playing raises no alert, so only InvalidWord is left
        _ => title.bright_red().bold(),
    };

    println!("\n{}", "─".repeat(50).cyan());
    println!("  {title}");
    println!("  {message}");
    println!("{}\n", "─".repeat(50).cyan());
}

/// Print the emoji summary of a finished game
pub fn print_summary(snapshot: &GameSnapshot) {
    println!("  Guess history:");
    for (i, row) in snapshot.rows.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.guess.text().bright_white().bold(),
            feedback_to_emoji(&row.feedback)
        );
    }
    println!();
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n  {}  →  {}",
        guess_row(&result.guess, &result.feedback),
        result.target.text().bright_yellow().bold()
    );
    println!(
        "  {} ({})\n",
        feedback_to_emoji(&result.feedback),
        result.feedback.to_code()
    );
}

/// Print the result of checking a word list
pub fn print_check_report(report: &CheckReport) {
    println!(
        "{} {} words loaded from {}",
        "✓".green().bold(),
        report.words.to_string().bright_cyan().bold(),
        report.source
    );
}
