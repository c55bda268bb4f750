//! Terminal output formatting
//!
//! Display utilities for the interactive game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_alert, print_board, print_check_report, print_keyboard, print_score_result,
    print_summary,
};
