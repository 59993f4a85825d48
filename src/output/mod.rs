//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_keyboard, print_round_over, print_score, print_statistics};
