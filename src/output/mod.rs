//! Terminal output formatting
//!
//! Display utilities for the game loop and history reports.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_history, print_scored_guess, print_win_banner};
