//! Display functions for game output

use super::formatters::{colored_guess_row, grid_to_emoji};
use crate::core::{Verdict, Word};
use crate::game::MAX_ATTEMPTS;
use crate::progress::Progress;
use colored::Colorize;

/// Print one scored guess as a colored letter row plus emoji squares
pub fn print_scored_guess(guess: &str, verdict: &Verdict) {
    println!(
        "  {}   {}\n",
        colored_guess_row(guess, verdict),
        verdict.to_emoji()
    );
}

/// Print the victory banner for a finished game
pub fn print_win_banner(attempts_used: u32) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "   🎉  Y O U   G U E S S E D   T H E   W O R D !  🎉   "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match attempts_used {
        1 => "🏆 Hole-in-one!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        5 => "👍 Solved!",
        _ => "✓ Phew, that was close!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Found in {} {}\n",
        attempts_used.to_string().bright_cyan().bold(),
        if attempts_used == 1 { "guess" } else { "guesses" }
    );
}

/// Print the loss message, revealing the secret word
pub fn print_game_over(secret: &Word) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Game over! No attempts left.".red().bold());
    println!("The word was: {}\n", secret.text().bright_yellow().bold());
}

/// Print a player's saved game history
pub fn print_history(progress: &Progress) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "History for {}",
        progress.player_name.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if progress.game_history.is_empty() {
        println!("\nNo games recorded yet.\n");
        return;
    }

    for (i, result) in progress.game_history.iter().enumerate() {
        let outcome = if result.won() {
            "won".green().bold()
        } else {
            "lost".red().bold()
        };

        println!(
            "\n{}. {} - {} in {}/{} attempts ({})",
            i + 1,
            result.chosen_word.bright_white().bold(),
            outcome,
            result.attempts,
            MAX_ATTEMPTS,
            result.timestamp.format("%Y-%m-%d %H:%M")
        );

        for line in grid_to_emoji(&result.game_grid).lines() {
            println!("   {line}");
        }
    }

    println!(
        "\n{} games played, {} won\n",
        progress.games_played(),
        progress.games_won()
    );
}
