//! Formatting utilities for terminal output

use crate::core::{LetterScore, Verdict};
use colored::{ColoredString, Colorize};

/// Color one guess letter according to its score
fn color_letter(letter: char, score: LetterScore) -> ColoredString {
    let letter = letter.to_string();
    match score {
        LetterScore::Correct => letter.green().bold(),
        LetterScore::Present => letter.yellow().bold(),
        LetterScore::Absent => letter.dimmed(),
    }
}

/// Format a guess with each letter colored by its verdict
#[must_use]
pub fn colored_guess_row(guess: &str, verdict: &Verdict) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(verdict.scores())
        .map(|(ch, &score)| color_letter(ch, score).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand a stored grid string (`G`/`Y`/`-` rows) into emoji squares
#[must_use]
pub fn grid_to_emoji(grid: &str) -> String {
    grid.lines()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'G' => '🟩',
                    'Y' => '🟨',
                    _ => '⬜',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
