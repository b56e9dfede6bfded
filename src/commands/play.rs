//! Interactive play mode
//!
//! Text-based game loop: prompt for guesses, render verdicts, and record
//! finished games to the player's progress file.

use crate::core::Word;
use crate::game::{GameError, GameSession, GuessOutcome, MAX_ATTEMPTS, SessionState};
use crate::output::{print_game_over, print_scored_guess, print_win_banner};
use crate::progress::{GameResult, GridBuilder, ProgressStore};
use std::io::{self, Write};

/// Run the interactive play mode
///
/// Plays games until the player quits. When both a store and a player name
/// are given, every finished game is appended to that player's history and
/// saved; otherwise results are discarded.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// progress store fails to load or save.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(
    words: &[Word],
    store: Option<&ProgressStore>,
    player: Option<&str>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Terminal Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("After each guess every letter is scored:\n");
    println!("  - 🟩 right letter, right position");
    println!("  - 🟨 right letter, wrong position");
    println!("  - ⬜ letter not in the word\n");
    println!("Commands: 'quit' to exit\n");

    match player {
        Some(name) => println!("Playing as {name} - finished games are saved.\n"),
        None => println!("No player name given - results will not be saved.\n"),
    }

    loop {
        let mut session =
            GameSession::new(words, &mut rand::rng()).map_err(|e| e.to_string())?;
        let mut grid = GridBuilder::new();

        println!("A new word has been chosen. Good luck!\n");

        let won = loop {
            let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts_used() + 1);
            let input = get_user_input(&prompt)?;

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            match session.submit_guess(&input) {
                Ok(GuessOutcome::Scored { verdict, won }) => {
                    grid.push(&verdict);
                    print_scored_guess(&input, &verdict);

                    if won {
                        break true;
                    }
                    if session.state() == SessionState::Exhausted {
                        break false;
                    }
                }
                // Every game starts from a fresh session, so a terminal
                // answer here only ends the inner loop
                Ok(GuessOutcome::Exhausted) => break false,
                Err(GameError::InvalidGuess(e)) => {
                    println!("❌ {e}. Try again!\n");
                }
                Err(e) => return Err(e.to_string()),
            }
        };

        if won {
            print_win_banner(session.attempts_used());
        } else {
            print_game_over(session.secret());
        }

        if let (Some(store), Some(player)) = (store, player) {
            let result = GameResult::from_session(&session, grid.finish());
            let mut progress = store.load(player).map_err(|e| e.to_string())?;
            progress.append_result(result);
            store.save(&progress).map_err(|e| e.to_string())?;

            println!(
                "💾 Saved to {player}'s history ({} games on record).\n",
                progress.games_played()
            );
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
