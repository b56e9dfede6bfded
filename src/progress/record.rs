//! Player progress records
//!
//! A `Progress` record accumulates one `GameResult` per finished game. Field
//! names serialize in camelCase to match the on-disk JSON format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Verdict;
use crate::game::GameSession;

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// The secret word of the game
    pub chosen_word: String,
    /// Attempts used when the game ended
    pub attempts: u32,
    /// Newline-joined verdict rows (`G` correct, `Y` present, `-` absent)
    pub game_grid: String,
    /// When the game finished
    pub timestamp: DateTime<Utc>,
}

impl GameResult {
    /// Record a finished session, stamping the current time
    #[must_use]
    pub fn from_session(session: &GameSession, game_grid: String) -> Self {
        Self {
            chosen_word: session.secret().text().to_string(),
            attempts: session.attempts_used(),
            game_grid,
            timestamp: Utc::now(),
        }
    }

    /// True if the recorded game ended in a win
    ///
    /// Derived from the grid: the last row of a won game is all-Correct.
    #[must_use]
    pub fn won(&self) -> bool {
        self.game_grid
            .lines()
            .next_back()
            .is_some_and(|row| !row.is_empty() && row.chars().all(|c| c == 'G'))
    }
}

/// A player's cumulative game history
///
/// Append-only; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Storage key: one record per player name
    pub player_name: String,
    #[serde(default)]
    pub game_history: Vec<GameResult>,
}

impl Progress {
    /// Create an empty record bound to a player name
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            game_history: Vec::new(),
        }
    }

    /// Append a finished game, preserving chronological order
    pub fn append_result(&mut self, result: GameResult) {
        self.game_history.push(result);
    }

    /// Number of recorded games
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.game_history.len()
    }

    /// Number of recorded wins
    #[must_use]
    pub fn games_won(&self) -> usize {
        self.game_history.iter().filter(|r| r.won()).count()
    }
}

/// Accumulates verdict rows into the grid string stored in `GameResult`
#[derive(Debug, Default)]
pub struct GridBuilder {
    rows: Vec<String>,
}

impl GridBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scored guess as a row
    pub fn push(&mut self, verdict: &Verdict) {
        self.rows.push(verdict.as_row());
    }

    /// Finish the grid: rows joined by newlines, oldest first
    #[must_use]
    pub fn finish(self) -> String {
        self.rows.join("\n")
    }
}
