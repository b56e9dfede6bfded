//! Wordle Game
//!
//! A single-player Wordle game engine: random word selection, duplicate-aware
//! per-letter scoring, attempt tracking, and persisted per-player history.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::game::{GameSession, GuessOutcome};
//! use wordle_game::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane"]);
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = GameSession::new(&words, &mut rng).unwrap();
//!
//! let outcome = session.submit_guess("crane").unwrap();
//! assert!(matches!(outcome, GuessOutcome::Scored { won: true, .. }));
//! ```

// Core domain types
pub mod core;

// Guess evaluation engine
pub mod game;

// Persisted player progress
pub mod progress;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
