//! Guess evaluation engine
//!
//! Session lifecycle and guess scoring. The word list and random source are
//! passed in by the caller; the engine holds no global state.

mod session;

pub use session::{GameError, GameSession, GuessOutcome, MAX_ATTEMPTS, SessionState};
