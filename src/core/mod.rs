//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O dependencies.
//! All types here are pure and directly testable.

mod verdict;
mod word;

pub use verdict::{LetterScore, Verdict};
pub use word::{Word, WordError};
