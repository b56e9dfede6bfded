//! Persisted per-player game history
//!
//! Records and the JSON file store that holds them, keyed by player name.

mod record;
mod store;

pub use record::{GameResult, GridBuilder, Progress};
pub use store::{ProgressStore, StoreError};
