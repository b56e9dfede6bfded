//! Player history report

use crate::output::print_history;
use crate::progress::ProgressStore;

/// Print the saved history for a player
///
/// A player with no saved file gets an empty report, not an error.
///
/// # Errors
///
/// Returns an error if the player's progress file exists but cannot be read
/// or parsed.
pub fn run_stats(store: &ProgressStore, player: &str) -> Result<(), String> {
    let progress = store.load(player).map_err(|e| e.to_string())?;
    print_history(&progress);
    Ok(())
}
