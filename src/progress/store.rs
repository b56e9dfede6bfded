//! Progress persistence
//!
//! One JSON file per player under a base directory, written as a whole-file
//! overwrite. Single active writer per player name is assumed.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Progress;

/// Errors raised by progress persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a progress file failed
    #[error("progress storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A progress record could not be serialized
    #[error("failed to serialize progress: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Persisted data exists but does not parse into a progress record
    #[error("stored progress for '{player}' is malformed: {source}")]
    Deserialization {
        player: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Manages player progress files on the filesystem
///
/// ```text
/// base_dir/
/// ├── alice.json
/// └── bob.json
/// ```
#[derive(Debug, Clone)]
pub struct ProgressStore {
    base_dir: PathBuf,
}

impl ProgressStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Load the progress record for `player_name`
    ///
    /// Returns a new empty record when no file exists yet. Malformed
    /// persisted data is an error, never silently repaired.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Deserialization` if its contents do not parse.
    pub fn load(&self, player_name: &str) -> Result<Progress, StoreError> {
        let path = self.player_file(player_name);
        if !path.exists() {
            return Ok(Progress::new(player_name));
        }

        let json = fs::read_to_string(&path)?;
        serde_json::from_str(&json).map_err(|source| StoreError::Deserialization {
            player: player_name.to_string(),
            source,
        })
    }

    /// Persist a progress record, replacing any prior file for that player
    ///
    /// # Errors
    /// Returns `StoreError::Serialization` if encoding fails or
    /// `StoreError::Io` if the file cannot be written.
    pub fn save(&self, progress: &Progress) -> Result<(), StoreError> {
        let path = self.player_file(&progress.player_name);
        let json = serde_json::to_string_pretty(progress).map_err(StoreError::Serialization)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Path of the progress file for a player name
    #[must_use]
    pub fn player_file(&self, player_name: &str) -> PathBuf {
        self.base_dir.join(format!("{player_name}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::GameResult;
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_result() -> GameResult {
        GameResult {
            chosen_word: "CRANE".to_string(),
            attempts: 4,
            game_grid: "-GGYG\nGGGGG".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn load_missing_player_returns_empty_record() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        let progress = store.load("alice").unwrap();
        assert_eq!(progress.player_name, "alice");
        assert!(progress.game_history.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        let mut progress = store.load("alice").unwrap();
        progress.append_result(sample_result());
        store.save(&progress).unwrap();

        let reloaded = store.load("alice").unwrap();
        assert_eq!(reloaded, progress);
    }

    #[test]
    fn save_load_cycle_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        let mut progress = Progress::new("alice");
        progress.append_result(sample_result());
        store.save(&progress).unwrap();
        let first = fs::read(store.player_file("alice")).unwrap();

        // save(load(name)) with no intervening append changes nothing
        store.save(&store.load("alice").unwrap()).unwrap();
        store.save(&store.load("alice").unwrap()).unwrap();
        let second = fs::read(store.player_file("alice")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn save_overwrites_whole_record() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        let mut progress = Progress::new("alice");
        progress.append_result(sample_result());
        store.save(&progress).unwrap();

        progress.append_result(sample_result());
        store.save(&progress).unwrap();

        let reloaded = store.load("alice").unwrap();
        assert_eq!(reloaded.games_played(), 2);
    }

    #[test]
    fn malformed_file_is_a_deserialization_error() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        fs::write(store.player_file("alice"), "{ not json").unwrap();

        let err = store.load("alice").unwrap_err();
        assert!(matches!(err, StoreError::Deserialization { ref player, .. } if player == "alice"));
    }

    #[test]
    fn wrong_shape_is_a_deserialization_error() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        // Valid JSON, wrong structure
        fs::write(store.player_file("alice"), r#"{"gameHistory": 7}"#).unwrap();

        assert!(matches!(
            store.load("alice"),
            Err(StoreError::Deserialization { .. })
        ));
    }

    #[test]
    fn players_are_stored_independently() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).unwrap();

        let mut alice = Progress::new("alice");
        alice.append_result(sample_result());
        store.save(&alice).unwrap();
        store.save(&Progress::new("bob")).unwrap();

        assert_eq!(store.load("alice").unwrap().games_played(), 1);
        assert_eq!(store.load("bob").unwrap().games_played(), 0);
    }

    #[test]
    fn new_creates_missing_base_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("progress");
        let store = ProgressStore::new(&nested).unwrap();

        store.save(&Progress::new("alice")).unwrap();
        assert!(nested.join("alice.json").exists());
    }
}
