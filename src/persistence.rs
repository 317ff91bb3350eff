//! # Persistence Module
//!
//! Saving and loading [`GameState`] snapshots as pretty-printed JSON.
//!
//! Serialization goes through serde, so the on-disk layout mirrors the
//! in-memory structs field for field. Loading parses and returns whatever
//! the file holds without checking engine invariants; call
//! [`GameState::validate`] when a file should be treated as untrusted.

use crate::{GameState, GridkeepError, GridkeepResult};
use log::info;
use std::fs;
use std::path::Path;

/// Serializes the state to pretty-printed JSON and writes it to `path`,
/// replacing any existing file.
///
/// # Examples
///
/// ```no_run
/// use gridkeep::{persistence, GameState};
///
/// let state = GameState::initial();
/// persistence::save_game_state(&state, "save.json").unwrap();
/// ```
pub fn save_game_state(state: &GameState, path: impl AsRef<Path>) -> GridkeepResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(state).map_err(|source| GridkeepError::Save {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    fs::write(path, json).map_err(|source| GridkeepError::Save {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    info!("game state saved to {}", path.display());
    Ok(())
}

/// Reads `path` and deserializes a [`GameState`] from its JSON contents.
///
/// Fails with [`GridkeepError::Load`] when the file is missing, unreadable,
/// or does not parse as a state snapshot. The parse is structural only;
/// range checks such as health bounds are left to [`GameState::validate`].
pub fn load_game_state(path: impl AsRef<Path>) -> GridkeepResult<GameState> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| GridkeepError::Load {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    let state = serde_json::from_str(&json).map_err(|source| GridkeepError::Load {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    info!("game state loaded from {}", path.display());
    Ok(state)
}
