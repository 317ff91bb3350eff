//! # Gridkeep
//!
//! A minimal grid-based game state engine with validated mutations and
//! JSON save/load.
//!
//! ## Architecture Overview
//!
//! Gridkeep keeps the whole game world in a single owned snapshot and only
//! ever changes it through a small validated API:
//!
//! - **Game State**: one [`GameState`] aggregate holding the world bounds,
//!   the player, the item table, and the environment objects
//! - **State Manager**: a [`StateManager`] owns the live state and exposes
//!   the mutation operations; every operation validates before it mutates,
//!   so a failed call never leaves a partial update behind
//! - **Persistence**: flat-file JSON save/load in [`persistence`]
//!
//! The demo binary constructs a fresh state, applies a fixed sequence of
//! operations, saves and reloads the result, and prints a snapshot after
//! each step.

pub mod game;
pub mod persistence;

pub use game::*;
pub use persistence::*;

use std::path::PathBuf;

/// Core error type for the gridkeep engine.
///
/// Domain validation failures are fail-fast: the operation that produced
/// them has not touched the game state. Persistence failures carry their
/// underlying I/O or JSON cause as a `source`.
#[derive(thiserror::Error, Debug)]
pub enum GridkeepError {
    /// Movement target lies outside the world bounds.
    #[error("invalid move: position ({x}, {y}) is outside world bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// No item with the given id exists.
    #[error("item '{0}' does not exist")]
    ItemNotFound(String),

    /// The item has already been picked up.
    #[error("item '{0}' has already been picked up")]
    AlreadyPicked(String),

    /// The player is not standing on the item.
    #[error("player is not at the location of item '{0}'")]
    NotAtLocation(String),

    /// The item is not in the player's inventory.
    #[error("item '{0}' is not in the inventory")]
    NotInInventory(String),

    /// No environment object with the given id exists.
    #[error("environment object '{0}' does not exist")]
    ObjectNotFound(String),

    /// A state failed invariant validation.
    #[error("corrupt game state: {0}")]
    CorruptState(String),

    /// Saving the game state failed.
    #[error("failed to save game state to '{}'", path.display())]
    Save {
        /// Destination the save was written towards.
        path: PathBuf,
        #[source]
        source: PersistenceCause,
    },

    /// Loading the game state failed.
    #[error("failed to load game state from '{}'", path.display())]
    Load {
        /// Source the load was read from.
        path: PathBuf,
        #[source]
        source: PersistenceCause,
    },
}

/// Underlying cause of a save or load failure.
///
/// Kept separate from [`GridkeepError`] so the top-level message stays
/// generalized while the cause remains inspectable through
/// [`std::error::Error::source`].
#[derive(thiserror::Error, Debug)]
pub enum PersistenceCause {
    /// Filesystem access failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the gridkeep codebase.
pub type GridkeepResult<T> = Result<T, GridkeepError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default world width in tiles
    pub const DEFAULT_WORLD_WIDTH: i32 = 10;

    /// Default world height in tiles
    pub const DEFAULT_WORLD_HEIGHT: i32 = 10;

    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

    /// Lower bound of the player health range
    pub const MIN_HEALTH: i32 = 0;

    /// Upper bound of the player health range
    pub const MAX_HEALTH: i32 = 100;

    /// Health restored by using a health potion
    pub const HEALTH_POTION_HEAL: i32 = 20;

    /// Default save file path used by the demo driver
    pub const DEFAULT_SAVE_PATH: &str = "save.json";
}
