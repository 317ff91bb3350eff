//! # Game Module
//!
//! Core game state management and world representation.
//!
//! This module contains the fundamental building blocks of the gridkeep
//! engine:
//! - Game state aggregate and the validated operation surface
//! - World bounds representation
//! - Player, item, and environment object types

pub mod entities;
pub mod state;
pub mod world;

pub use entities::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the game world.
///
/// # Examples
///
/// ```
/// use gridkeep::Position;
///
/// let pos = Position::new(2, 2);
/// assert_eq!(pos.x, 2);
/// assert_eq!(pos.y, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
    }

    #[test]
    fn test_position_origin() {
        assert_eq!(Position::origin(), Position::new(0, 0));
    }

    #[test]
    fn test_position_serialization_shape() {
        let json = serde_json::to_value(Position::new(2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 2, "y": 3 }));
    }
}
