//! # World Representation
//!
//! Fixed-size grid bounds that every movement is validated against.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Fixed grid bounds for the game world.
///
/// The bounds are set at construction and never change afterwards. Positions
/// range over `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub width: i32,
    pub height: i32,
}

impl World {
    /// Creates a world with the given bounds.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if the position lies within the world bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkeep::{Position, World};
    ///
    /// let world = World::new(10, 10);
    /// assert!(world.contains(Position::new(0, 0)));
    /// assert!(world.contains(Position::new(9, 9)));
    /// assert!(!world.contains(Position::new(10, 0)));
    /// assert!(!world.contains(Position::new(-1, 5)));
    /// ```
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }
}
