//! # Game Entities
//!
//! The player, pickable items, and interactable environment objects.
//!
//! These are plain owned data types with serde derives; all mutation rules
//! live in the state manager, which validates before touching them.

use crate::{config, Position};
use serde::{Deserialize, Serialize};

/// The player-controlled character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current position, always inside the world bounds
    pub position: Position,
    /// Current health, always within `[MIN_HEALTH, MAX_HEALTH]`
    pub health: i32,
    /// Ids of held items, in pickup order
    pub inventory: Vec<String>,
}

impl Player {
    /// Creates a player at the given position with default health and an
    /// empty inventory.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: config::DEFAULT_PLAYER_HEALTH,
            inventory: Vec::new(),
        }
    }

    /// Adjusts health by a delta, clamping the result to the allowed range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkeep::{Player, Position};
    ///
    /// let mut player = Player::new(Position::origin());
    /// player.adjust_health(20);
    /// assert_eq!(player.health, 100);
    ///
    /// player.adjust_health(-250);
    /// assert_eq!(player.health, 0);
    /// ```
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self
            .health
            .saturating_add(delta)
            .clamp(config::MIN_HEALTH, config::MAX_HEALTH);
    }

    /// Returns true if the inventory holds the given item id.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }
}

/// A pickable item placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Whether the item has been picked up
    pub picked: bool,
}

impl Item {
    /// Creates an unpicked item at the given position.
    pub fn new(id: String, name: String, position: Position) -> Self {
        Self {
            id,
            name,
            position,
            picked: false,
        }
    }

    /// Returns the gameplay effect this item applies when used, if any.
    ///
    /// Effects are keyed by item name. Items without a defined effect are
    /// still consumed on use.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkeep::{Item, ItemEffect, Position};
    ///
    /// let potion = Item::new("item1".to_string(), "Health Potion".to_string(), Position::new(2, 2));
    /// assert_eq!(potion.effect(), Some(ItemEffect::Heal(20)));
    ///
    /// let key = Item::new("item2".to_string(), "Key".to_string(), Position::new(4, 1));
    /// assert_eq!(key.effect(), None);
    /// ```
    pub fn effect(&self) -> Option<ItemEffect> {
        match self.name.as_str() {
            "Health Potion" => Some(ItemEffect::Heal(config::HEALTH_POTION_HEAL)),
            _ => None,
        }
    }
}

/// Effect applied when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restores health, clamped to the allowed range
    Heal(i32),
}

/// An interactable fixture placed in the world, such as a door.
///
/// Serializes with the kind tag and its fields flattened into the record,
/// so a door reads `{"id": "door1", "type": "door", "open": false}` and a
/// switch reads `{"id": "lever1", "type": "switch"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentObject {
    pub id: String,
    /// Type-specific state, flattened into the object record
    #[serde(flatten)]
    pub kind: EnvironmentKind,
}

/// Type-specific state for environment objects.
///
/// Interaction only affects doors; every other kind is accepted and left
/// unchanged, so new fixture types can be added without breaking callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnvironmentKind {
    /// A door that interaction toggles between open and closed
    Door { open: bool },
    /// A switch; interaction currently has no effect on it
    Switch,
}

impl EnvironmentObject {
    /// Creates a closed door.
    pub fn door(id: String) -> Self {
        Self {
            id,
            kind: EnvironmentKind::Door { open: false },
        }
    }

    /// Creates a switch.
    pub fn switch(id: String) -> Self {
        Self {
            id,
            kind: EnvironmentKind::Switch,
        }
    }

    /// Returns the door's open flag, or None for non-door objects.
    pub fn is_open(&self) -> Option<bool> {
        match self.kind {
            EnvironmentKind::Door { open } => Some(open),
            EnvironmentKind::Switch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_with_default_health_and_empty_inventory() {
        let player = Player::new(Position::origin());
        assert_eq!(player.position, Position::new(0, 0));
        assert_eq!(player.health, 100);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_adjust_health_clamps_at_max() {
        let mut player = Player::new(Position::origin());
        player.adjust_health(20);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_adjust_health_clamps_at_min() {
        let mut player = Player::new(Position::origin());
        player.adjust_health(-150);
        assert_eq!(player.health, 0);
        player.adjust_health(-1);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_adjust_health_applies_partial_heal() {
        let mut player = Player::new(Position::origin());
        player.health = 70;
        player.adjust_health(20);
        assert_eq!(player.health, 90);
    }

    #[test]
    fn test_adjust_health_saturates_on_extreme_values() {
        // Health this far out of range only arises from a hand-edited state
        // adopted without validation; the adjustment must still clamp
        // instead of overflowing.
        let mut player = Player::new(Position::origin());
        player.health = i32::MAX - 10;
        player.adjust_health(20);
        assert_eq!(player.health, 100);

        player.health = i32::MIN + 10;
        player.adjust_health(-20);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_has_item() {
        let mut player = Player::new(Position::origin());
        assert!(!player.has_item("item1"));
        player.inventory.push("item1".to_string());
        assert!(player.has_item("item1"));
        assert!(!player.has_item("item2"));
    }

    #[test]
    fn test_health_potion_effect() {
        let potion = Item::new(
            "item1".to_string(),
            "Health Potion".to_string(),
            Position::new(2, 2),
        );
        assert_eq!(potion.effect(), Some(ItemEffect::Heal(20)));
    }

    #[test]
    fn test_key_has_no_effect() {
        let key = Item::new("item2".to_string(), "Key".to_string(), Position::new(4, 1));
        assert_eq!(key.effect(), None);
    }

    #[test]
    fn test_door_serialization_shape() {
        let door = EnvironmentObject::door("door1".to_string());
        let json = serde_json::to_value(&door).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "door1", "type": "door", "open": false })
        );
    }

    #[test]
    fn test_switch_serialization_shape() {
        let switch = EnvironmentObject::switch("lever1".to_string());
        let json = serde_json::to_value(&switch).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "lever1", "type": "switch" }));
    }

    #[test]
    fn test_environment_object_round_trip() {
        let door = EnvironmentObject {
            id: "door1".to_string(),
            kind: EnvironmentKind::Door { open: true },
        };
        let json = serde_json::to_string(&door).unwrap();
        let back: EnvironmentObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, door);

        let switch = EnvironmentObject::switch("lever1".to_string());
        let json = serde_json::to_string(&switch).unwrap();
        let back: EnvironmentObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, switch);
    }

    #[test]
    fn test_is_open() {
        let mut door = EnvironmentObject::door("door1".to_string());
        assert_eq!(door.is_open(), Some(false));
        door.kind = EnvironmentKind::Door { open: true };
        assert_eq!(door.is_open(), Some(true));
        assert_eq!(EnvironmentObject::switch("lever1".to_string()).is_open(), None);
    }
}
