//! # Game State Module
//!
//! The central game state aggregate and the validated operations over it.
//!
//! [`GameState`] is a plain serializable snapshot of the world. The
//! [`StateManager`] owns exactly one live snapshot and is the only way to
//! change it; each operation validates its inputs against the current state
//! first and mutates only after every check has passed, so a failed call
//! never leaves a partial update behind.

use crate::{
    config, EnvironmentKind, EnvironmentObject, GridkeepError, GridkeepResult, Item, ItemEffect,
    Player, Position, World,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Complete snapshot of the game world.
///
/// Declared in the order the save format lists its sections: player, items,
/// environment, world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player-controlled character
    pub player: Player,
    /// All items, keyed by item id
    pub items: HashMap<String, Item>,
    /// All environment objects, keyed by object id
    pub environment: HashMap<String, EnvironmentObject>,
    /// Fixed world bounds
    pub world: World,
}

impl GameState {
    /// Builds the fixed initial configuration.
    ///
    /// A 10x10 world with the player at the origin on full health, a health
    /// potion at (2, 2), a key at (4, 1), and one closed door.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkeep::GameState;
    ///
    /// let state = GameState::initial();
    /// assert_eq!(state.world.width, 10);
    /// assert_eq!(state.player.health, 100);
    /// assert!(state.items.contains_key("item1"));
    /// assert!(state.environment.contains_key("door1"));
    /// ```
    pub fn initial() -> Self {
        let mut items = HashMap::new();
        items.insert(
            "item1".to_string(),
            Item::new(
                "item1".to_string(),
                "Health Potion".to_string(),
                Position::new(2, 2),
            ),
        );
        items.insert(
            "item2".to_string(),
            Item::new("item2".to_string(), "Key".to_string(), Position::new(4, 1)),
        );

        let mut environment = HashMap::new();
        environment.insert(
            "door1".to_string(),
            EnvironmentObject::door("door1".to_string()),
        );

        Self {
            player: Player::new(Position::origin()),
            items,
            environment,
            world: World::new(config::DEFAULT_WORLD_WIDTH, config::DEFAULT_WORLD_HEIGHT),
        }
    }

    /// Checks the engine invariants and reports the first violation as
    /// [`GridkeepError::CorruptState`].
    ///
    /// Loading never validates automatically; call this when a state from
    /// disk should be treated as untrusted. A used item stays `picked`
    /// without being in the inventory, so only the inventory side of the
    /// pickup consistency is checked.
    pub fn validate(&self) -> GridkeepResult<()> {
        if self.world.width <= 0 || self.world.height <= 0 {
            return Err(GridkeepError::CorruptState(format!(
                "world bounds {}x{} are not positive",
                self.world.width, self.world.height
            )));
        }
        if !self.world.contains(self.player.position) {
            return Err(GridkeepError::CorruptState(format!(
                "player position ({}, {}) is outside world bounds",
                self.player.position.x, self.player.position.y
            )));
        }
        if self.player.health < config::MIN_HEALTH || self.player.health > config::MAX_HEALTH {
            return Err(GridkeepError::CorruptState(format!(
                "player health {} is outside [{}, {}]",
                self.player.health,
                config::MIN_HEALTH,
                config::MAX_HEALTH
            )));
        }

        let mut seen = HashSet::new();
        for item_id in &self.player.inventory {
            if !seen.insert(item_id) {
                return Err(GridkeepError::CorruptState(format!(
                    "inventory holds item '{}' more than once",
                    item_id
                )));
            }
            match self.items.get(item_id) {
                None => {
                    return Err(GridkeepError::CorruptState(format!(
                        "inventory references unknown item '{}'",
                        item_id
                    )))
                }
                Some(item) if !item.picked => {
                    return Err(GridkeepError::CorruptState(format!(
                        "inventory holds item '{}' that is not marked picked",
                        item_id
                    )))
                }
                Some(_) => {}
            }
        }

        for (key, item) in &self.items {
            if key != &item.id {
                return Err(GridkeepError::CorruptState(format!(
                    "item table key '{}' does not match item id '{}'",
                    key, item.id
                )));
            }
            if !self.world.contains(item.position) {
                return Err(GridkeepError::CorruptState(format!(
                    "item '{}' lies outside world bounds",
                    item.id
                )));
            }
        }

        for (key, object) in &self.environment {
            if key != &object.id {
                return Err(GridkeepError::CorruptState(format!(
                    "environment table key '{}' does not match object id '{}'",
                    key, object.id
                )));
            }
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Owns the live [`GameState`] and exposes the validated operations.
///
/// # Examples
///
/// ```
/// use gridkeep::StateManager;
///
/// let mut manager = StateManager::new();
/// manager.move_player(2, 2).unwrap();
/// manager.pickup_item("item1").unwrap();
/// manager.use_item("item1").unwrap();
/// assert_eq!(manager.get_state().player.health, 100);
/// ```
#[derive(Debug, Clone)]
pub struct StateManager {
    state: GameState,
}

impl StateManager {
    /// Creates a manager holding the fixed initial configuration.
    pub fn new() -> Self {
        Self {
            state: GameState::initial(),
        }
    }

    /// Creates a manager that adopts an existing state, such as one
    /// returned by [`crate::persistence::load_game_state`].
    ///
    /// The state is adopted as-is; run [`GameState::validate`] first if it
    /// comes from an untrusted file.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Moves the player to the given coordinates.
    ///
    /// Fails with [`GridkeepError::OutOfBounds`] when the target lies
    /// outside the world bounds; the player does not move.
    pub fn move_player(&mut self, x: i32, y: i32) -> GridkeepResult<()> {
        let target = Position::new(x, y);
        if !self.state.world.contains(target) {
            return Err(GridkeepError::OutOfBounds { x, y });
        }

        self.state.player.position = target;
        debug!("player moved to ({}, {})", x, y);
        Ok(())
    }

    /// Picks up an item at the player's position.
    ///
    /// Fails with [`GridkeepError::ItemNotFound`] for an unknown id,
    /// [`GridkeepError::AlreadyPicked`] if the item was picked before, and
    /// [`GridkeepError::NotAtLocation`] if the player stands elsewhere. On
    /// success the item is marked picked and its id is appended to the
    /// inventory, so inventory order is pickup order.
    pub fn pickup_item(&mut self, item_id: &str) -> GridkeepResult<()> {
        let player_position = self.state.player.position;
        let item = self
            .state
            .items
            .get_mut(item_id)
            .ok_or_else(|| GridkeepError::ItemNotFound(item_id.to_string()))?;

        if item.picked {
            return Err(GridkeepError::AlreadyPicked(item_id.to_string()));
        }
        if item.position != player_position {
            return Err(GridkeepError::NotAtLocation(item_id.to_string()));
        }

        item.picked = true;
        self.state.player.inventory.push(item_id.to_string());
        debug!("picked up item '{}'", item_id);
        Ok(())
    }

    /// Uses an item from the inventory and applies its effect.
    ///
    /// Fails with [`GridkeepError::NotInInventory`] if the id is not held;
    /// the follow-up table lookup guards against a state whose inventory
    /// references an item the table no longer knows. The item is removed
    /// from the inventory whether or not it had an effect.
    pub fn use_item(&mut self, item_id: &str) -> GridkeepResult<()> {
        if !self.state.player.has_item(item_id) {
            return Err(GridkeepError::NotInInventory(item_id.to_string()));
        }

        let item = self
            .state
            .items
            .get(item_id)
            .ok_or_else(|| GridkeepError::ItemNotFound(item_id.to_string()))?;

        match item.effect() {
            Some(ItemEffect::Heal(amount)) => {
                self.state.player.adjust_health(amount);
                debug!(
                    "used item '{}', health is now {}",
                    item_id, self.state.player.health
                );
            }
            None => debug!("used item '{}' with no effect", item_id),
        }

        self.state.player.inventory.retain(|id| id != item_id);
        Ok(())
    }

    /// Interacts with an environment object.
    ///
    /// Doors toggle between open and closed. Objects of any other kind are
    /// accepted and left unchanged.
    pub fn interact_with_environment(&mut self, object_id: &str) -> GridkeepResult<()> {
        let object = self
            .state
            .environment
            .get_mut(object_id)
            .ok_or_else(|| GridkeepError::ObjectNotFound(object_id.to_string()))?;

        match &mut object.kind {
            EnvironmentKind::Door { open } => {
                *open = !*open;
                debug!(
                    "door '{}' is now {}",
                    object_id,
                    if *open { "open" } else { "closed" }
                );
            }
            EnvironmentKind::Switch => {}
        }

        Ok(())
    }

    /// Discards the current state and restores the fixed initial
    /// configuration.
    pub fn reset_state(&mut self) {
        self.state = GameState::initial();
        debug!("game state reset to initial configuration");
    }

    /// Returns an independent copy of the current state.
    ///
    /// The copy shares nothing with the managed state; mutating it never
    /// affects later operations or later copies.
    pub fn get_state(&self) -> GameState {
        self.state.clone()
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
