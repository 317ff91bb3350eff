//! Integration tests walking the demo script end to end, including the
//! save/load round trip through a real file.

use gridkeep::{persistence, GameState, GridkeepError, GridkeepResult, Position, StateManager};
use tempfile::tempdir;

#[test]
fn test_potion_scenario() -> GridkeepResult<()> {
    let mut manager = StateManager::new();

    manager.move_player(2, 2)?;
    manager.pickup_item("item1")?;
    manager.use_item("item1")?;

    let state = manager.get_state();
    assert_eq!(state.player.health, 100);
    assert!(state.player.inventory.is_empty());
    assert!(state.items["item1"].picked);

    Ok(())
}

#[test]
fn test_full_demo_sequence() -> GridkeepResult<()> {
    let dir = tempdir().expect("temp dir");
    let save_path = dir.path().join("save.json");

    let mut manager = StateManager::new();

    manager.move_player(2, 2)?;
    manager.pickup_item("item1")?;
    manager.use_item("item1")?;
    manager.move_player(4, 1)?;
    manager.pickup_item("item2")?;
    manager.interact_with_environment("door1")?;

    // The state the demo saves: key held, potion consumed, door open.
    let state = manager.get_state();
    assert_eq!(state.player.position, Position::new(4, 1));
    assert_eq!(state.player.health, 100);
    assert_eq!(state.player.inventory, vec!["item2".to_string()]);
    assert!(state.items["item1"].picked);
    assert!(state.items["item2"].picked);
    assert_eq!(state.environment["door1"].is_open(), Some(true));

    persistence::save_game_state(&state, &save_path)?;
    let loaded = persistence::load_game_state(&save_path)?;
    assert_eq!(loaded, state);

    manager.reset_state();
    assert_eq!(manager.get_state(), GameState::initial());

    Ok(())
}

#[test]
fn test_resume_from_loaded_state() -> GridkeepResult<()> {
    let dir = tempdir().expect("temp dir");
    let save_path = dir.path().join("save.json");

    let mut manager = StateManager::new();
    manager.move_player(2, 2)?;
    manager.pickup_item("item1")?;
    persistence::save_game_state(&manager.get_state(), &save_path)?;

    let loaded = persistence::load_game_state(&save_path)?;
    loaded.validate()?;
    let mut resumed = StateManager::from_state(loaded);

    // The potion is already held, so using it works from the restored state.
    resumed.use_item("item1")?;
    assert!(resumed.get_state().player.inventory.is_empty());

    Ok(())
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let mut manager = StateManager::new();
    let before = manager.get_state();

    assert!(manager.move_player(-3, 7).is_err());
    assert!(manager.pickup_item("item1").is_err());
    assert!(manager.use_item("item1").is_err());
    assert!(manager.interact_with_environment("vault").is_err());

    assert_eq!(manager.get_state(), before);
}

#[test]
fn test_error_messages_name_the_failure() {
    let mut manager = StateManager::new();

    let err = manager.move_player(12, -1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid move: position (12, -1) is outside world bounds"
    );

    let err = manager.pickup_item("item99").unwrap_err();
    assert_eq!(err.to_string(), "item 'item99' does not exist");

    let err = manager.use_item("item2").unwrap_err();
    assert_eq!(err.to_string(), "item 'item2' is not in the inventory");

    let err = manager.interact_with_environment("door99").unwrap_err();
    assert_eq!(
        err.to_string(),
        "environment object 'door99' does not exist"
    );
}

#[test]
fn test_load_error_carries_path_and_cause() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");

    let err = persistence::load_game_state(&path).unwrap_err();
    match err {
        GridkeepError::Load {
            path: reported, ..
        } => assert_eq!(reported, path),
        other => panic!("expected a load error, got {other:?}"),
    }
}
