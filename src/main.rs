//! # Gridkeep Main Entry Point
//!
//! Runs the scripted demonstration: walks the fixed initial world through
//! moves, pickups, item use, and a door toggle, saving and reloading the
//! state along the way. Every step prints a titled JSON snapshot to stdout.

use clap::Parser;
use env_logger::Env;
use gridkeep::{persistence, GameState, GridkeepResult, StateManager};
use log::{error, info};
use std::path::PathBuf;
use std::process;

/// Command line arguments for the gridkeep demo.
#[derive(Parser, Debug)]
#[command(name = "gridkeep")]
#[command(about = "A grid-world game state engine with JSON save files")]
#[command(version)]
struct Args {
    /// File the demo saves to and reloads from
    #[arg(long, default_value = gridkeep::config::DEFAULT_SAVE_PATH)]
    save_path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("starting gridkeep v{}", gridkeep::VERSION);

    if let Err(e) = run_demo(&args) {
        error!("Error during game simulation: {}", e);
        process::exit(1);
    }
}

/// Initializes env_logger at the requested level; `RUST_LOG` still wins
/// when set.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
}

/// Prints a titled, pretty-printed snapshot to stdout.
fn print_snapshot(title: &str, state: &GameState) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("\n=== {} ===\n{}", title, json),
        Err(e) => error!("failed to render snapshot '{}': {}", title, e),
    }
}

/// Walks the fixed demo script over a fresh state manager.
fn run_demo(args: &Args) -> GridkeepResult<()> {
    let mut manager = StateManager::new();

    print_snapshot("Initial State", &manager.get_state());

    manager.move_player(2, 2)?;
    print_snapshot("After Moving Player to (2, 2)", &manager.get_state());

    manager.pickup_item("item1")?;
    print_snapshot("After Picking Up Health Potion", &manager.get_state());

    manager.use_item("item1")?;
    print_snapshot("After Using Health Potion", &manager.get_state());

    manager.move_player(4, 1)?;
    print_snapshot("After Moving Player to (4, 1)", &manager.get_state());

    manager.pickup_item("item2")?;
    print_snapshot("After Picking Up Key", &manager.get_state());

    manager.interact_with_environment("door1")?;
    print_snapshot("After Opening Door", &manager.get_state());

    persistence::save_game_state(&manager.get_state(), &args.save_path)?;
    println!("\nGame state saved to {}", args.save_path.display());

    let loaded = persistence::load_game_state(&args.save_path)?;
    print_snapshot("Loaded Game State from File", &loaded);

    manager.reset_state();
    print_snapshot("After Resetting Game State", &manager.get_state());

    Ok(())
}
