//! Headless lifegrid runner.
//!
//! Spawns the game loop, starts the simulation, and logs the generation
//! and population counters until the engine halts at the generation cap.
//! An optional argument names a JSON config file overriding the defaults.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::info;

use lifegrid_app::game_loop;
use lifegrid_app::state::GameLoopCommand;
use lifegrid_core::commands::ControlCommand;
use lifegrid_core::constants::TICK_INTERVAL_MS;
use lifegrid_core::enums::RunState;
use lifegrid_sim::engine::LifeConfig;

fn main() {
    simple_logger::init().unwrap();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path),
        None => LifeConfig::default(),
    };
    info!(
        "starting {}x{} grid, density {}, cap {}",
        config.width, config.height, config.initial_density, config.max_generations
    );

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(
        config,
        Duration::from_millis(TICK_INTERVAL_MS),
        latest_snapshot.clone(),
    );

    cmd_tx
        .send(GameLoopCommand::Control(ControlCommand::Start))
        .expect("Game loop thread unavailable");

    // Poll the shared snapshot slot and report counters until the engine
    // self-halts at the generation cap.
    loop {
        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS * 10));

        let snapshot = latest_snapshot
            .lock()
            .expect("Snapshot lock poisoned")
            .clone();
        if let Some(snapshot) = snapshot {
            info!(
                "generation {} population {}",
                snapshot.generation, snapshot.population
            );
            if snapshot.run_state == RunState::NotRunning && snapshot.generation > 0 {
                break;
            }
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    info!("simulation halted at the generation cap");
}

/// Load a `LifeConfig` from a JSON file. Missing fields fall back to the
/// defaults.
fn load_config(path: &str) -> LifeConfig {
    let raw = std::fs::read_to_string(path).expect("Failed to read config file");
    serde_json::from_str(&raw).expect("Failed to parse config file")
}
