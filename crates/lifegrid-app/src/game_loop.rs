//! Game loop thread — steps the engine at a fixed cadence and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are stored in
//! shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info};

use lifegrid_core::state::EngineSnapshot;
use lifegrid_sim::engine::{LifeConfig, LifeEngine};

use crate::state::GameLoopCommand;

/// Spawns the game loop in a new thread.
///
/// `tick_interval` is the cadence at which the engine is stepped while
/// running. Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: LifeConfig,
    tick_interval: Duration,
    latest_snapshot: Arc<Mutex<Option<EngineSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("lifegrid-game-loop".into())
        .spawn(move || {
            run_game_loop(config, tick_interval, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LifeConfig,
    tick_interval: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<EngineSnapshot>>,
) {
    let mut engine = LifeEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Control(command)) => {
                    info!("applying control command: {:?}", command);
                    engine.apply_command(command);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one generation while running
        if engine.is_running() {
            engine.step();
            debug!(
                "generation {} population {}",
                engine.generation(),
                engine.population()
            );
            if !engine.is_running() {
                info!("generation cap reached at {}", engine.generation());
            }
        }

        // 3. Store latest snapshot for synchronous polling
        let snapshot = engine.snapshot();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick_interval;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_interval * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::commands::ControlCommand;
    use lifegrid_core::enums::RunState;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Control(ControlCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::Control(ControlCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Control(ControlCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Control(ControlCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = LifeEngine::new(LifeConfig::default());
        assert_eq!(engine.run_state(), RunState::NotRunning);

        engine.apply_command(ControlCommand::Start);
        assert_eq!(engine.run_state(), RunState::Running);

        engine.step();
        let stepped_generation = engine.generation();
        assert!(stepped_generation > 0);

        engine.apply_command(ControlCommand::Pause);
        assert_eq!(engine.run_state(), RunState::NotRunning);
        assert_eq!(engine.generation(), stepped_generation);

        engine.apply_command(ControlCommand::Terminate);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest_snapshot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            LifeConfig::default(),
            Duration::from_millis(2),
            latest_snapshot.clone(),
        );

        tx.send(GameLoopCommand::Control(ControlCommand::Start))
            .unwrap();

        // Generous margin: at a 2ms cadence the loop has hundreds of
        // chances to publish within half a second.
        std::thread::sleep(Duration::from_millis(500));

        let snapshot = latest_snapshot.lock().unwrap().clone();
        let snapshot = snapshot.expect("Loop should have published a snapshot");
        assert!(snapshot.generation > 0, "Engine should have advanced");
        assert_eq!(snapshot.run_state, RunState::Running);
        assert_eq!(
            snapshot.cells.len(),
            snapshot.width * snapshot.height
        );

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
