//! Commands shared between the host and the game loop thread.

use lifegrid_core::commands::ControlCommand;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A control command to forward to the simulation engine.
    Control(ControlCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}
