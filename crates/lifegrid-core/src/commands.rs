//! Control commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All host control actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Begin automatic stepping. No-op when already running or when the
    /// generation cap has been reached.
    Start,
    /// Halt automatic stepping. No-op when already paused.
    Pause,
    /// Stop, reset the generation counter to 0, and re-randomize the grid.
    Terminate,
}
