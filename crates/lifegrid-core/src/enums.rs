//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Run state (top-level state): whether external tick events cause evolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Automatic stepping is halted.
    #[default]
    NotRunning,
    /// The engine evolves once per host tick.
    Running,
}
