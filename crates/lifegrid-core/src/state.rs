//! Engine snapshot — the complete visible state published to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::RunState;

/// Complete engine state handed to the render/host layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Generations elapsed since the last reset.
    pub generation: u32,
    /// Count of live cells in `cells`.
    pub population: u32,
    pub run_state: RunState,
    pub width: usize,
    pub height: usize,
    /// Row-major cell states, `width * height` entries.
    pub cells: Vec<bool>,
}
