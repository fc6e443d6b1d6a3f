//! Snapshot system: builds a complete EngineSnapshot from the current state.
//!
//! This system is read-only — it never modifies the grid.

use lifegrid_core::enums::RunState;
use lifegrid_core::grid::Grid;
use lifegrid_core::state::EngineSnapshot;

/// Build a complete EngineSnapshot from the current engine state.
pub fn build_snapshot(
    grid: &Grid,
    generation: u32,
    population: u32,
    run_state: RunState,
) -> EngineSnapshot {
    EngineSnapshot {
        generation,
        population,
        run_state,
        width: grid.width(),
        height: grid.height(),
        cells: grid.cells().to_vec(),
    }
}
