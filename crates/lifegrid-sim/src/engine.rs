//! Simulation engine — the core of the simulation.
//!
//! `LifeEngine` owns the grid, applies the evolution rule, and produces
//! `EngineSnapshot`s. Completely headless (no UI dependency), enabling
//! deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use lifegrid_core::commands::ControlCommand;
use lifegrid_core::constants::{
    DEFAULT_HEIGHT, DEFAULT_INITIAL_DENSITY, DEFAULT_SEED, DEFAULT_WIDTH, MAX_GENERATIONS,
};
use lifegrid_core::enums::RunState;
use lifegrid_core::grid::Grid;
use lifegrid_core::state::EngineSnapshot;

use crate::seeding;
use crate::systems;

/// Configuration for a new engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid width in cells. Fixed for the engine's lifetime.
    pub width: usize,
    /// Grid height in cells. Fixed for the engine's lifetime.
    pub height: usize,
    /// Probability that a cell starts alive when the grid is randomized.
    pub initial_density: f64,
    /// Generation cap; the run state drops to NotRunning once reached.
    pub max_generations: u32,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_density: DEFAULT_INITIAL_DENSITY,
            max_generations: MAX_GENERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

/// The simulation engine. Owns the grid and all bookkeeping state.
pub struct LifeEngine {
    grid: Grid,
    generation: u32,
    population: u32,
    run_state: RunState,
    initial_density: f64,
    max_generations: u32,
    rng: ChaCha8Rng,
}

impl LifeEngine {
    /// Create a new engine with the given config and a randomized grid.
    pub fn new(config: LifeConfig) -> Self {
        let mut engine = Self {
            grid: Grid::new(config.width, config.height),
            generation: 0,
            population: 0,
            run_state: RunState::NotRunning,
            initial_density: config.initial_density,
            max_generations: config.max_generations,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        };
        engine.randomize();
        engine
    }

    /// Re-seed every cell independently alive with the configured density,
    /// then recompute the population.
    pub fn randomize(&mut self) {
        seeding::randomize_grid(&mut self.grid, &mut self.rng, self.initial_density);
        self.population = self.grid.population();
    }

    /// Advance the grid by one generation.
    ///
    /// Neighbor counts are taken against the current grid only; the next
    /// grid replaces it wholesale once fully computed. Reaching the
    /// generation cap drops the run state to NotRunning, and further calls
    /// are ignored until `terminate()` resets the counter.
    pub fn step(&mut self) {
        if self.generation >= self.max_generations {
            self.run_state = RunState::NotRunning;
            return;
        }
        self.grid = systems::evolution::next_generation(&self.grid);
        self.population = self.grid.population();
        self.generation += 1;
        if self.generation >= self.max_generations {
            self.run_state = RunState::NotRunning;
        }
    }

    /// Begin automatic stepping. No-op while already running or once the
    /// generation cap has been reached.
    pub fn start(&mut self) {
        if self.generation < self.max_generations {
            self.run_state = RunState::Running;
        }
    }

    /// Halt automatic stepping. No-op while already paused.
    pub fn pause(&mut self) {
        self.run_state = RunState::NotRunning;
    }

    /// Stop, reset the generation counter to 0, and re-randomize the grid.
    pub fn terminate(&mut self) {
        self.run_state = RunState::NotRunning;
        self.generation = 0;
        self.randomize();
    }

    /// Apply a host control command.
    pub fn apply_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Start => self.start(),
            ControlCommand::Pause => self.pause(),
            ControlCommand::Terminate => self.terminate(),
        }
    }

    /// Whether the cell at `(x, y)` is alive.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    /// Count live cells among the 8 toroidally adjacent neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.grid.live_neighbors(x, y)
    }

    /// Generations elapsed since the last reset.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Count of live cells in the current grid.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Get the current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Whether automatic stepping is currently enabled.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Get a read-only reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Build a snapshot of the current state for the host.
    pub fn snapshot(&self) -> EngineSnapshot {
        systems::snapshot::build_snapshot(
            &self.grid,
            self.generation,
            self.population,
            self.run_state,
        )
    }

    /// Clear the grid to all-dead (for pattern tests).
    #[cfg(test)]
    pub fn clear_grid(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.population = 0;
    }

    /// Set a single cell (for pattern tests).
    #[cfg(test)]
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set(x, y, alive);
        self.population = self.grid.population();
    }
}
