//! Grid seeding for setting up the simulation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lifegrid_core::grid::Grid;

/// Fill every cell independently: alive with probability `density`,
/// dead otherwise.
pub fn randomize_grid(grid: &mut Grid, rng: &mut ChaCha8Rng, density: f64) {
    let density = density.clamp(0.0, 1.0);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set(x, y, rng.gen_bool(density));
        }
    }
}
