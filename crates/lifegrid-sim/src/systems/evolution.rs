//! Evolution system: applies the Game of Life rule to produce the next grid.
//!
//! Reads only the current generation. The returned grid is built fresh and
//! swapped in wholesale, so neighbor counts are never taken against
//! partially updated state.

use lifegrid_core::grid::Grid;

/// Compute the next generation from `current`.
///
/// A live cell survives with 2 or 3 live neighbors; a dead cell becomes
/// alive with exactly 3. Every other cell is dead in the next grid.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::new(current.width(), current.height());
    for y in 0..current.height() {
        for x in 0..current.width() {
            let neighbors = current.live_neighbors(x, y);
            let alive = if current.is_alive(x, y) {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            next.set(x, y, alive);
        }
    }
    next
}
