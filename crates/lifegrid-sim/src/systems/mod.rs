//! Systems that operate on the grid each tick.
//!
//! Systems are pure functions over `&Grid` — they do not own state.

pub mod evolution;
pub mod snapshot;
