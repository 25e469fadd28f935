//! Engine module: the 4x4 board, directional shift/merge, tile spawning and
//! the per-game win/loss state.
//!
//! - `Board` is a flat row-major grid that tracks its own empty-cell count.
//! - `shift` is deterministic; all randomness lives in `spawn_random_tile`.
//! - `Game` ties them together the way a turn is played.

mod board;
mod ops;
mod spawn;
mod state;

pub use board::{Board, Direction, Pos};
pub use ops::{shift, ShiftOutcome};
pub use spawn::{spawn_random_tile, spawn_value, Spawn, DEFAULT_TWO_PROBABILITY};
pub use state::{Game, GameStatus};

/// Board width in cells.
pub const WIDTH: usize = 4;
/// Board height in cells.
pub const HEIGHT: usize = 4;
/// Total number of cells.
pub const SIZE: usize = WIDTH * HEIGHT;
/// Merging into this value wins the game.
pub const WIN_TILE: u64 = 2048;
