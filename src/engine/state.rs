use log::{debug, info, trace};
use rand::rngs::StdRng;

use super::board::{Board, Direction};
use super::ops::shift;
use super::spawn::{spawn_random_tile, Spawn, DEFAULT_TWO_PROBABILITY};

/// Where a game stands. `Won` and `Lost` are terminal until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InGame,
    Won,
    Lost,
}

/// One game: board, status and the RNG that feeds the spawner.
pub struct Game {
    board: Board,
    status: GameStatus,
    rng: StdRng,
    two_probability: f64,
}

impl Game {
    /// A game with an empty board. Call `reset` to place the opening tiles.
    ///
    /// Panics if `two_probability` is not within `[0, 1]`.
    pub fn new(rng: StdRng, two_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&two_probability),
            "spawn probability must be within [0, 1], got {two_probability}"
        );
        Game { board: Board::new(), status: GameStatus::InGame, rng, two_probability }
    }

    /// A game using the default 90/10 spawn weighting.
    pub fn with_rng(rng: StdRng) -> Self {
        Game::new(rng, DEFAULT_TWO_PROBABILITY)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Clear the board, return to `InGame` and spawn the two opening tiles.
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::InGame;
        self.spawn();
        self.spawn();
        info!("game reset");
    }

    /// Spawn one tile. Returns false if the game is over or the board is full.
    ///
    /// When the tile fills the last empty cell and no neighbouring pair can
    /// merge, the game is lost.
    pub fn spawn(&mut self) -> bool {
        if self.status != GameStatus::InGame {
            return false;
        }
        let Spawn::Placed { index, value } = spawn_random_tile(&mut self.board, &mut self.rng, self.two_probability) else {
            return false;
        };
        trace!("spawned {value} at cell {index}");
        // With any empty cell left a move is always possible.
        if self.board.empty_count() == 0 && !self.board.has_possible_merges() {
            self.status = GameStatus::Lost;
            info!("no moves left, game lost (highest tile {})", self.board.highest_tile());
        }
        true
    }

    /// Shift toward `dir`, then spawn if anything moved and the game is still
    /// running. Returns whether the board changed.
    pub fn process_move(&mut self, dir: Direction) -> bool {
        if self.status != GameStatus::InGame {
            return false;
        }
        let outcome = shift(&mut self.board, dir);
        debug!("move {dir:?}: changed={} merges={}", outcome.changed, outcome.merges);
        if outcome.reached_win {
            self.status = GameStatus::Won;
            info!("reached the winning tile");
        }
        if outcome.changed && self.status == GameStatus::InGame {
            self.spawn();
        }
        outcome.changed
    }
}
