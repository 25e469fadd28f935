//! term-2048: the 2048 sliding-tile game in a raw-mode terminal.
//!
//! This crate provides:
//! - A `Board` with a tracked empty count and the shift/merge engine (`engine`)
//! - Tile spawning and win/loss tracking (`engine::Game`)
//! - Raw key decoding and key-to-command binding (`input`)
//! - The run loop tying input, game and output together (`game`)
//! - An ANSI renderer and a raw-mode guard (`render`, `terminal`)
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Direction, Game, GameStatus};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game with a seeded RNG
//! let mut game = Game::with_rng(StdRng::seed_from_u64(42));
//! game.reset();
//! assert_eq!(game.board().empty_count(), 14);
//!
//! // A move that changes the board also spawns one tile
//! for dir in Direction::ALL {
//!     game.process_move(dir);
//! }
//! assert_eq!(game.status(), GameStatus::InGame);
//! ```
//!
//! Driving the controller from scripted input:
//! ```
//! use term_2048::engine::Game;
//! use term_2048::game::GameController;
//! use term_2048::input::KeyDecoder;
//! use term_2048::render::AnsiRenderer;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let game = Game::with_rng(StdRng::seed_from_u64(1));
//! let input = KeyDecoder::new(&b"\x1b[Aaqy"[..]);
//! let mut ctl = GameController::new(game, input, AnsiRenderer::new(Vec::new(), (0, 0)))
//!     .with_key_guide(false);
//! ctl.start().unwrap();
//! ctl.run_until_quit().unwrap();
//! ```
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod input;
pub mod render;
pub mod terminal;
