//! The controller: reads keys, runs the bound command and decides whether to
//! redraw, keep going or stop.

use std::io::{self, Read};

use log::{debug, info, trace};

use crate::engine::{Direction, Game, GameStatus};
use crate::input::{keys, DecodeError, KeyDecoder, KeyDispatchTable};
use crate::render::Renderer;

/// What a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// What a command asks of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Stop the loop.
    Quit,
    /// Nothing visible changed; carry on without redrawing.
    Unchanged,
    /// The board changed; redraw and check for a finished game.
    Redraw,
}

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("input failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Owns the game, the key table, the input decoder and the renderer.
pub struct GameController<R, D> {
    game: Game,
    decoder: KeyDecoder<R>,
    renderer: D,
    table: KeyDispatchTable<Command>,
    show_key_guide: bool,
}

impl<R: Read, D: Renderer> GameController<R, D> {
    /// A controller with an empty key table. `start` fills it in.
    pub fn new(game: Game, decoder: KeyDecoder<R>, renderer: D) -> Self {
        GameController { game, decoder, renderer, table: KeyDispatchTable::new(), show_key_guide: true }
    }

    /// Whether `start` shows the key guide first (default true).
    pub fn with_key_guide(mut self, show: bool) -> Self {
        self.show_key_guide = show;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    pub fn table(&self) -> &KeyDispatchTable<Command> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut KeyDispatchTable<Command> {
        &mut self.table
    }

    /// Bind WASD (both cases), the arrows, R, Q and Ctrl-C.
    pub fn register_default_bindings(&mut self) {
        let t = &mut self.table;
        t.register_all(&[keys::W, keys::SHIFT_W, keys::UP_ARROW], Command::Move(Direction::Up));
        t.register_all(&[keys::A, keys::SHIFT_A, keys::LEFT_ARROW], Command::Move(Direction::Left));
        t.register_all(&[keys::S, keys::SHIFT_S, keys::DOWN_ARROW], Command::Move(Direction::Down));
        t.register_all(&[keys::D, keys::SHIFT_D, keys::RIGHT_ARROW], Command::Move(Direction::Right));
        t.register_all(&[keys::R, keys::SHIFT_R], Command::Restart);
        t.register_all(&[keys::Q, keys::SHIFT_Q, keys::CTRL_C], Command::Quit);
    }

    /// Show the key guide (if enabled), deal the first board and only then
    /// bind keys, so nothing typed during startup triggers a command.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.show_key_guide {
            self.renderer.show_key_guide()?;
            self.decoder.wait_any_key()?;
            self.renderer.clear_screen()?;
        }
        self.reset_game()?;
        self.register_default_bindings();
        Ok(())
    }

    /// Fresh board with two tiles, drawn immediately.
    pub fn reset_game(&mut self) -> io::Result<()> {
        self.game.reset();
        self.renderer.draw(self.game.board())
    }

    /// Ask a yes/no question; only y/Y/n/N are accepted.
    pub fn confirm(&mut self, message: &str, question: &str) -> Result<bool, GameError> {
        self.renderer.show_prompt(message, question)?;
        let answer = self.decoder.wait_for_keys(&keys::CONFIRM)?;
        self.renderer.clear_prompt()?;
        Ok(answer == keys::Y || answer == keys::SHIFT_Y)
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Result<Signal, GameError> {
        match command {
            Command::Move(dir) => {
                if self.game.process_move(dir) {
                    Ok(Signal::Redraw)
                } else {
                    Ok(Signal::Unchanged)
                }
            }
            Command::Restart => {
                if self.confirm("You Press Restart Key!", "Restart?")? {
                    info!("restart requested");
                    // Resetting draws, so the loop has nothing left to redraw.
                    self.reset_game()?;
                }
                Ok(Signal::Unchanged)
            }
            Command::Quit => {
                if self.confirm("You Press Quit Key!", "Quit?")? {
                    info!("quit requested");
                    Ok(Signal::Quit)
                } else {
                    Ok(Signal::Unchanged)
                }
            }
        }
    }

    /// Decode one key and run its command. `None` means the key is unbound,
    /// which is different from a command that changed nothing.
    pub fn dispatch_once(&mut self) -> Result<Option<Signal>, GameError> {
        let key = self.decoder.next_key()?;
        let Some(&command) = self.table.lookup(key) else {
            trace!("unbound key {key}");
            return Ok(None);
        };
        debug!("key {key} -> {command:?}");
        self.execute(command).map(Some)
    }

    /// Keep dispatching until a bound key is pressed.
    pub fn dispatch_at_least_one(&mut self) -> Result<Signal, GameError> {
        loop {
            if let Some(signal) = self.dispatch_once()? {
                return Ok(signal);
            }
        }
    }

    /// One turn of the run loop. Returns false once the player is done.
    pub fn step(&mut self) -> Result<bool, GameError> {
        match self.dispatch_at_least_one()? {
            Signal::Quit => return Ok(false),
            Signal::Unchanged => return Ok(true),
            Signal::Redraw => self.renderer.draw(self.game.board())?,
        }

        let message = match self.game.status() {
            GameStatus::InGame => return Ok(true),
            GameStatus::Won => "You Win!",
            GameStatus::Lost => "You Lost...",
        };
        if !self.confirm(message, "Restart?")? {
            return Ok(false);
        }
        self.reset_game()?;
        Ok(true)
    }

    /// Play until the player quits. Input errors end the loop with an error.
    pub fn run_until_quit(&mut self) -> Result<(), GameError> {
        while self.step()? {}
        info!("leaving with highest tile {}", self.game.board().highest_tile());
        self.renderer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Pos, SIZE};
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct Recorder {
        draws: Vec<Board>,
        prompts: Vec<(String, String)>,
        cleared_prompts: usize,
        guides: usize,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, board: &Board) -> io::Result<()> {
            self.draws.push(board.clone());
            Ok(())
        }
        fn show_prompt(&mut self, message: &str, question: &str) -> io::Result<()> {
            self.prompts.push((message.to_string(), question.to_string()));
            Ok(())
        }
        fn clear_prompt(&mut self) -> io::Result<()> {
            self.cleared_prompts += 1;
            Ok(())
        }
        fn show_key_guide(&mut self) -> io::Result<()> {
            self.guides += 1;
            Ok(())
        }
        fn clear_screen(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn controller(input: &[u8]) -> GameController<&[u8], Recorder> {
        let game = Game::new(StdRng::seed_from_u64(99), 1.0);
        let mut c = GameController::new(game, KeyDecoder::new(input), Recorder::default());
        c.register_default_bindings();
        c
    }

    #[test]
    fn unbound_key_is_not_a_signal() {
        let mut c = controller(b"x");
        assert_eq!(c.dispatch_once().unwrap(), None);
    }

    #[test]
    fn blocked_move_is_unchanged() {
        let mut c = controller(b"a");
        c.game_mut().board_mut().set(Pos::new(0, 0), 2);
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Unchanged));
        assert!(c.renderer().draws.is_empty());
    }

    #[test]
    fn all_move_keys_are_bound() {
        for (bytes, dir) in [
            (&b"w"[..], Direction::Up),
            (&b"W"[..], Direction::Up),
            (&b"\x1b[A"[..], Direction::Up),
            (&b"S"[..], Direction::Down),
            (&b"\x1b[B"[..], Direction::Down),
            (&b"a"[..], Direction::Left),
            (&b"\x1b[D"[..], Direction::Left),
            (&b"D"[..], Direction::Right),
            (&b"\x1b[C"[..], Direction::Right),
        ] {
            let key = KeyDecoder::new(bytes).next_key().unwrap();
            let c = controller(b"");
            assert_eq!(c.table().lookup(key), Some(&Command::Move(dir)), "{key}");
        }
    }

    #[test]
    fn move_key_redraws_after_step() {
        let mut c = controller(b"a");
        c.game_mut().board_mut().set(Pos::new(3, 0), 2);
        assert!(c.step().unwrap());
        assert_eq!(c.renderer().draws.len(), 1);
        assert_eq!(c.renderer().draws[0].get(Pos::new(0, 0)), 2);
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut c = controller(b"qxnQy");
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Unchanged));
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Quit));
        assert_eq!(c.renderer().prompts.len(), 2);
        assert_eq!(c.renderer().cleared_prompts, 2);
        assert_eq!(c.renderer().prompts[0].1, "Quit?");
    }

    #[test]
    fn ctrl_c_asks_to_quit() {
        let mut c = controller(b"\x03y");
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Quit));
        assert_eq!(c.renderer().prompts[0].0, "You Press Quit Key!");
    }

    #[test]
    fn unregistered_key_becomes_unbound() {
        let mut c = controller(b"qQ");
        assert_eq!(c.table_mut().unregister(keys::Q), Some(Command::Quit));
        assert_eq!(c.dispatch_once().unwrap(), None);
        assert!(c.renderer().prompts.is_empty());
        assert!(c.table().is_registered(keys::SHIFT_Q));
    }

    #[test]
    fn restart_resets_and_draws_itself() {
        let mut c = controller(b"rY");
        c.game_mut().board_mut().set(Pos::new(1, 1), 64);
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Unchanged));
        assert_eq!(c.renderer().draws.len(), 1);
        assert_eq!(c.game().board().empty_count(), SIZE - 2);
        assert_eq!(c.game().board().highest_tile(), 2);
    }

    #[test]
    fn declined_restart_keeps_board() {
        let mut c = controller(b"Rn");
        c.game_mut().board_mut().set(Pos::new(1, 1), 64);
        assert_eq!(c.dispatch_once().unwrap(), Some(Signal::Unchanged));
        assert!(c.renderer().draws.is_empty());
        assert_eq!(c.game().board().get(Pos::new(1, 1)), 64);
    }

    #[test]
    fn win_prompts_and_declining_ends_loop() {
        let mut c = controller(b"dn");
        c.game_mut().board_mut().set(Pos::new(0, 2), 1024);
        c.game_mut().board_mut().set(Pos::new(1, 2), 1024);
        assert!(!c.step().unwrap());
        assert_eq!(c.game().status(), GameStatus::Won);
        assert_eq!(c.renderer().prompts[0].0, "You Win!");
    }

    #[test]
    fn loss_prompts_and_accepting_resets() {
        let mut c = controller(b"dy");
        *c.game_mut().board_mut() =
            Board::from_rows([[2, 8, 2, 8], [8, 2, 8, 2], [16, 8, 2, 8], [2, 2, 16, 32]]);
        assert!(c.step().unwrap());
        assert_eq!(c.renderer().prompts[0].0, "You Lost...");
        assert_eq!(c.game().status(), GameStatus::InGame);
        // One draw for the move, one for the reset.
        assert_eq!(c.renderer().draws.len(), 2);
    }

    #[test]
    fn start_waits_for_guide_then_binds() {
        let game = Game::with_rng(StdRng::seed_from_u64(1));
        let mut c = GameController::new(game, KeyDecoder::new(&b"z"[..]), Recorder::default());
        assert!(c.table().is_empty());
        c.start().unwrap();
        assert_eq!(c.renderer().guides, 1);
        assert_eq!(c.renderer().draws.len(), 1);
        assert_eq!(c.table().len(), 17);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut c = controller(b"xx");
        assert!(matches!(c.run_until_quit(), Err(GameError::Decode(DecodeError::EndOfInput))));
    }
}
