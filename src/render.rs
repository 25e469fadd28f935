//! Terminal output. The controller only talks to the `Renderer` trait; the
//! ANSI implementation positions everything relative to a fixed origin.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::engine::{Board, HEIGHT};

const KEY_GUIDE: &[&str] = &[
    "========2048 Game========",
    "--------Key Guide--------",
    " W / Up Arrow    -> Up",
    " S / Down Arrow  -> Down",
    " A / Left Arrow  -> Left",
    " D / Right Arrow -> Right",
    "-------------------------",
    " R -> Restart",
    " Q -> Quit",
    "-------------------------",
    "",
    "Press Any key To Start...",
];

/// Everything the game needs to show.
pub trait Renderer {
    /// Draw the whole board.
    fn draw(&mut self, board: &Board) -> io::Result<()>;

    /// Show a message and a yes/no question below the board.
    fn show_prompt(&mut self, message: &str, question: &str) -> io::Result<()>;

    /// Erase what `show_prompt` drew.
    fn clear_prompt(&mut self) -> io::Result<()>;

    /// Show the startup key guide.
    fn show_key_guide(&mut self) -> io::Result<()>;

    fn clear_screen(&mut self) -> io::Result<()>;

    /// Leave the terminal tidy when the game ends.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Renders with ANSI escape sequences through crossterm.
pub struct AnsiRenderer<W: Write> {
    out: W,
    /// Zero-based (column, row) of the board's top-left corner.
    origin: (u16, u16),
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, origin: (u16, u16)) -> Self {
        AnsiRenderer { out, origin }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// First row below the board, where prompts go.
    fn prompt_row(&self) -> u16 {
        self.origin.1 + (HEIGHT * 2 + 1) as u16
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn draw(&mut self, board: &Board) -> io::Result<()> {
        let (x, y) = self.origin;
        // Hide every time: resizing the window can bring the cursor back.
        queue!(self.out, Hide)?;
        for (offset, line) in board.to_string().lines().enumerate() {
            queue!(self.out, MoveTo(x, y + offset as u16), Print(line))?;
        }
        self.out.flush()
    }

    fn show_prompt(&mut self, message: &str, question: &str) -> io::Result<()> {
        let (x, row) = (self.origin.0, self.prompt_row());
        queue!(
            self.out,
            MoveTo(x, row),
            Print(message),
            MoveTo(x, row + 1),
            Print(format!("{question} (Y/N)"))
        )?;
        self.out.flush()
    }

    fn clear_prompt(&mut self) -> io::Result<()> {
        let (x, row) = (self.origin.0, self.prompt_row());
        queue!(
            self.out,
            MoveTo(x, row),
            Clear(ClearType::CurrentLine),
            MoveTo(x, row + 1),
            Clear(ClearType::CurrentLine)
        )?;
        self.out.flush()
    }

    fn show_key_guide(&mut self) -> io::Result<()> {
        let (x, y) = self.origin;
        for (offset, line) in KEY_GUIDE.iter().enumerate() {
            queue!(self.out, MoveTo(x, y + offset as u16), Print(line))?;
        }
        self.out.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        let row = self.prompt_row();
        queue!(self.out, MoveTo(0, row), Show)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut AnsiRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut r = AnsiRenderer::new(Vec::new(), (0, 0));
        f(&mut r).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn draw_positions_each_line() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1024]]);
        let out = rendered(|r| r.draw(&board));
        assert!(out.contains("|2   |    |    |    |"));
        assert!(out.contains("|    |    |    |1024|"));
        // Cursor addressing is one-based: row 9 holds the bottom rule.
        assert!(out.contains("\x1b[9;1H---------------------"));
    }

    #[test]
    fn draw_honours_origin() {
        let mut r = AnsiRenderer::new(Vec::new(), (4, 2));
        r.draw(&Board::new()).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("\x1b[3;5H---------------------"));
    }

    #[test]
    fn prompt_goes_below_board() {
        let out = rendered(|r| r.show_prompt("You Win!", "Restart?"));
        assert!(out.contains("\x1b[10;1HYou Win!"));
        assert!(out.contains("\x1b[11;1HRestart? (Y/N)"));
    }

    #[test]
    fn finish_parks_cursor_below_board() {
        let out = rendered(|r| r.finish());
        assert_eq!(out, "\x1b[10;1H\x1b[?25h");
    }

    #[test]
    fn key_guide_lists_controls() {
        let out = rendered(|r| r.show_key_guide());
        assert!(out.contains("Key Guide"));
        assert!(out.contains("Press Any key To Start..."));
    }
}
