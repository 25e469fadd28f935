use std::io;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal;
use log::debug;

/// Holds the terminal in raw mode for as long as it lives.
///
/// Dropping it restores the previous mode and shows the cursor, so leaving
/// scope by any route (normal return, `?`, or an unwinding panic) gives the
/// terminal back.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("raw mode enabled");
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = terminal::disable_raw_mode();
        debug!("raw mode disabled");
    }
}
