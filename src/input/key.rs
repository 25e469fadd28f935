use std::fmt;

/// Whether a key arrived as a single unit or behind an escape lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lead {
    Plain,
    Escaped,
}

/// One logical keypress: the raw code plus how it was introduced.
///
/// `Key::plain(b'A')` (Shift+a) and `Key::escaped(b'A')` (Up arrow) are
/// different keys. Case is never folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: u8,
    pub lead: Lead,
}

impl Key {
    #[inline]
    pub const fn plain(code: u8) -> Self {
        Key { code, lead: Lead::Plain }
    }

    #[inline]
    pub const fn escaped(code: u8) -> Self {
        Key { code, lead: Lead::Escaped }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lead, self.code) {
            (Lead::Plain, c) if c.is_ascii_graphic() => write!(f, "{}", c as char),
            (Lead::Plain, c) => write!(f, "{c:#04x}"),
            (Lead::Escaped, c) if c.is_ascii_graphic() => write!(f, "ESC+{}", c as char),
            (Lead::Escaped, c) => write!(f, "ESC+{c:#04x}"),
        }
    }
}

/// Named keys. Arrow codes are the final byte of the `ESC [ x` sequences
/// sent by ANSI terminals.
pub mod keys {
    use super::Key;

    pub const W: Key = Key::plain(b'w');
    pub const SHIFT_W: Key = Key::plain(b'W');
    pub const UP_ARROW: Key = Key::escaped(b'A');
    pub const A: Key = Key::plain(b'a');
    pub const SHIFT_A: Key = Key::plain(b'A');
    pub const LEFT_ARROW: Key = Key::escaped(b'D');
    pub const S: Key = Key::plain(b's');
    pub const SHIFT_S: Key = Key::plain(b'S');
    pub const DOWN_ARROW: Key = Key::escaped(b'B');
    pub const D: Key = Key::plain(b'd');
    pub const SHIFT_D: Key = Key::plain(b'D');
    pub const RIGHT_ARROW: Key = Key::escaped(b'C');
    pub const Y: Key = Key::plain(b'y');
    pub const SHIFT_Y: Key = Key::plain(b'Y');
    pub const N: Key = Key::plain(b'n');
    pub const SHIFT_N: Key = Key::plain(b'N');
    pub const Q: Key = Key::plain(b'q');
    pub const SHIFT_Q: Key = Key::plain(b'Q');
    pub const R: Key = Key::plain(b'r');
    pub const SHIFT_R: Key = Key::plain(b'R');
    /// Raw mode turns off signal generation, so Ctrl-C arrives as a byte.
    pub const CTRL_C: Key = Key::plain(0x03);

    /// The only keys accepted by a yes/no prompt.
    pub const CONFIRM: [Key; 4] = [Y, SHIFT_Y, N, SHIFT_N];
}
