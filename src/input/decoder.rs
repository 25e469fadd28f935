use std::io::{self, Read};

use log::trace;

use super::key::Key;

/// Escape lead byte.
const ESC: u8 = 0x1b;
/// CSI introducer (`ESC [`).
const CSI: u8 = b'[';
/// SS3 introducer (`ESC O`), sent for arrows in application cursor mode.
const SS3: u8 = b'O';
/// Terminator after numbered keys such as `ESC [ 3 ~`.
const TILDE: u8 = b'~';

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("end of input while reading a key")]
    EndOfInput,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    AwaitIntroducer,
    AwaitEscapedCode,
    AwaitTerminator(u8),
}

/// Turns a byte stream into `Key`s, one unit at a time.
///
/// Every read blocks until the underlying reader has a byte; a key is only
/// returned once its whole sequence has arrived. Running out of input at any
/// point is a `DecodeError::EndOfInput`.
///
/// ```
/// use term_2048::input::{keys, KeyDecoder};
/// let mut dec = KeyDecoder::new(&b"w\x1b[A"[..]);
/// assert_eq!(dec.next_key().unwrap(), keys::W);
/// assert_eq!(dec.next_key().unwrap(), keys::UP_ARROW);
/// assert!(dec.next_key().is_err());
/// ```
pub struct KeyDecoder<R> {
    reader: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(reader: R) -> Self {
        KeyDecoder { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_unit(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Err(DecodeError::EndOfInput),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::Io(e)),
            }
        }
    }

    /// Block until one complete key has been read.
    pub fn next_key(&mut self) -> Result<Key, DecodeError> {
        let mut state = State::Idle;
        loop {
            let unit = self.read_unit()?;
            state = match (state, unit) {
                (State::Idle, ESC) => State::AwaitIntroducer,
                (State::Idle, code) => return Ok(Key::plain(code)),
                (State::AwaitIntroducer, CSI | SS3) => State::AwaitEscapedCode,
                // Alt+key arrives as ESC followed directly by the key.
                (State::AwaitIntroducer, code) => return Ok(Key::escaped(code)),
                (State::AwaitEscapedCode, code) if code.is_ascii_digit() => State::AwaitTerminator(code),
                (State::AwaitEscapedCode, code) => return Ok(Key::escaped(code)),
                (State::AwaitTerminator(code), end) => {
                    if end != TILDE {
                        trace!("expected '~' after ESC [ {}, got {end:#04x}", code as char);
                    }
                    return Ok(Key::escaped(code));
                }
            };
        }
    }

    /// Block until exactly `key` is pressed. Everything else is discarded.
    pub fn wait_for_key(&mut self, key: Key) -> Result<(), DecodeError> {
        while self.next_key()? != key {}
        Ok(())
    }

    /// Block until any key in `accepted` is pressed and return it.
    pub fn wait_for_keys(&mut self, accepted: &[Key]) -> Result<Key, DecodeError> {
        loop {
            let key = self.next_key()?;
            if accepted.contains(&key) {
                return Ok(key);
            }
            trace!("ignoring {key} while waiting");
        }
    }

    /// Block for a single key, whatever it is.
    pub fn wait_any_key(&mut self) -> Result<Key, DecodeError> {
        self.next_key()
    }
}
