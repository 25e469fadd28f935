//! Keyboard input: raw byte decoding into `Key`s and the table that binds
//! keys to commands.

mod decoder;
mod dispatch;
mod key;

pub use decoder::{DecodeError, KeyDecoder};
pub use dispatch::KeyDispatchTable;
pub use key::{keys, Key, Lead};
