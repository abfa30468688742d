//! Input decoding for the TUI
//!
//! Reads raw bytes from a raw-mode terminal and turns them into
//! [`UserCommand`]s:
//! - single bytes for printable commands (`q`, space)
//! - `ESC [ A` / `ESC [ B` for the arrow keys

use std::io::{self, ErrorKind, Read};

use tracing::debug;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// Logical key decoded from the input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Byte(u8),
    Up,
    Down,
    /// End of input
    Eof,
}

/// User commands triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Move the cursor to the previous item
    ScrollUp,
    /// Move the cursor to the next item
    ScrollDown,
    /// Flip the selected item
    ToggleSelected,
    /// Quit application
    Quit,
}

impl UserCommand {
    /// Convert a decoded key to a user command
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(UserCommand::ScrollUp),
            Key::Down => Some(UserCommand::ScrollDown),
            Key::Byte(b' ') => Some(UserCommand::ToggleSelected),
            // Raw mode delivers Ctrl+C as a byte instead of a signal
            Key::Byte(b'q') | Key::Byte(CTRL_C) | Key::Eof => Some(UserCommand::Quit),
            Key::Byte(_) => None,
        }
    }
}

/// Read a single byte, retrying on `Interrupted`. `None` at end of input.
fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Block until one key has been read
///
/// Returns `Ok(None)` for an escape sequence that is not recognized; the
/// bytes it consumed are discarded.
pub fn read_key<R: Read>(input: &mut R) -> io::Result<Option<Key>> {
    let Some(byte) = read_byte(input)? else {
        return Ok(Some(Key::Eof));
    };
    if byte != ESC {
        return Ok(Some(Key::Byte(byte)));
    }

    if read_byte(input)? != Some(b'[') {
        debug!("Dropping escape without CSI introducer");
        return Ok(None);
    }
    match read_byte(input)? {
        Some(b'A') => Ok(Some(Key::Up)),
        Some(b'B') => Ok(Some(Key::Down)),
        other => {
            debug!("Dropping unrecognized escape sequence: {:?}", other);
            Ok(None)
        }
    }
}

/// Block until one input unit has been read and map it to a command
pub fn read_command<R: Read>(input: &mut R) -> io::Result<Option<UserCommand>> {
    Ok(read_key(input)?.and_then(UserCommand::from_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(bytes: &[u8]) -> Option<UserCommand> {
        read_command(&mut Cursor::new(bytes.to_vec())).unwrap()
    }

    #[test]
    fn test_arrow_sequences() {
        assert_eq!(decode(b"\x1b[A"), Some(UserCommand::ScrollUp));
        assert_eq!(decode(b"\x1b[B"), Some(UserCommand::ScrollDown));
    }

    #[test]
    fn test_unrecognized_sequence_yields_nothing() {
        assert_eq!(decode(b"\x1b[Z"), None);
        assert_eq!(decode(b"\x1bO"), None);
        assert_eq!(decode(b"\x1b"), None);
        assert_eq!(decode(b"\x1b["), None);
    }

    #[test]
    fn test_single_byte_commands() {
        assert_eq!(decode(b"q"), Some(UserCommand::Quit));
        assert_eq!(decode(b" "), Some(UserCommand::ToggleSelected));
        assert_eq!(decode(b"\x03"), Some(UserCommand::Quit));
        assert_eq!(decode(b"x"), None);
        assert_eq!(decode(b"Q"), None);
    }

    #[test]
    fn test_eof_quits() {
        assert_eq!(decode(b""), Some(UserCommand::Quit));
    }

    #[test]
    fn test_sequence_consumes_exactly_three_bytes() {
        let mut input = Cursor::new(b"\x1b[Bq".to_vec());
        assert_eq!(read_command(&mut input).unwrap(), Some(UserCommand::ScrollDown));
        assert_eq!(read_command(&mut input).unwrap(), Some(UserCommand::Quit));
    }

    #[test]
    fn test_key_to_command() {
        assert_eq!(UserCommand::from_key(Key::Up), Some(UserCommand::ScrollUp));
        assert_eq!(UserCommand::from_key(Key::Eof), Some(UserCommand::Quit));
        assert_eq!(UserCommand::from_key(Key::Byte(b'j')), None);
    }
}
