//! Save-file codec: a flat, versionless byte schema for a snapshot sequence.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! u32                     snapshot count (>= 1)
//! per snapshot:
//!   [u8; 361]             cell codes, row-major (0 empty, 1 black, 2 white)
//!   u8                    turn flag (1 black to move, 2 white to move)
//!   u32                   cumulative black captures
//!   u32                   cumulative white captures
//!   u8, u8                last-move x, y (0xFF, 0xFF for "no move")
//! ```
//!
//! Decoding validates every field and the exact stream length. A decoded
//! history replays to bit-identical grids at every index; a malformed
//! stream never produces a partially populated history.

use thiserror::Error;

use crate::board::{Board, Color};
use crate::constants::{CODE_BLACK, CODE_EMPTY, CODE_WHITE, NO_MOVE, SIZE, SNAPSHOT_BYTES};
use crate::history::{BoardState, History};

/// Reasons a byte stream fails to parse into a well-formed history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("stream ends early (expected {expected} bytes, got {actual})")]
    Truncated { expected: usize, actual: usize },
    #[error("stream holds no snapshots")]
    NoSnapshots,
    #[error("invalid cell code {0:#04x}")]
    BadCell(u8),
    #[error("invalid turn flag {0:#04x}")]
    BadTurn(u8),
    #[error("last-move coordinate ({0}, {1}) is off the board")]
    BadCoordinate(u8, u8),
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
}

/// Serialize the full snapshot sequence, regardless of cursor position.
pub fn encode(history: &History) -> Vec<u8> {
    let states = history.states();
    let mut out = Vec::with_capacity(4 + states.len() * SNAPSHOT_BYTES);
    out.extend_from_slice(&(states.len() as u32).to_le_bytes());
    for state in states {
        encode_state(state, &mut out);
    }
    out
}

fn encode_state(state: &BoardState, out: &mut Vec<u8>) {
    for y in 0..SIZE {
        for x in 0..SIZE {
            out.push(match state.board.get(x, y) {
                None => CODE_EMPTY,
                Some(Color::Black) => CODE_BLACK,
                Some(Color::White) => CODE_WHITE,
            });
        }
    }
    out.push(match state.to_move {
        Color::Black => CODE_BLACK,
        Color::White => CODE_WHITE,
    });
    out.extend_from_slice(&state.black_captures.to_le_bytes());
    out.extend_from_slice(&state.white_captures.to_le_bytes());
    match state.last_move {
        Some((x, y)) => {
            out.push(x as u8);
            out.push(y as u8);
        }
        None => {
            out.push(NO_MOVE);
            out.push(NO_MOVE);
        }
    }
}

/// Parse a byte stream back into a history, cursor at the last snapshot.
pub fn decode(bytes: &[u8]) -> Result<History, CodecError> {
    let mut reader = Reader { bytes, offset: 0 };
    let count = reader.read_u32()? as usize;
    if count == 0 {
        return Err(CodecError::NoSnapshots);
    }

    // The claimed count must match the stream length exactly, checked
    // before any allocation is sized from it
    let expected = count.saturating_mul(SNAPSHOT_BYTES).saturating_add(4);
    if bytes.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(CodecError::TrailingBytes(bytes.len() - expected));
    }

    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        states.push(decode_state(&mut reader)?);
    }
    History::from_states(states).ok_or(CodecError::NoSnapshots)
}

fn decode_state(reader: &mut Reader<'_>) -> Result<BoardState, CodecError> {
    let mut board = Board::new();
    for y in 0..SIZE {
        for x in 0..SIZE {
            let cell = match reader.read_u8()? {
                CODE_EMPTY => None,
                CODE_BLACK => Some(Color::Black),
                CODE_WHITE => Some(Color::White),
                other => return Err(CodecError::BadCell(other)),
            };
            board.set(x, y, cell);
        }
    }
    let to_move = match reader.read_u8()? {
        CODE_BLACK => Color::Black,
        CODE_WHITE => Color::White,
        other => return Err(CodecError::BadTurn(other)),
    };
    let black_captures = reader.read_u32()?;
    let white_captures = reader.read_u32()?;
    let (mx, my) = (reader.read_u8()?, reader.read_u8()?);
    let last_move = match (mx, my) {
        (NO_MOVE, NO_MOVE) => None,
        (x, y) if (x as usize) < SIZE && (y as usize) < SIZE => {
            Some((x as usize, y as usize))
        }
        (x, y) => return Err(CodecError::BadCoordinate(x, y)),
    };
    Ok(BoardState {
        board,
        to_move,
        black_captures,
        white_captures,
        last_move,
    })
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Reader<'_> {
    fn read_u8(&mut self) -> Result<u8, CodecError> {
        let b = self.take(1)?;
        Ok(b[0])
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn take(&mut self, n: usize) -> Result<&[u8], CodecError> {
        if self.offset + n > self.bytes.len() {
            return Err(CodecError::Truncated {
                expected: self.offset + n,
                actual: self.bytes.len(),
            });
        }
        let slice = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }
}
