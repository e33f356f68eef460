//! The game engine: move validation, commit protocol, and the public
//! interface consumed by rendering and browsing layers.
//!
//! Moves run against a scratch copy of the live board, so a rejected move
//! has zero observable effect. Capture resolution runs before the suicide
//! check: capturing an opponent group can itself supply the liberty that
//! legalizes an otherwise-suicidal placement.

use thiserror::Error;

use crate::board::{Board, Color, Point};
use crate::codec::{self, CodecError};
use crate::constants::SIZE;
use crate::history::{BoardState, Commit, History};

/// Why a move was rejected. The engine is left exactly as before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates are off the board")]
    OutOfBounds,
    #[error("point is already occupied")]
    Occupied,
    #[error("suicide: the placed group would have no liberties")]
    Suicide,
}

/// A committed move.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponent stones removed by this move.
    pub captured: u32,
    /// True when the move was played from a rewound cursor, discarding the
    /// abandoned future states.
    pub branched: bool,
}

/// One open game: the live board plus its snapshot history.
///
/// Multiple engines are fully independent; the live board is exclusively
/// owned and only ever copied, never aliased.
pub struct Engine {
    board: Board,
    to_move: Color,
    black_captures: u32,
    white_captures: u32,
    last_move: Option<Point>,
    history: History,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A fresh game: empty board, Black to move, history holding the single
    /// initial state.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
            black_captures: 0,
            white_captures: 0,
            last_move: None,
            history: History::new(),
        }
    }

    /// Restore a saved game. The cursor lands on the last snapshot, which
    /// is mirrored onto the live board.
    pub fn load(bytes: &[u8]) -> Result<Self, CodecError> {
        let history = codec::decode(bytes)?;
        let mut engine = Self {
            board: Board::new(),
            to_move: Color::Black,
            black_captures: 0,
            white_captures: 0,
            last_move: None,
            history,
        };
        engine.mirror_cursor();
        Ok(engine)
    }

    /// Serialize the full history, regardless of cursor position.
    pub fn save(&self) -> Vec<u8> {
        codec::encode(&self.history)
    }

    /// Drop the game and start over from the initial empty state.
    pub fn reset(&mut self) {
        self.history.reset();
        self.mirror_cursor();
    }

    /// Play a stone for the color whose turn it is.
    ///
    /// Simulates the placement on a scratch board: bounds and occupancy
    /// checks, then capture resolution, then the suicide check. Only a
    /// legal move is copied back to the live board and snapshotted; a
    /// rejection leaves board, counters, and history untouched.
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, MoveError> {
        if x >= SIZE || y >= SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty(x, y) {
            return Err(MoveError::Occupied);
        }

        let color = self.to_move;
        let mut scratch = self.board.clone();
        let placed = scratch.try_place(x, y, color);
        debug_assert!(placed);

        let captured = scratch.resolve_captures(x, y, color);
        if captured == 0 && !scratch.has_liberty(x, y) {
            return Err(MoveError::Suicide);
        }

        // Commit phase: no intermediate state was visible up to here.
        self.board = scratch;
        match color {
            Color::Black => self.black_captures += captured,
            Color::White => self.white_captures += captured,
        }
        self.to_move = color.opponent();
        self.last_move = Some((x, y));
        let commit = self.history.commit(self.snapshot());
        Ok(MoveOutcome {
            captured,
            branched: matches!(commit, Commit::Branched { .. }),
        })
    }

    /// Move the cursor to a history index and mirror that snapshot onto the
    /// live board. Out-of-range indices are a no-op returning `None`.
    pub fn jump_to(&mut self, index: usize) -> Option<&BoardState> {
        self.history.jump_to(index)?;
        self.mirror_cursor();
        Some(self.history.current())
    }

    /// Read-only snapshot of the state at the cursor, for rendering.
    pub fn current_state(&self) -> &BoardState {
        self.history.current()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The history index currently mirrored onto the live board. Also the
    /// move number: index 0 is the empty board before any move.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    fn snapshot(&self) -> BoardState {
        BoardState {
            board: self.board.clone(),
            to_move: self.to_move,
            black_captures: self.black_captures,
            white_captures: self.white_captures,
            last_move: self.last_move,
        }
    }

    /// Replay the snapshot at the cursor into the live board verbatim.
    fn mirror_cursor(&mut self) {
        let state = self.history.current().clone();
        self.board = state.board;
        self.to_move = state.to_move;
        self.black_captures = state.black_captures;
        self.white_captures = state.white_captures;
        self.last_move = state.last_move;
    }
}
