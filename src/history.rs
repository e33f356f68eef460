//! Move history: an ordered sequence of immutable board snapshots with a
//! movable cursor.
//!
//! Index 0 is always the initial empty-board state, so the cursor index is
//! also the move number shown to the user. Rewinding and then playing a new
//! move branches the game: the abandoned future states are discarded, not
//! kept on a redo stack.

use crate::board::{Board, Color, Point};

/// One immutable snapshot of full game state.
///
/// Each snapshot owns its own grid copy; snapshots are never aliased and
/// never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    /// Full copy of the grid at this point in the game.
    pub board: Board,
    /// Color to move next.
    pub to_move: Color,
    /// Cumulative stones captured by Black.
    pub black_captures: u32,
    /// Cumulative stones captured by White.
    pub white_captures: u32,
    /// The move that produced this state, or `None` for the initial state.
    pub last_move: Option<Point>,
}

impl BoardState {
    /// The empty-board initial state: Black to move, no captures.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
            black_captures: 0,
            white_captures: 0,
            last_move: None,
        }
    }
}

/// Result of committing a new state to the history.
#[derive(Debug, PartialEq, Eq)]
pub enum Commit {
    /// The state was appended at the head.
    Appended,
    /// The cursor had been rewound; this many abandoned future states were
    /// discarded before appending.
    Branched { discarded: usize },
}

/// Ordered sequence of snapshots plus the cursor currently mirrored onto
/// the live board. The sequence is never empty.
#[derive(Debug, PartialEq, Eq)]
pub struct History {
    states: Vec<BoardState>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A fresh history holding only the initial empty-board state.
    pub fn new() -> Self {
        Self {
            states: vec![BoardState::initial()],
            cursor: 0,
        }
    }

    /// Rebuild a history from a decoded snapshot sequence, cursor at the
    /// last snapshot. Returns `None` for an empty sequence.
    pub fn from_states(states: Vec<BoardState>) -> Option<Self> {
        if states.is_empty() {
            return None;
        }
        let cursor = states.len() - 1;
        Some(Self { states, cursor })
    }

    /// Drop everything and return to a single initial state.
    pub fn reset(&mut self) {
        self.states.clear();
        self.states.push(BoardState::initial());
        self.cursor = 0;
    }

    /// Append a freshly committed state. If the cursor had been rewound,
    /// the abandoned future is truncated first (the branch point).
    pub fn commit(&mut self, state: BoardState) -> Commit {
        let discarded = self.states.len() - 1 - self.cursor;
        self.states.truncate(self.cursor + 1);
        self.states.push(state);
        self.cursor = self.states.len() - 1;
        if discarded > 0 {
            Commit::Branched { discarded }
        } else {
            Commit::Appended
        }
    }

    /// Move the cursor and return the snapshot there, for the caller to
    /// replay onto the live board. Out-of-range indices are a no-op
    /// returning `None`; the cursor is never corrupted.
    pub fn jump_to(&mut self, index: usize) -> Option<&BoardState> {
        if index >= self.states.len() {
            return None;
        }
        self.cursor = index;
        Some(&self.states[index])
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &BoardState {
        &self.states[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// All snapshots in order, regardless of cursor position.
    pub fn states(&self) -> &[BoardState] {
        &self.states
    }
}
