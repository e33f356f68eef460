//! Constants for board geometry and the save-file schema.
//!
//! The board is fixed at the traditional 19x19 size; other sizes are out of
//! scope for this crate. The grid is stored as a flat row-major array, so
//! most of the code works with `y * SIZE + x` indices.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. Fixed at the traditional 19x19.
pub const SIZE: usize = 19;

/// Total number of playable points on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Column letters used for coordinate display, skipping 'I' per Go convention.
pub const COLUMN_LETTERS: &[u8; SIZE] = b"ABCDEFGHJKLMNOPQRST";

// =============================================================================
// Save-File Schema
// =============================================================================

/// Cell code for an empty point in the encoded snapshot stream.
pub const CODE_EMPTY: u8 = 0;

/// Cell code for a black stone.
pub const CODE_BLACK: u8 = 1;

/// Cell code for a white stone.
pub const CODE_WHITE: u8 = 2;

/// Sentinel byte for "no last move" in an encoded snapshot (initial state).
pub const NO_MOVE: u8 = 0xFF;

/// Encoded size of one snapshot: 361 cell bytes, a turn byte, two u32
/// capture counters, and a 2-byte last-move coordinate.
pub const SNAPSHOT_BYTES: usize = CELLS + 1 + 4 + 4 + 2;
