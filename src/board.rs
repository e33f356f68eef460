//! The 19x19 board: stone storage, liberty search, and capture resolution.
//!
//! The grid is a flat row-major array of `Option<Color>`. All rule queries
//! work over 4-directional adjacency; the flood fills are iterative with an
//! explicit worklist so a pathological full-board group (361 stones) never
//! touches recursion depth.

use std::fmt;

use crate::constants::{CELLS, COLUMN_LETTERS, SIZE};

/// Stone color. Empty points are represented as `None` in the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player. Involution: `c.opponent().opponent() == c`.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A point on the board as zero-based (x, y) with y growing downward.
pub type Point = (usize, usize);

/// The 19x19 grid of stones.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; CELLS],
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{self}")?;
        write!(f, "}}")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    fn idx(x: usize, y: usize) -> usize {
        y * SIZE + x
    }

    /// Stone at (x, y), or `None` for an empty or out-of-range point.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= SIZE || y >= SIZE {
            return None;
        }
        self.cells[Self::idx(x, y)]
    }

    /// True iff (x, y) is on the board and holds no stone.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        x < SIZE && y < SIZE && self.cells[Self::idx(x, y)].is_none()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Option<Color>) {
        debug_assert!(x < SIZE && y < SIZE);
        self.cells[Self::idx(x, y)] = cell;
    }

    fn neighbors(x: usize, y: usize) -> impl Iterator<Item = Point> {
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < SIZE {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < SIZE {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Write a stone to an empty point. Returns false (and leaves the board
    /// untouched) when the point is out of range or occupied; never
    /// overwrites a stone. Rule enforcement lives in [`crate::engine`].
    pub fn try_place(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x >= SIZE || y >= SIZE {
            return false;
        }
        let i = Self::idx(x, y);
        if self.cells[i].is_some() {
            return false;
        }
        self.cells[i] = Some(color);
        true
    }

    /// True iff the connected group containing the stone at (x, y) has at
    /// least one empty orthogonal neighbor. Returns false for an empty
    /// start point. Short-circuits on the first liberty found.
    pub fn has_liberty(&self, x: usize, y: usize) -> bool {
        let Some(color) = self.get(x, y) else {
            return false;
        };
        let mut stack = vec![(x, y)];
        let mut visited = [false; CELLS];
        while let Some((cx, cy)) = stack.pop() {
            let i = Self::idx(cx, cy);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            for (nx, ny) in Self::neighbors(cx, cy) {
                match self.cells[Self::idx(nx, ny)] {
                    None => return true,
                    Some(c) if c == color && !visited[Self::idx(nx, ny)] => {
                        stack.push((nx, ny));
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// Remove every opponent group adjacent to the just-played point at
    /// (x, y) that has lost its last liberty. Returns the total number of
    /// stones removed. A neighbor already emptied by an earlier removal in
    /// the same call reads as `None` and is skipped.
    pub fn resolve_captures(&mut self, x: usize, y: usize, placed: Color) -> u32 {
        let opp = placed.opponent();
        let mut total = 0;
        for (nx, ny) in Self::neighbors(x, y) {
            if self.get(nx, ny) == Some(opp) && !self.has_liberty(nx, ny) {
                total += self.remove_group(nx, ny);
            }
        }
        total
    }

    /// Flood-fill removal of the whole group containing the stone at (x, y).
    fn remove_group(&mut self, x: usize, y: usize) -> u32 {
        let color = self.cells[Self::idx(x, y)];
        debug_assert!(color.is_some());
        let mut stack = vec![(x, y)];
        let mut count = 0;
        while let Some((cx, cy)) = stack.pop() {
            let i = Self::idx(cx, cy);
            if self.cells[i] != color {
                continue;
            }
            self.cells[i] = None;
            count += 1;
            for (nx, ny) in Self::neighbors(cx, cy) {
                if self.cells[Self::idx(nx, ny)] == color {
                    stack.push((nx, ny));
                }
            }
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..SIZE {
            write!(f, "{:>2} ", SIZE - y)?;
            for x in 0..SIZE {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &letter in COLUMN_LETTERS {
            write!(f, "{} ", letter as char)?;
        }
        writeln!(f)
    }
}

/// Parse a coordinate string like "D4" into board (x, y).
///
/// Columns run A-T skipping I (Go convention); rows run 1-19 bottom to top.
/// Returns `None` for malformed or out-of-range input.
pub fn parse_coord(s: &str) -> Option<Point> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let letter = bytes[0].to_ascii_uppercase();
    let x = COLUMN_LETTERS.iter().position(|&c| c == letter)?;
    let row: usize = s[1..].parse().ok()?;
    if row == 0 || row > SIZE {
        return None;
    }
    Some((x, SIZE - row))
}

/// Format board (x, y) as a coordinate string like "D4".
pub fn format_coord((x, y): Point) -> String {
    debug_assert!(x < SIZE && y < SIZE);
    format!("{}{}", COLUMN_LETTERS[x] as char, SIZE - y)
}
