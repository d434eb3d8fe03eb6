use crate::error::{PegError, Result};
use serde::Serialize;
use std::fmt;

/// Number of rows in the triangle.
pub const ROWS: u8 = 5;
/// Number of cells on the board.
pub const CELLS: u8 = ROWS * (ROWS + 1) / 2;

/// One of the 15 cells, numbered row by row from the apex:
///
/// ```text
///         1
///       2   3
///     4   5   6
///   7   8   9  10
/// 11  12  13  14  15
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position(u8);

impl Position {
    pub const APEX: Position = Position(1);

    pub fn new(n: u8) -> Result<Self> {
        if (1..=CELLS).contains(&n) {
            Ok(Self(n))
        } else {
            Err(PegError::InvalidConfiguration(format!("position {n} is outside 1..={CELLS}")))
        }
    }

    /// Cell at 0-indexed `row`, `col`, or `None` off the board.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row >= ROWS as usize || col > row { return None; }
        Some(Self((row * (row + 1) / 2 + col + 1) as u8))
    }

    pub fn get(self) -> u8 { self.0 }

    /// 0-indexed (row, col) of this cell.
    pub fn row_col(self) -> (usize, usize) {
        let n = self.0 as usize;
        let mut row = 0usize;
        while (row + 1) * (row + 2) / 2 < n { row += 1; }
        (row, n - row * (row + 1) / 2 - 1)
    }

    pub(crate) fn bit(self) -> u16 { 1 << (self.0 - 1) }

    pub fn all() -> impl Iterator<Item = Position> {
        (1..=CELLS).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl TryFrom<u8> for Position {
    type Error = PegError;
    fn try_from(n: u8) -> Result<Self> { Self::new(n) }
}

/// A jump: the peg on `from` jumps over `over` and lands on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Position,
    pub over: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, over: Position, to: Position) -> Self { Self { from, over, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.from, self.over, self.to)
    }
}
