use crate::board::position::{Move, Position, CELLS, ROWS};
use crate::error::{PegError, Result};
use std::fmt;

const MASK: u16 = (1 << CELLS) - 1;

/// Peg/no-peg state of the whole board packed into 15 bits.
/// Bit `p - 1` is set iff position `p` holds a peg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occupancy(u16);

impl Occupancy {
    pub const EMPTY: Occupancy = Occupancy(0);

    pub fn full() -> Self { Self(MASK) }

    pub fn bits(self) -> u16 { self.0 }

    /// Full board with the given cells left empty.
    pub fn with_empty<I: IntoIterator<Item = Position>>(holes: I) -> Self {
        holes.into_iter().fold(Self::full(), |occ, p| occ.without(p))
    }

    /// Empty board with pegs only on the given cells.
    pub fn with_pegs<I: IntoIterator<Item = Position>>(pegs: I) -> Self {
        pegs.into_iter().fold(Self::EMPTY, |occ, p| occ.with(p))
    }

    pub fn has_peg(self, p: Position) -> bool { self.0 & p.bit() != 0 }

    pub fn with(self, p: Position) -> Self { Self(self.0 | p.bit()) }

    pub fn without(self, p: Position) -> Self { Self(self.0 & !p.bit()) }

    pub fn peg_count(self) -> u32 { self.0.count_ones() }

    pub fn pegs(self) -> impl Iterator<Item = Position> {
        Position::all().filter(move |&p| self.has_peg(p))
    }

    pub fn is_legal(self, mv: Move) -> bool {
        self.has_peg(mv.from) && self.has_peg(mv.over) && !self.has_peg(mv.to)
    }

    /// Checked move application.
    pub fn apply_move(self, mv: Move) -> Result<Self> {
        if !self.is_legal(mv) {
            return Err(PegError::InvariantViolation { mv, occupancy: self });
        }
        Ok(self.play(mv))
    }

    /// Unchecked form for moves that came out of move generation.
    pub fn play(self, mv: Move) -> Self {
        debug_assert!(self.is_legal(mv), "illegal move {} on {:#06x}", mv, self);
        self.without(mv.from).without(mv.over).with(mv.to)
    }
}

impl fmt::LowerHex for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::LowerHex::fmt(&self.0, f) }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = ROWS as usize;
        for row in 0..rows {
            write!(f, "{:width$}", "", width = (rows - row - 1) * 2)?;
            for col in 0..=row {
                let Some(p) = Position::at(row, col) else { continue };
                if col > 0 { f.write_str("   ")?; }
                f.write_str(if self.has_peg(p) { "x" } else { "." })?;
            }
            if row + 1 < rows { writeln!(f)?; }
        }
        Ok(())
    }
}
