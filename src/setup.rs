use crate::board::{Occupancy, Position};
use crate::error::Result;
use std::collections::BTreeSet;

/// Starting position: the set of cells that begin without a peg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    empty: BTreeSet<Position>,
}

impl Default for Setup {
    fn default() -> Self { Self { empty: BTreeSet::from([Position::APEX]) } }
}

impl Setup {
    /// Builds a setup from hole numbers. Duplicates collapse; an empty list
    /// means the default single hole at the apex.
    pub fn from_holes(holes: &[u8]) -> Result<Self> {
        if holes.is_empty() { return Ok(Self::default()); }
        let empty = holes.iter().map(|&n| Position::new(n)).collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { empty })
    }

    pub fn single(p: Position) -> Self { Self { empty: BTreeSet::from([p]) } }

    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ { self.empty.iter().copied() }

    pub fn hole_count(&self) -> usize { self.empty.len() }

    pub fn occupancy(&self) -> Occupancy { Occupancy::with_empty(self.empty.iter().copied()) }
}
