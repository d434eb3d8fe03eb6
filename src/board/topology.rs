use crate::board::occupancy::Occupancy;
use crate::board::position::{Move, Position, CELLS, ROWS};
use std::sync::OnceLock;

/// Every geometrically possible jump from every cell, ignoring pegs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    candidates: Vec<Vec<Move>>,
}

static STANDARD: OnceLock<Topology> = OnceLock::new();

/// Shared topology of the standard board, built on first use.
pub fn standard() -> &'static Topology {
    STANDARD.get_or_init(Topology::build)
}

impl Topology {
    pub fn build() -> Self {
        let rows = ROWS as isize;
        let cell = |y: isize, x: isize| -> Option<Position> {
            if y < 0 || x < 0 || y >= rows { return None; }
            Position::at(y as usize, x as usize)
        };
        // right, left, up-right, up-left, down-right, down-left as
        // (first step, second step) offsets in (row, col)
        const DIRECTIONS: [[(isize, isize); 2]; 6] = [
            [(0, 1), (0, 2)],
            [(0, -1), (0, -2)],
            [(1, 0), (2, 0)],
            [(-1, -1), (-2, -2)],
            [(1, 1), (2, 2)],
            [(-1, 0), (-2, 0)],
        ];

        let mut candidates = Vec::with_capacity(CELLS as usize);
        for y in 0..rows {
            for x in 0..=y {
                let Some(from) = cell(y, x) else { continue };
                let moves: Vec<Move> = DIRECTIONS
                    .iter()
                    .filter_map(|[(dy1, dx1), (dy2, dx2)]| {
                        let over = cell(y + dy1, x + dx1)?;
                        let to = cell(y + dy2, x + dx2)?;
                        Some(Move::new(from, over, to))
                    })
                    .collect();
                candidates.push(moves);
            }
        }
        Self { candidates }
    }

    /// Candidates starting at `p`, in direction order.
    pub fn candidates(&self, p: Position) -> &[Move] {
        &self.candidates[(p.get() - 1) as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.candidates.iter().flatten()
    }

    pub fn len(&self) -> usize { self.candidates.iter().map(Vec::len).sum() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Legal moves under `occ`, ordered by starting position then direction.
    pub fn legal_moves(&self, occ: Occupancy) -> Vec<Move> {
        let mut out = Vec::new();
        for p in occ.pegs() {
            for &mv in self.candidates(p) {
                if occ.has_peg(mv.over) && !occ.has_peg(mv.to) { out.push(mv); }
            }
        }
        out
    }
}

impl Default for Topology {
    fn default() -> Self { standard().clone() }
}
