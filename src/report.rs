use crate::board::{Move, Position};
use crate::search::solver::pegs_remaining;
use crate::setup::Setup;
use serde::Serialize;
use std::fmt;

/// Outcome of one solve, ready for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub empty_positions: Vec<Position>,
    pub sequence: Vec<Move>,
    pub pegs_remaining: usize,
    pub pegs_removed: usize,
}

impl Report {
    pub fn new(setup: &Setup, sequence: Vec<Move>) -> Self {
        let empty_positions: Vec<Position> = setup.empty_positions().collect();
        Self {
            pegs_remaining: pegs_remaining(empty_positions.len(), &sequence),
            pegs_removed: sequence.len(),
            empty_positions,
            sequence,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Positions empty in beginning: {}", join(&self.empty_positions))?;
        writeln!(f, "The longest sequence of steps: {}", join(&self.sequence))?;
        writeln!(f, "Figures left on board: {}", self.pegs_remaining)?;
        write!(f, "Figures removed: {}", self.pegs_removed)
    }
}
