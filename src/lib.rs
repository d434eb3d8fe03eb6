// Longest-sequence solver for 15-hole triangular peg solitaire
pub mod board;
pub mod error;
pub mod perft;
pub mod playout;
pub mod report;
pub mod search;
pub mod setup;

pub use board::{Move, Occupancy, Position, Topology};
pub use error::PegError;
pub use report::Report;
pub use search::{SearchParams, SearchResult, Searcher};
pub use setup::Setup;

/// Solves `setup` on the standard board with a fresh searcher.
pub fn solve(setup: &Setup) -> Report {
    let mut searcher = Searcher::default();
    let result = searcher.search(setup.occupancy());
    Report::new(setup, result.sequence)
}
