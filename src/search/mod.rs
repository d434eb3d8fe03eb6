pub mod cache;
pub mod solver;

pub use solver::{SearchParams, SearchResult, Searcher};
