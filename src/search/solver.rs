use crate::board::{topology, Move, Occupancy, Topology, CELLS};
use crate::error::{PegError, Result};
use crate::search::cache::SearchCache;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub threads: usize,
    pub use_cache: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { threads: 1, use_cache: true } }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub sequence: Vec<Move>,
    pub nodes: u64,
    pub cache_hits: u64,
    pub cache_entries: usize,
    pub pegs_removed: usize,
    pub pegs_remaining: usize,
    /// Threads available to the root split (1 for a sequential search).
    pub workers: usize,
}

/// Memoized longest-sequence search. The cache is owned by the searcher and
/// shared with root workers when searching on several threads.
pub struct Searcher<'t> {
    topology: &'t Topology,
    cache: Arc<SearchCache>,
    nodes: u64,
    threads: usize,
    use_cache: bool,
}

impl Default for Searcher<'static> {
    fn default() -> Self { Self::new(topology::standard()) }
}

impl<'t> Searcher<'t> {
    pub fn new(topology: &'t Topology) -> Self {
        Self { topology, cache: Arc::new(SearchCache::new()), nodes: 0, threads: 1, use_cache: true }
    }

    pub fn get_threads(&self) -> usize { self.threads }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn cache_hits(&self) -> u64 { self.cache.hits() }

    pub fn cache_len(&self) -> usize { self.cache.len() }

    pub fn cache_probe(&self, occ: Occupancy) -> Option<Vec<Move>> { self.cache.peek(occ) }

    pub fn clear_cache(&mut self) { self.cache.clear(); }

    pub fn search(&mut self, start: Occupancy) -> SearchResult {
        self.search_with_params(start, SearchParams { threads: self.threads, use_cache: self.use_cache })
    }

    /// Runs the search on a dedicated pool of `params.threads` workers
    /// instead of rayon's global pool.
    pub fn search_in_pool(&mut self, start: Occupancy, params: SearchParams) -> Result<SearchResult> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.threads.max(1))
            .build()
            .map_err(|e| PegError::ThreadPool(e.to_string()))?;
        Ok(pool.install(|| self.search_with_params(start, params)))
    }

    pub fn search_with_params(&mut self, start: Occupancy, params: SearchParams) -> SearchResult {
        self.threads = params.threads.max(1);
        self.use_cache = params.use_cache;
        self.nodes = 0;
        let hits_before = self.cache.hits();
        let t0 = Instant::now();
        debug!("search start: pegs={} threads={} cache={}", start.peg_count(), self.threads, self.use_cache);

        let workers = if self.threads > 1 { rayon::current_num_threads() } else { 1 };
        let sequence = if self.threads > 1 {
            self.find_best_sequence_parallel(start)
        } else {
            self.find_best_sequence(start)
        };

        let result = SearchResult {
            pegs_removed: sequence.len(),
            pegs_remaining: start.peg_count() as usize - sequence.len(),
            sequence,
            nodes: self.nodes,
            cache_hits: self.cache.hits() - hits_before,
            cache_entries: self.cache.len(),
            workers,
        };
        debug!(
            "search done: length={} nodes={} hits={} entries={} elapsed={:.3}s",
            result.sequence.len(), result.nodes, result.cache_hits, result.cache_entries, t0.elapsed().as_secs_f64()
        );
        result
    }

    /// Longest legal sequence from `occ`. Among equally long sequences the
    /// one reached first in move-generation order is kept.
    pub fn find_best_sequence(&mut self, occ: Occupancy) -> Vec<Move> {
        self.nodes += 1;
        if self.use_cache {
            if let Some(line) = self.cache.get(occ) { return line; }
        }
        let mut best: Vec<Move> = Vec::new();
        for mv in self.topology.legal_moves(occ) {
            let rest = self.find_best_sequence(occ.play(mv));
            if best.is_empty() || rest.len() + 1 > best.len() {
                best = prepend(mv, rest);
            }
        }
        if self.use_cache { self.cache.put(occ, best.clone()); }
        best
    }

    fn find_best_sequence_parallel(&mut self, occ: Occupancy) -> Vec<Move> {
        self.nodes += 1;
        if self.use_cache {
            if let Some(line) = self.cache.get(occ) { return line; }
        }
        let moves = self.topology.legal_moves(occ);

        // Each root move is searched by its own worker sharing this cache.
        let topology = self.topology;
        let use_cache = self.use_cache;
        let shared_cache = self.cache.clone();
        let results: Vec<(Move, Vec<Move>, u64)> = moves.par_iter().map(|&mv| {
            let mut w = Searcher { topology, cache: shared_cache.clone(), nodes: 0, threads: 1, use_cache };
            let rest = w.find_best_sequence(occ.play(mv));
            (mv, rest, w.nodes)
        }).collect();

        // Reduce in move order so ties resolve as in the sequential search
        let mut best: Vec<Move> = Vec::new();
        for (mv, rest, n) in results {
            self.nodes += n;
            if best.is_empty() || rest.len() + 1 > best.len() {
                best = prepend(mv, rest);
            }
        }
        if self.use_cache { self.cache.put(occ, best.clone()); }
        best
    }
}

fn prepend(mv: Move, rest: Vec<Move>) -> Vec<Move> {
    let mut line = Vec::with_capacity(rest.len() + 1);
    line.push(mv);
    line.extend(rest);
    line
}

/// Pegs left after playing `sequence` from a start with `holes` empty cells.
pub fn pegs_remaining(holes: usize, sequence: &[Move]) -> usize {
    CELLS as usize - holes - sequence.len()
}
