use crate::board::{Move, Occupancy};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

const DEFAULT_SHARDS: usize = 64;

#[derive(Default)]
struct Shard {
    lines: HashMap<Occupancy, Vec<Move>>,
}

/// Best known line per occupancy. Entries are permanent once stored; the
/// cache lives exactly as long as the searcher that owns it.
pub struct SearchCache {
    shards: Vec<Mutex<Shard>>,
    hits: AtomicU64,
}

impl Default for SearchCache {
    fn default() -> Self { Self::with_shards(DEFAULT_SHARDS) }
}

impl SearchCache {
    pub fn new() -> Self { Self::default() }

    pub fn with_shards(shards: usize) -> Self {
        let mut v = Vec::new();
        v.resize_with(shards.max(1), || Mutex::new(Shard::default()));
        Self { shards: v, hits: AtomicU64::new(0) }
    }

    fn shard(&self, key: Occupancy) -> MutexGuard<'_, Shard> {
        let mixed = key.bits() as usize ^ (key.bits() as usize >> 7);
        let idx = mixed % self.shards.len();
        // A poisoned shard still holds complete entries; inserts are single calls.
        self.shards[idx].lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached line for `key`; counts a hit when present.
    pub fn get(&self, key: Occupancy) -> Option<Vec<Move>> {
        let line = self.shard(key).lines.get(&key).cloned();
        if line.is_some() { self.hits.fetch_add(1, Ordering::Relaxed); }
        line
    }

    /// Lookup without touching the hit counter.
    pub fn peek(&self, key: Occupancy) -> Option<Vec<Move>> {
        self.shard(key).lines.get(&key).cloned()
    }

    /// First writer wins. Every writer computes the same line for a key, so a
    /// later duplicate is dropped.
    pub fn put(&self, key: Occupancy, line: Vec<Move>) {
        self.shard(key).lines.entry(key).or_insert(line);
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().unwrap_or_else(|e| e.into_inner()).lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn hits(&self) -> u64 { self.hits.load(Ordering::Relaxed) }

    pub fn clear(&self) {
        for s in &self.shards { *s.lock().unwrap_or_else(|e| e.into_inner()) = Shard::default(); }
        self.hits.store(0, Ordering::Relaxed);
    }
}
