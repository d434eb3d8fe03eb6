use crate::board::{Move, Occupancy, Topology};
use rand::Rng;

/// Plays uniformly random legal moves until none remain.
pub fn random_playout<R: Rng>(topology: &Topology, mut occ: Occupancy, rng: &mut R) -> Vec<Move> {
    let mut line = Vec::new();
    loop {
        let moves = topology.legal_moves(occ);
        if moves.is_empty() { break; }
        let mv = moves[rng.gen_range(0..moves.len())];
        occ = occ.play(mv);
        line.push(mv);
    }
    line
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayoutStats {
    pub games: usize,
    pub best: usize,
    pub worst: usize,
    pub mean: f64,
}

/// Length statistics over `games` random playouts.
pub fn sample<R: Rng>(topology: &Topology, occ: Occupancy, games: usize, rng: &mut R) -> PlayoutStats {
    if games == 0 { return PlayoutStats::default(); }
    let mut best = 0usize;
    let mut worst = usize::MAX;
    let mut total = 0usize;
    for _ in 0..games {
        let n = random_playout(topology, occ, rng).len();
        best = best.max(n);
        worst = worst.min(n);
        total += n;
    }
    PlayoutStats { games, best, worst, mean: total as f64 / games as f64 }
}
