use crate::board::{Occupancy, Topology};

/// Number of move paths of exactly `depth` plies from `occ`.
pub fn perft(topology: &Topology, occ: Occupancy, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in topology.legal_moves(occ) {
        nodes += perft(topology, occ.play(mv), depth - 1);
    }
    nodes
}

/// Number of complete games (paths ending with no legal move) from `occ`.
pub fn count_games(topology: &Topology, occ: Occupancy) -> u64 {
    let moves = topology.legal_moves(occ);
    if moves.is_empty() { return 1; }
    moves.into_iter().map(|mv| count_games(topology, occ.play(mv))).sum()
}
