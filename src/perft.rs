use crate::board::GameBoard;

// Leaf count of the legal-move tree; finished games contribute no leaves.
pub fn perft<B: GameBoard>(board: &B, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for m in board.legal_moves() {
        let child = board.apply(m);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-root-move counts, in move order.
pub fn divide<B: GameBoard>(board: &B, depth: u32) -> Vec<(B::Move, u64)> {
    if depth == 0 { return Vec::new(); }
    board.legal_moves().into_iter().map(|m| (m, perft(&board.apply(m), depth - 1))).collect()
}
