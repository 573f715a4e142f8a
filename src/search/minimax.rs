use std::time::Instant;
use crate::board::{Board, Player};
use crate::search::eval::evaluate;
use crate::search::metrics::{Metrics, SearchResult};
use crate::search::Algorithm;

/// Exhaustive search state for one top-level call.
struct Minimax {
    ai: Player,
    nodes: u64,
}

impl Minimax {
    fn new(ai: Player) -> Self { Self { ai, nodes: 0 } }

    fn minimax(&mut self, b: &mut Board, turn: Player) -> (i32, Option<usize>) {
        self.nodes += 1;
        if let Some(sc) = evaluate(b, self.ai) { return (sc, None); }
        let maximizing = turn == self.ai;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_idx = None;
        let moves: Vec<usize> = b.empties().collect();
        for m in moves {
            b.set(m, turn);
            let (score, _) = self.minimax(b, turn.opponent());
            b.clear(m);
            let better = if maximizing { score > best_score } else { score < best_score };
            if better { best_score = score; best_idx = Some(m); }
        }
        (best_score, best_idx)
    }
}

/// Full-width minimax from `player`'s point of view. Ties keep the lowest index.
pub fn select_move_minimax(board: &Board, player: Player) -> SearchResult {
    let t0 = Instant::now();
    let mut s = Minimax::new(player);
    let mut work = *board;
    let (score, index) = s.minimax(&mut work, player);
    debug_assert_eq!(work, *board);
    SearchResult { index, score, metrics: Metrics::new(Algorithm::Minimax, t0.elapsed(), s.nodes, 0) }
}
