use std::time::Instant;
use crate::board::{Board, Player};
use crate::search::eval::evaluate;
use crate::search::metrics::{Metrics, SearchResult};
use crate::search::tt::{cache_key, Bound, Entry, Tt};
use crate::search::Algorithm;

const INF: i32 = i32::MAX;

/// Pruned search state for one top-level call. The cache dies with it.
pub(crate) struct Searcher {
    ai: Player,
    tt: Option<Tt>,
    pub(crate) nodes: u64,
    pub(crate) pruned: u64,
}

impl Searcher {
    pub(crate) fn new(ai: Player, use_tt: bool) -> Self {
        Self { ai, tt: use_tt.then(Tt::new), nodes: 0, pruned: 0 }
    }

    #[cfg(test)]
    pub(crate) fn tt_len(&self) -> usize { self.tt.as_ref().map_or(0, Tt::len) }

    fn tt_put(&mut self, key: Option<String>, score: i32, best: Option<usize>, bound: Bound) {
        if let (Some(tt), Some(k)) = (self.tt.as_mut(), key) {
            tt.put(k, Entry { score, best, bound });
        }
    }

    pub(crate) fn alphabeta(&mut self, b: &mut Board, turn: Player, mut alpha: i32, mut beta: i32) -> (i32, Option<usize>) {
        self.nodes += 1;
        let key = self.tt.as_ref().map(|_| cache_key(b, turn));
        if let (Some(tt), Some(k)) = (self.tt.as_ref(), key.as_deref()) {
            if let Some(en) = tt.get(k) {
                if en.usable(alpha, beta) { return (en.score, en.best); }
            }
        }
        if let Some(sc) = evaluate(b, self.ai) {
            self.tt_put(key, sc, None, Bound::Exact);
            return (sc, None);
        }

        let moves: Vec<usize> = b.empties().collect();
        let (orig_alpha, orig_beta) = (alpha, beta);
        let maximizing = turn == self.ai;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_idx = moves.first().copied();
        for m in moves {
            b.set(m, turn);
            let (score, _) = self.alphabeta(b, turn.opponent(), alpha, beta);
            b.clear(m);
            if maximizing {
                if score > best_score { best_score = score; best_idx = Some(m); }
                alpha = alpha.max(score);
            } else {
                if score < best_score { best_score = score; best_idx = Some(m); }
                beta = beta.min(score);
            }
            if beta <= alpha { self.pruned += 1; break; }
        }

        let bound = if best_score <= orig_alpha { Bound::Upper } else if best_score >= orig_beta { Bound::Lower } else { Bound::Exact };
        self.tt_put(key, best_score, best_idx, bound);
        (best_score, best_idx)
    }
}

/// Alpha-beta from `player`'s point of view, with an optional per-call transposition cache.
pub fn select_move_alphabeta(board: &Board, player: Player, use_cache: bool) -> SearchResult {
    let t0 = Instant::now();
    let mut s = Searcher::new(player, use_cache);
    let mut work = *board;
    let (score, index) = s.alphabeta(&mut work, player, -INF, INF);
    debug_assert_eq!(work, *board);
    SearchResult { index, score, metrics: Metrics::new(Algorithm::AlphaBeta, t0.elapsed(), s.nodes, s.pruned) }
}
