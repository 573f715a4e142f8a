//! Exhaustive cross-check of the two engines over every reachable position.

use std::collections::HashSet;
use std::fmt;
use crate::board::{Player, Position};
use crate::search::{select_move_alphabeta, select_move_minimax};

/// Every distinct non-terminal position reachable from an empty board when `first` opens.
pub fn reachable_positions(first: Player) -> Vec<Position> {
    let mut seen: HashSet<Position> = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![Position::with_first(first)];
    while let Some(pos) = stack.pop() {
        if pos.is_over() || !seen.insert(pos) { continue; }
        out.push(pos);
        for m in pos.legal_moves() {
            let mut child = pos;
            if child.make_move(m).is_ok() { stack.push(child); }
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub position: Position,
    pub detail: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} to move): {}", self.position.board().key(), self.position.side_to_move(), self.detail)
    }
}

/// Runs minimax and alpha-beta (cache off and on) and checks that every
/// alpha-beta choice is an optimal move with the same score as minimax.
pub fn check_position(pos: &Position) -> Option<Mismatch> {
    let board = pos.board();
    let me = pos.side_to_move();
    let mm = select_move_minimax(board, me);
    let mismatch = |detail: String| Some(Mismatch { position: *pos, detail });
    for cache in [false, true] {
        let ab = select_move_alphabeta(board, me, cache);
        if ab.score != mm.score {
            return mismatch(format!("score: minimax={} alphabeta={} (cache={})", mm.score, ab.score, cache));
        }
        let Some(idx) = ab.index else {
            return mismatch(format!("alphabeta returned no move (cache={cache})"));
        };
        let mut child = *pos;
        if child.make_move(idx).is_err() {
            return mismatch(format!("alphabeta chose illegal cell {idx} (cache={cache})"));
        }
        // Child scores are seen from the opponent, so negate back.
        let child_score = -select_move_minimax(child.board(), me.opponent()).score;
        if child_score != mm.score {
            return mismatch(format!("alphabeta chose {} worth {} but optimum is {} (cache={})", idx, child_score, mm.score, cache));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_count_from_x() {
        // 5478 legal positions, 958 of which are terminal.
        assert_eq!(reachable_positions(Player::X).len(), 5478 - 958);
    }

    #[test]
    fn opening_position_agrees() {
        assert_eq!(check_position(&Position::startpos()), None);
    }
}
