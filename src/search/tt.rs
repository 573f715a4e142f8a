use std::collections::HashMap;
use crate::board::{Board, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub score: i32,
    pub best: Option<usize>,
    pub bound: Bound,
}

impl Entry {
    /// Whether this entry settles a node searched with window (alpha, beta).
    pub fn usable(&self, alpha: i32, beta: i32) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Board cells (with `-` for empty) followed by `|` and the side to move.
pub fn cache_key(board: &Board, turn: Player) -> String {
    format!("{}|{}", board.key(), turn)
}

/// Transposition cache for a single top-level search.
#[derive(Default, Debug)]
pub struct Tt {
    map: HashMap<String, Entry>,
}

impl Tt {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &str) -> Option<Entry> { self.map.get(key).copied() }

    pub fn put(&mut self, key: String, e: Entry) {
        // Exact results are never downgraded to a bound.
        if let Some(cur) = self.map.get(&key) {
            if cur.bound == Bound::Exact && e.bound != Bound::Exact { return; }
        }
        self.map.insert(key, e);
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_includes_turn() {
        let b: Board = "X---O----".parse().unwrap();
        assert_eq!(cache_key(&b, Player::X), "X---O----|X");
        assert_ne!(cache_key(&b, Player::X), cache_key(&b, Player::O));
    }

    #[test]
    fn bounds_respect_window() {
        let lower = Entry { score: 10, best: Some(2), bound: Bound::Lower };
        assert!(lower.usable(-10, 0));
        assert!(!lower.usable(-10, 11));
        let upper = Entry { score: -10, best: Some(2), bound: Bound::Upper };
        assert!(upper.usable(-10, 10));
        assert!(!upper.usable(-11, 10));
    }

    #[test]
    fn exact_not_replaced_by_bound() {
        let mut tt = Tt::new();
        tt.put("k".into(), Entry { score: 0, best: Some(4), bound: Bound::Exact });
        tt.put("k".into(), Entry { score: 10, best: Some(1), bound: Bound::Lower });
        assert_eq!(tt.get("k").map(|e| e.bound), Some(Bound::Exact));
        assert_eq!(tt.len(), 1);
        assert!(!tt.is_empty());
        assert!(Tt::new().is_empty());
    }
}
