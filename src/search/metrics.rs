use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::search::Algorithm;

/// Per-call search statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub algo: Algorithm,
    pub time_ms: f64,
    pub nodes: u64,
    pub pruned: u64,
    pub pruned_pct: f64,
}

impl Metrics {
    pub fn new(algo: Algorithm, elapsed: Duration, nodes: u64, pruned: u64) -> Self {
        Self {
            algo,
            time_ms: round_to(elapsed.as_secs_f64() * 1000.0, 3),
            nodes,
            pruned,
            pruned_pct: pruned_pct(pruned, nodes),
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "algo={} time={:.3}ms nodes={} pruned={} pruned_pct={:.2}%",
            self.algo, self.time_ms, self.nodes, self.pruned, self.pruned_pct)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Cell to play, `None` when the board was already terminal.
    pub index: Option<usize>,
    /// Score from the searching player's point of view.
    pub score: i32,
    pub metrics: Metrics,
}

pub fn round_to(v: f64, places: i32) -> f64 {
    let m = 10f64.powi(places);
    (v * m).round() / m
}

/// `pruned / nodes * 100` to two decimals, 0 when no node was visited.
pub fn pruned_pct(pruned: u64, nodes: u64) -> f64 {
    if nodes == 0 { return 0.0; }
    round_to(pruned as f64 / nodes as f64 * 100.0, 2)
}
