pub mod alphabeta;
pub mod eval;
pub mod metrics;
pub mod minimax;
pub mod tt;

use std::fmt;
use std::str::FromStr;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::board::{Board, Player};
use crate::error::Error;

pub use alphabeta::select_move_alphabeta;
pub use metrics::{Metrics, SearchResult};
pub use minimax::select_move_minimax;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Algorithm::Minimax => write!(f, "Minimax"), Algorithm::AlphaBeta => write!(f, "AlphaBeta") }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(Error::Parse(format!("algorithm '{other}'"))),
        }
    }
}

/// Single entry point for game front ends. `use_cache` only affects alpha-beta.
pub fn select_move(board: &Board, player: Player, algo: Algorithm, use_cache: bool) -> SearchResult {
    let res = match algo {
        Algorithm::Minimax => select_move_minimax(board, player),
        Algorithm::AlphaBeta => select_move_alphabeta(board, player, use_cache),
    };
    debug!("{} for {}: index={:?} score={} {}", algo, player, res.index, res.score, res.metrics);
    res
}
