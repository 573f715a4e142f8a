use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::board::{Player, Position};
use crate::error::Result;
use crate::search::eval::Outcome;
use crate::search::{select_move, Algorithm, Metrics};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub threads: usize,
    pub seed: u64,
    pub random_plies: usize, // uniformly random opening moves before the engines take over
    pub algo_x: Algorithm,
    pub algo_o: Algorithm,
    pub use_cache: bool,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, threads: 1, seed: 42, random_plies: 0, algo_x: Algorithm::AlphaBeta, algo_o: Algorithm::AlphaBeta, use_cache: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub result: i8, // 1 X win, 0 draw, -1 O win
    pub metrics: Vec<Metrics>,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let games: Vec<GameRecord> = if params.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => pool.install(|| (0..params.games).into_par_iter().map(|gi| play_game(params, gi)).collect()),
            Err(e) => {
                warn!("thread pool unavailable ({e}), playing serially");
                (0..params.games).map(|gi| play_game(params, gi)).collect()
            }
        }
    } else {
        (0..params.games).map(|gi| play_game(params, gi)).collect()
    };
    let (x, d, o) = games.iter().fold((0, 0, 0), |(x, d, o), g| match g.result { 1 => (x + 1, d, o), -1 => (x, d, o + 1), _ => (x, d + 1, o) });
    info!("self-play finished: {} games, X {} / draw {} / O {}", games.len(), x, d, o);
    games
}

fn play_game(params: &SelfPlayParams, gi: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (gi as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut pos = Position::startpos();
    let mut record = GameRecord { moves: Vec::new(), result: 0, metrics: Vec::new() };
    while !pos.is_over() {
        let turn = pos.side_to_move();
        let idx = if record.moves.len() < params.random_plies {
            let legal = pos.legal_moves();
            legal[rng.gen_range(0..legal.len())]
        } else {
            let algo = match turn { Player::X => params.algo_x, Player::O => params.algo_o };
            let res = select_move(pos.board(), turn, algo, params.use_cache);
            let Some(idx) = res.index else { break };
            record.metrics.push(res.metrics);
            idx
        };
        if pos.make_move(idx).is_err() { break; }
        record.moves.push(idx);
    }
    record.result = match pos.outcome() {
        Outcome::Win { player: Player::X, .. } => 1,
        Outcome::Win { player: Player::O, .. } => -1,
        _ => 0,
    };
    record
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for (n, line) in rdr.lines().enumerate() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        match serde_json::from_str::<GameRecord>(l) {
            Ok(g) => out.push(g),
            Err(e) => warn!("skipping malformed record on line {}: {}", n + 1, e),
        }
    }
    Ok(out)
}
