use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tictacbot::{select_move, Algorithm, Board, Player, Position};

#[derive(Parser, Debug)]
#[command(name = "tictacbot-bench", version, about = "Benchmark the search engines on one position")]
struct Args {
    /// Board as 9 cells (X, O, - for empty), e.g. "XOX/OXO/---"
    #[arg(long, default_value = "---------")]
    board: String,

    /// Side to move (inferred from mark counts when omitted)
    #[arg(long)]
    player: Option<Player>,

    /// Engine: 'minimax', 'alphabeta' or 'all'
    #[arg(long, default_value = "all")]
    algo: String,

    /// Repetitions per configuration
    #[arg(long, default_value_t = 10)]
    repeat: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board: Board = args.board.parse()?;
    let player = match args.player { Some(p) => p, None => Position::from_board(board)?.side_to_move() };

    let configs: Vec<(Algorithm, bool)> = if args.algo == "all" {
        vec![(Algorithm::Minimax, false), (Algorithm::AlphaBeta, false), (Algorithm::AlphaBeta, true)]
    } else {
        let a: Algorithm = args.algo.parse()?;
        match a { Algorithm::Minimax => vec![(a, false)], Algorithm::AlphaBeta => vec![(a, false), (a, true)] }
    };

    for (algo, cache) in configs {
        let t0 = Instant::now();
        let mut last = None;
        for _ in 0..args.repeat.max(1) { last = Some(select_move(&board, player, algo, cache)); }
        let dt = t0.elapsed();
        if let Some(r) = last {
            let per = dt.as_secs_f64() * 1000.0 / args.repeat.max(1) as f64;
            let nps = if per > 0.0 { r.metrics.nodes as f64 / (per / 1000.0) } else { 0.0 };
            println!("algo={} cache={} index={} score={} nodes={} pruned={} pruned_pct={:.2} avg_ms={:.3} nps={:.1}",
                algo, cache, r.index.map_or("(none)".to_string(), |i| i.to_string()), r.score, r.metrics.nodes, r.metrics.pruned, r.metrics.pruned_pct, per, nps);
        }
    }
    Ok(())
}
