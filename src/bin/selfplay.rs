use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictacbot::selfplay::{generate_games, write_jsonl, SelfPlayParams};
use tictacbot::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "tictacbot-selfplay", about = "Generate engine self-play games as JSONL")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Random opening plies before the engines take over
    #[arg(long, default_value_t = 2)]
    random_plies: usize,
    #[arg(long, default_value = "alphabeta")]
    x_algo: Algorithm,
    #[arg(long, default_value = "alphabeta")]
    o_algo: Algorithm,
    #[arg(long)]
    no_cache: bool,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        threads: a.threads,
        seed: a.seed,
        random_plies: a.random_plies,
        algo_x: a.x_algo,
        algo_o: a.o_algo,
        use_cache: !a.no_cache,
    };
    eprintln!("Generating {} games (X={}, O={}, random_plies={}, threads={})", a.games, a.x_algo, a.o_algo, a.random_plies, a.threads);
    let games = generate_games(&params);
    let x = games.iter().filter(|g| g.result == 1).count();
    let o = games.iter().filter(|g| g.result == -1).count();
    eprintln!("X wins {}, O wins {}, draws {}", x, o, games.len() - x - o);
    write_jsonl(&games, &a.out).with_context(|| format!("write {}", a.out.display()))?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
