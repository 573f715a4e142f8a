use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;
use tictacbot::verify::{check_position, reachable_positions, Mismatch};
use tictacbot::Player;

#[derive(Parser, Debug)]
#[command(name = "tictacbot-accept", about = "Check minimax and alpha-beta agree on every reachable position")]
struct Args {
    /// Side that opens the game
    #[arg(long, default_value = "X")]
    first: Player,
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Stop after this many positions (0 = all)
    #[arg(long, default_value_t = 0)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global()?;
    }
    let mut positions = reachable_positions(args.first);
    if args.limit > 0 { positions.truncate(args.limit); }

    let pb = ProgressBar::new(positions.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} positions ({elapsed})")?);
    let t0 = Instant::now();
    let failures: Vec<Mismatch> = positions.par_iter().filter_map(|p| {
        let r = check_position(p);
        pb.inc(1);
        r
    }).collect();
    pb.finish_and_clear();

    println!("summary: positions={} mismatches={} elapsed={:.3}s", positions.len(), failures.len(), t0.elapsed().as_secs_f64());
    if !failures.is_empty() {
        let lines: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
        eprintln!("failures ({}):\n{}", failures.len(), lines.join("\n"));
        std::process::exit(1);
    }
    Ok(())
}
