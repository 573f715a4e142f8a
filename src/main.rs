use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tictacbot::search::eval::Outcome;
use tictacbot::session::{Mode, Session, SessionConfig};
use tictacbot::{Algorithm, Player};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the minimax / alpha-beta engines", long_about = None)]
struct Args {
    /// JSON session config; individual flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game mode: 'hh' human vs human, 'ha' human vs AI, 'aa' AI vs AI
    #[arg(long)]
    mode: Option<Mode>,

    /// Engine for X: 'minimax' or 'alphabeta'
    #[arg(long)]
    x_algo: Option<Algorithm>,

    /// Engine for O: 'minimax' or 'alphabeta'
    #[arg(long)]
    o_algo: Option<Algorithm>,

    /// Side that moves first
    #[arg(long)]
    first: Option<Player>,

    /// Side the human plays in human vs AI mode
    #[arg(long)]
    human: Option<Player>,

    /// Disable the alpha-beta transposition cache
    #[arg(long)]
    no_cache: bool,

    /// Pause between AI moves in AI vs AI mode (100..=1500 ms)
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Print search statistics after every AI move
    #[arg(long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<SessionConfig> {
    let mut cfg = match &args.config {
        Some(p) => SessionConfig::load(p).with_context(|| format!("load session config: {}", p.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(m) = args.mode { cfg.mode = m; }
    if let Some(a) = args.x_algo { cfg.algo_x = a; }
    if let Some(a) = args.o_algo { cfg.algo_o = a; }
    if let Some(p) = args.first { cfg.first = p; }
    if let Some(p) = args.human { cfg.human = p; }
    if args.no_cache { cfg.use_cache = false; }
    if let Some(ms) = args.ai_delay_ms { cfg.ai_delay_ms = ms; }
    Ok(cfg)
}

fn print_board(s: &Session) {
    println!("\n{}", s.position().board());
    if let Some(line) = s.win_line() { println!("winning line: {:?}", line); }
}

enum Command { Play(usize), Undo, Redo, Restart, Quit }

fn read_command() -> Result<Command> {
    loop {
        print!("Cell 0-8, (u)ndo, (r)edo, (n)ew game, (q)uit: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(Command::Quit); }
        match input.trim() {
            "u" | "undo" => return Ok(Command::Undo),
            "r" | "redo" => return Ok(Command::Redo),
            "n" | "new" => return Ok(Command::Restart),
            "q" | "quit" => return Ok(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(idx) => return Ok(Command::Play(idx)),
                Err(_) => println!("Invalid input '{}'", other),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = build_config(&args)?;
    println!("Mode: {}  X: {}  O: {}  cache: {}", cfg.mode, cfg.algo_x, cfg.algo_o, cfg.use_cache);
    let mut session = Session::new(cfg);

    loop {
        print_board(&session);
        if session.is_over() {
            match session.outcome() {
                Outcome::Win { player, .. } => println!("{} wins!", player),
                Outcome::Draw => println!("Draw!"),
                Outcome::None => {}
            }
            if session.config().mode == Mode::AiVsAi { break; }
        } else {
            println!("{} to move ({}, {} legal moves)", session.turn(), session.config().algorithm_for(session.turn()), session.position().legal_moves_count());
        }

        if session.is_ai_turn() {
            if session.config().mode == Mode::AiVsAi { std::thread::sleep(session.ai_delay()); }
            if args.verbose { println!("Thinking..."); }
            match session.ai_move()? {
                Some(res) => {
                    println!("Computer plays: {}", res.index.map_or("-".to_string(), |i| i.to_string()));
                    if args.verbose { println!("score={} {}", res.score, res.metrics); }
                }
                None => { println!("No legal moves available!"); break; }
            }
            continue;
        }

        match read_command()? {
            Command::Play(idx) => if let Err(e) = session.play(idx) { println!("{}", e); },
            Command::Undo => if let Err(e) = session.undo() { println!("{}", e); },
            Command::Redo => if let Err(e) = session.redo() { println!("{}", e); },
            Command::Restart => session.reset(),
            Command::Quit => break,
        }
    }

    for p in [Player::X, Player::O] {
        let perf = session.perf(p);
        if perf.is_empty() { continue; }
        let nodes: u64 = perf.iter().map(|m| m.nodes).sum();
        let ms: f64 = perf.iter().map(|m| m.time_ms).sum();
        println!("{}: {} engine moves, {} nodes, {:.3} ms total", p, perf.len(), nodes, ms);
    }
    Ok(())
}
