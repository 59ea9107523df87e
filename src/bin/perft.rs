use anyhow::Result;
use clap::Parser;
use loabot::board::{Board, GameBoard, Side};
use loabot::perft::{divide, perft};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for LoaBot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// 64 cells (row 8 first, '-', 'b', 'w') or "startpos"
    #[arg(value_name = "LAYOUT", default_value = "startpos")]
    layout: String,
    /// Side to move for a custom layout
    #[arg(long, default_value = "black")]
    turn: String,
    /// Moves to play from the position first, e.g. b1-d3
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let depth = args.depth;

    let mut base = if args.layout == "startpos" {
        Board::startpos()
    } else {
        let turn = Side::parse(&args.turn).ok_or_else(|| anyhow::anyhow!("bad side: {}", args.turn))?;
        Board::from_layout(&args.layout, turn)?
    };
    for m in &args.moves { base.make_move_str(m)?; }

    if args.divide {
        for (mv, n) in divide(&base, depth) { println!("{mv}: {n}"); }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth == 0 {
            perft(&base, depth)
        } else {
            base.legal_moves().par_iter().map(|&mv| perft(&base.apply(mv), depth - 1)).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
