use clap::Parser;
use loabot::board::{Board, GameBoard};
use loabot::search::{SearchParams, Searcher, Sense, Window};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "loabot-bench", version, about = "Time LoaBot search with and without alpha-beta cutoffs")]
struct Args {
    /// Fixed search depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Moves to play from the start position first, e.g. b1-d3
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,

    /// Skip the unpruned run
    #[arg(long, default_value_t = false)]
    pruned_only: bool,
}

fn run(board: &Board, depth: u32, prune: bool) {
    let mut s = Searcher::new(&SearchParams { depth, prune });
    let sense = Sense::for_side(board.side_to_move());
    let t0 = Instant::now();
    let res = s.search(board, depth, sense, Window::FULL);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "prune={} bestmove={} value={} nodes={} elapsed={:.3}s nps={:.1}",
        prune,
        res.best_move.map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string()),
        res.value,
        res.nodes,
        dt.as_secs_f64(),
        nps
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = Board::set_from_start_and_moves(&args.moves)?;
    run(&board, args.depth, true);
    if !args.pruned_only { run(&board, args.depth, false); }
    Ok(())
}
