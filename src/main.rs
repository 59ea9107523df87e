use anyhow::Result;
use clap::Parser;
use loabot::config::{EngineConfig, PlayerKind};
use loabot::protocol::TextEngine;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Lines of Action against the alpha-beta engine", long_about = None)]
struct Args {
    /// JSON engine config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Total move limit before the game is a tie
    #[arg(long)]
    limit: Option<u32>,

    /// Who plays White
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// Who plays Black
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Seed for the random player
    #[arg(long)]
    seed: Option<u64>,

    /// Search without alpha-beta cutoffs (same moves, slower)
    #[arg(long)]
    no_prune: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.depth { config.search.depth = d.max(1); }
    if let Some(l) = args.limit { config.move_limit = l; }
    if let Some(w) = args.white { config.white = w; }
    if let Some(b) = args.black { config.black = b; }
    if let Some(s) = args.seed { config.seed = s; }
    if args.no_prune { config.search.prune = false; }
    log::info!("config: {:?}", config);

    let mut engine = TextEngine::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    engine.run_loop(stdin.lock(), &mut out)
}
