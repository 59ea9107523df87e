use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use loabot::board::loa::DEFAULT_MOVE_LIMIT;
use loabot::selfplay::{generate_games_with, summarize, write_jsonl, Opponent, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "loabot-selfplay", about = "Play the engine against an opponent and write the games as JSON Lines")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,
    /// Depth of a machine opponent
    #[arg(long, default_value_t = 2)]
    opponent_depth: u32,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = DEFAULT_MOVE_LIMIT)]
    move_limit: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        depth: a.depth,
        opponent: a.opponent,
        opponent_depth: a.opponent_depth,
        max_plies: a.max_plies,
        move_limit: a.move_limit,
        seed: a.seed,
    };
    eprintln!("Generating {} games (depth={}, opponent={:?}, seed={})", a.games, a.depth, a.opponent, a.seed);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads).build()?;
    let games = pool.install(|| generate_games_with(&params, |_| pb.inc(1)))?;
    pb.finish();

    let s = summarize(&games);
    eprintln!("engine wins={} losses={} draws={} unfinished={}", s.engine_wins, s.engine_losses, s.draws, s.unfinished);
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
