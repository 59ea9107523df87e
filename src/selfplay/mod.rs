use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::game::{play_game, GameRecord};
use crate::player::{MachinePlayer, Player, RandomPlayer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Random,
    Machine,
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub depth: u32,
    pub opponent: Opponent,
    pub opponent_depth: u32,
    pub max_plies: usize,
    pub move_limit: u32,
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayGame {
    pub index: usize,
    pub engine_side: Side,
    #[serde(flatten)]
    pub record: GameRecord,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub engine_wins: usize,
    pub engine_losses: usize,
    pub draws: usize,
    pub unfinished: usize,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<SelfPlayGame>> {
    generate_games_with(params, |_| {})
}

/// Games run in parallel; `on_game` fires as each one finishes.
/// The result is in game-index order.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<SelfPlayGame>>
where
    F: Fn(&SelfPlayGame) + Sync,
{
    (0..params.games)
        .into_par_iter()
        .map(|i| {
            let g = play_one(params, i)?;
            on_game(&g);
            Ok::<_, anyhow::Error>(g)
        })
        .collect()
}

// Engine takes White in even games and Black in odd ones.
fn play_one(params: &SelfPlayParams, index: usize) -> Result<SelfPlayGame> {
    let mut board = Board::startpos();
    board.set_move_limit(params.move_limit);
    let engine_side = if index % 2 == 0 { Side::White } else { Side::Black };
    let mut engine = MachinePlayer::with_depth(params.depth);
    let mut opponent: Box<dyn Player<Board>> = match params.opponent {
        Opponent::Random => Box::new(RandomPlayer::new(params.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))),
        Opponent::Machine => Box::new(MachinePlayer::with_depth(params.opponent_depth)),
    };
    let (record, _) = match engine_side {
        Side::White => play_game(board, &mut engine, opponent.as_mut(), params.max_plies),
        Side::Black => play_game(board, opponent.as_mut(), &mut engine, params.max_plies),
    }
    .with_context(|| format!("self-play game {index}"))?;
    info!("game {} finished: {} plies, winner {:?}", index, record.moves.len(), record.winner);
    Ok(SelfPlayGame { index, engine_side, record })
}

pub fn summarize(games: &[SelfPlayGame]) -> Summary {
    let mut s = Summary::default();
    for g in games {
        match (g.record.finished, g.record.winner) {
            (false, _) => s.unfinished += 1,
            (true, None) => s.draws += 1,
            (true, Some(w)) if w == g.engine_side => s.engine_wins += 1,
            (true, Some(_)) => s.engine_losses += 1,
        }
    }
    s
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[SelfPlayGame], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<SelfPlayGame>> {
    let path = path.as_ref();
    let rdr = BufReader::new(File::open(path).with_context(|| format!("opening {}", path.display()))?);
    let mut out = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        let g = serde_json::from_str(l).with_context(|| format!("{}:{}", path.display(), i + 1))?;
        out.push(g);
    }
    Ok(out)
}
