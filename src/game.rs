use anyhow::{bail, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Side};
use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<String>,
    pub winner: Option<Side>,
    /// False when the ply cap stopped the game first.
    pub finished: bool,
}

/// Plays `board` out, or until `max_plies` moves have been made.
/// Returns the record and the final position.
pub fn play_game<B: GameBoard>(
    mut board: B,
    white: &mut dyn Player<B>,
    black: &mut dyn Player<B>,
    max_plies: usize,
) -> Result<(GameRecord, B)> {
    let mut moves = Vec::new();
    while !board.is_terminal() && moves.len() < max_plies {
        let mover = board.side_to_move();
        let mv = match mover {
            Side::White => white.choose_move(&board)?,
            Side::Black => black.choose_move(&board)?,
        };
        if !board.legal_moves().contains(&mv) {
            bail!("{} ({}) chose illegal move {}", mover, match mover { Side::White => white.name(), Side::Black => black.name() }, mv);
        }
        board = board.apply(mv);
        moves.push(mv.to_string());
        white.move_applied(&board, mv);
        black.move_applied(&board, mv);
    }
    let record = GameRecord {
        white: white.name().to_string(),
        black: black.name().to_string(),
        moves,
        winner: board.winner(),
        finished: board.is_terminal(),
    };
    info!("{} vs {}: {} plies, winner {:?}", record.white, record.black, record.moves.len(), record.winner);
    Ok((record, board))
}
