pub mod loa;

use std::fmt;
use serde::{Deserialize, Serialize};

pub use loa::{Board, BoardError, Move, Square, Status};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opposite(self) -> Side {
        match self { Side::Black => Side::White, Side::White => Side::Black }
    }

    pub fn parse(s: &str) -> Option<Side> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Side::Black),
            "w" | "white" => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Side::Black => write!(f, "black"), Side::White => write!(f, "white") }
    }
}

/// What the search needs from a game position.
///
/// `apply` must return an independent value: nothing done to the child may be
/// observable through `self`.
pub trait GameBoard: Clone {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Legal moves for the side to move, in a fixed order for a given position.
    /// Empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&self, mv: Self::Move) -> Self;
    fn is_terminal(&self) -> bool;
    /// `None` while the game is running and for a drawn game.
    fn winner(&self) -> Option<Side>;
    fn piece_count(&self, side: Side) -> usize;
    /// Sizes of the maximal connected groups of `side`'s pieces.
    fn region_sizes(&self, side: Side) -> Vec<usize>;
    fn side_to_move(&self) -> Side;
}
