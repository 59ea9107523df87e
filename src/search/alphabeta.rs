use log::trace;
use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Side};
use crate::search::eval::evaluate;
use crate::search::value::Value;

pub const DEFAULT_DEPTH: u32 = 4;

/// The side whose evaluation the search maximizes. Every value the search
/// returns is in White's frame, whichever side is searching: a Black win is
/// `Value::Loss`.
pub const MAXIMIZER: Side = Side::White;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl Sense {
    /// White maximizes and Black minimizes, both over White's evaluation.
    pub fn for_side(side: Side) -> Sense {
        if side == MAXIMIZER { Sense::Maximize } else { Sense::Minimize }
    }

    pub fn flip(self) -> Sense {
        match self { Sense::Maximize => Sense::Minimize, Sense::Minimize => Sense::Maximize }
    }

    // Worse than anything a child can return.
    fn seed(self) -> Value {
        match self { Sense::Maximize => Value::NegInfinity, Sense::Minimize => Value::PosInfinity }
    }
}

/// Alpha is what the maximizer is already guaranteed, beta the minimizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub alpha: Value,
    pub beta: Value,
}

impl Window {
    pub const FULL: Window = Window { alpha: Value::NegInfinity, beta: Value::PosInfinity };

    pub fn new(alpha: Value, beta: Value) -> Self { Self { alpha, beta } }

    pub fn is_closed(&self) -> bool { self.alpha >= self.beta }
}

impl Default for Window {
    fn default() -> Self { Window::FULL }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    /// Off turns the search into plain minimax. Same decision, more nodes.
    pub prune: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: DEFAULT_DEPTH, prune: true } }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub value: Value,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct Searcher {
    pub(crate) nodes: u64,
    prune: bool,
}

impl Default for Searcher {
    fn default() -> Self { Self { nodes: 0, prune: true } }
}

impl Searcher {
    pub fn new(params: &SearchParams) -> Self { Self { nodes: 0, prune: params.prune } }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Depth-limited minimax from `board`. `best_move` is the first move
    /// reaching the returned value; it is `None` at depth 0, on a finished
    /// game, and when a live position has no legal moves.
    pub fn search<B: GameBoard>(&mut self, board: &B, depth: u32, sense: Sense, window: Window) -> SearchResult<B::Move> {
        self.nodes = 0;
        let (value, best_move) = self.alphabeta(board, depth, sense, window);
        SearchResult { best_move, value, nodes: self.nodes }
    }

    fn alphabeta<B: GameBoard>(&mut self, board: &B, depth: u32, sense: Sense, mut window: Window) -> (Value, Option<B::Move>) {
        self.nodes += 1;
        if depth == 0 || board.is_terminal() { return (evaluate(board, MAXIMIZER), None); }

        let mut best = sense.seed();
        let mut best_move = None;
        for mv in board.legal_moves() {
            let child = board.apply(mv);
            let (value, _) = self.alphabeta(&child, depth - 1, sense.flip(), window);
            match sense {
                Sense::Maximize => {
                    if value > best { best = value; best_move = Some(mv); }
                    window.alpha = window.alpha.max(value);
                }
                Sense::Minimize => {
                    if value < best { best = value; best_move = Some(mv); }
                    window.beta = window.beta.min(value);
                }
            }
            if self.prune && window.is_closed() {
                trace!("cutoff after {} at depth {} ({} >= {})", mv, depth, window.alpha, window.beta);
                break;
            }
        }
        (best, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_follows_fixed_convention() {
        assert_eq!(Sense::for_side(Side::White), Sense::Maximize);
        assert_eq!(Sense::for_side(Side::Black), Sense::Minimize);
        assert_eq!(Sense::Maximize.flip(), Sense::Minimize);
    }

    #[test]
    fn full_window_is_open() {
        assert!(!Window::FULL.is_closed());
        assert!(Window::new(Value::Score(2), Value::Score(2)).is_closed());
    }
}
