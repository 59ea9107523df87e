use anyhow::bail;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::{GameBoard, Side};
use crate::search::{SearchParams, SearchResult, Searcher, Sense, Window};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller asked for a move in a finished game.
    #[error("a move was requested but the game is already over")]
    GameDecided,
    #[error("depth {depth} search for {side} found no move in a live position")]
    NoMoveFound { side: Side, depth: u32 },
}

/// Something that picks moves for whichever side is to move.
pub trait Player<B: GameBoard> {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &B) -> anyhow::Result<B::Move>;

    /// Called by the game loop once `mv` has been played; `board` is the
    /// resulting position.
    fn move_applied(&mut self, _board: &B, _mv: B::Move) {}
}

/// Picks moves with a fixed-depth alpha-beta search.
pub struct MachinePlayer {
    name: String,
    params: SearchParams,
    searcher: Searcher,
}

impl MachinePlayer {
    pub fn new(params: SearchParams) -> Self {
        Self { name: format!("machine(depth {})", params.depth), params, searcher: Searcher::new(&params) }
    }

    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchParams { depth, ..SearchParams::default() })
    }

    pub fn params(&self) -> SearchParams { self.params }

    // Fixed for now; a per-position policy would hook in here.
    pub fn choose_depth(&self) -> u32 { self.params.depth.max(1) }

    /// Full search result for the side to move.
    pub fn analyze<B: GameBoard>(&mut self, board: &B) -> Result<SearchResult<B::Move>, SearchError> {
        if board.is_terminal() { return Err(SearchError::GameDecided); }
        let side = board.side_to_move();
        let depth = self.choose_depth();
        let sense = Sense::for_side(side);
        let res = self.searcher.search(board, depth, sense, Window::FULL);
        match res.best_move {
            Some(mv) => {
                debug!("{} ({:?}) depth {}: {} value={} nodes={}", side, sense, depth, mv, res.value, res.nodes);
                Ok(res)
            }
            None => Err(SearchError::NoMoveFound { side, depth }),
        }
    }

    pub fn select_move<B: GameBoard>(&mut self, board: &B) -> Result<B::Move, SearchError> {
        let res = self.analyze(board)?;
        res.best_move.ok_or(SearchError::NoMoveFound { side: board.side_to_move(), depth: self.choose_depth() })
    }
}

impl<B: GameBoard> Player<B> for MachinePlayer {
    fn name(&self) -> &str { &self.name }

    fn choose_move(&mut self, board: &B) -> anyhow::Result<B::Move> {
        Ok(self.select_move(board)?)
    }

    fn move_applied(&mut self, board: &B, mv: B::Move) {
        trace!("{}: {} played, {} to move", self.name, mv, board.side_to_move());
    }
}

/// Uniformly random legal moves.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl<B: GameBoard> Player<B> for RandomPlayer {
    fn name(&self) -> &str { "random" }

    fn choose_move(&mut self, board: &B) -> anyhow::Result<B::Move> {
        let moves = board.legal_moves();
        if moves.is_empty() { bail!("no legal moves for {}", board.side_to_move()); }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}
