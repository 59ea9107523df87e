// Lines of Action engine: fixed-depth alpha-beta over a pluggable board.
pub mod board;
pub mod config;
pub mod game;
pub mod perft;
pub mod player;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, GameBoard, Move, Side};
pub use player::{MachinePlayer, Player, RandomPlayer, SearchError};
pub use search::{SearchParams, SearchResult, Searcher, Sense, Value, Window};
