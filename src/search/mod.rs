pub mod alphabeta;
pub mod eval;
pub mod value;

pub use alphabeta::{SearchParams, SearchResult, Searcher, Sense, Window, MAXIMIZER};
pub use eval::evaluate;
pub use value::Value;
