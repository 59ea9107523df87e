use crate::board::{GameBoard, Side};
use crate::search::value::Value;

/// Static score of `board` for `side`.
///
/// A decided game is `Win`/`Loss`. Otherwise the score counts how many of
/// region count, largest region and piece count `side` strictly leads in, so it
/// is in 0..=3. It is not a differential: the two sides' scores need not be
/// negations of each other.
pub fn evaluate<B: GameBoard>(board: &B, side: Side) -> Value {
    if board.is_terminal() {
        match board.winner() {
            Some(w) if w == side => return Value::Win,
            Some(_) => return Value::Loss,
            None => {}
        }
    }
    let opp = side.opposite();
    let mine = board.region_sizes(side);
    let theirs = board.region_sizes(opp);
    let largest = |r: &[usize]| r.iter().copied().max().unwrap_or(0);

    let mut count = 0;
    if mine.len() > theirs.len() { count += 1; }
    if largest(&mine) > largest(&theirs) { count += 1; }
    if board.piece_count(side) > board.piece_count(opp) { count += 1; }
    Value::Score(count)
}
