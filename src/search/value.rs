use std::fmt;
use std::ops::Neg;
use serde::{Deserialize, Serialize};

/// Search value. The derived order is declaration order, then the score:
/// `NegInfinity < Loss < Score(i) < Score(j) < Win < PosInfinity` for `i < j`.
///
/// `Loss` and `Win` are decided games and sit outside every heuristic score.
/// The infinities only seed running extremes and bound the initial window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    NegInfinity,
    Loss,
    Score(i32),
    Win,
    PosInfinity,
}

impl Value {
    pub fn is_decided(self) -> bool { matches!(self, Value::Win | Value::Loss) }

    pub fn score(self) -> Option<i32> {
        match self { Value::Score(s) => Some(s), _ => None }
    }
}

// Perspective flip.
impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::NegInfinity => Value::PosInfinity,
            Value::Loss => Value::Win,
            Value::Score(s) => Value::Score(s.saturating_neg()),
            Value::Win => Value::Loss,
            Value::PosInfinity => Value::NegInfinity,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::NegInfinity => write!(f, "-inf"),
            Value::Loss => write!(f, "loss"),
            Value::Score(s) => write!(f, "{}", s),
            Value::Win => write!(f, "win"),
            Value::PosInfinity => write!(f, "+inf"),
        }
    }
}
