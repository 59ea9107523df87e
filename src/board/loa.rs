use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{GameBoard, Side};

pub const SIZE: usize = 8;
/// Total moves (both sides) after which an undecided game is drawn.
pub const DEFAULT_MOVE_LIMIT: u32 = 60;

// N, NE, E, SE, S, SW, W, NW as (column step, row step)
const DIRECTIONS: [(i32, i32); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("bad square: {0:?}")]
    BadSquare(String),
    #[error("bad move: {0:?} (expected e.g. c1-c3)")]
    BadMove(String),
    #[error("bad layout: {0}")]
    BadLayout(String),
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(col: usize, row: usize) -> Option<Square> {
        if col < SIZE && row < SIZE { Some(Square((row * SIZE + col) as u8)) } else { None }
    }

    pub fn col(self) -> usize { self.0 as usize % SIZE }
    pub fn row(self) -> usize { self.0 as usize / SIZE }
    pub fn index(self) -> usize { self.0 as usize }

    fn step(self, dc: i32, dr: i32, n: i32) -> Option<Square> {
        let c = self.col() as i32 + dc * n;
        let r = self.row() as i32 + dr * n;
        if c < 0 || r < 0 { return None; }
        Square::new(c as usize, r as usize)
    }

    fn all() -> impl Iterator<Item = Square> { (0..(SIZE * SIZE) as u8).map(Square) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col() as u8) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 { return Err(BoardError::BadSquare(s.to_string())); }
        let col = b[0].to_ascii_lowercase().wrapping_sub(b'a') as usize;
        let row = b[1].wrapping_sub(b'1') as usize;
        Square::new(col, row).ok_or_else(|| BoardError::BadSquare(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.trim().split_once('-').ok_or_else(|| BoardError::BadMove(s.to_string()))?;
        let from = from.parse().map_err(|_| BoardError::BadMove(s.to_string()))?;
        let to = to.parse().map_err(|_| BoardError::BadMove(s.to_string()))?;
        Ok(Move { from, to })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Side),
    Drawn,
}

/// Lines of Action position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; SIZE * SIZE],
    turn: Side,
    moves_made: u32,
    move_limit: u32,
    status: Status,
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    /// Black on b1-g1 and b8-g8, White on a2-a7 and h2-h7, Black to move.
    pub fn startpos() -> Self {
        let mut cells = [None; SIZE * SIZE];
        for c in 1..SIZE - 1 {
            cells[c] = Some(Side::Black);
            cells[(SIZE - 1) * SIZE + c] = Some(Side::Black);
        }
        for r in 1..SIZE - 1 {
            cells[r * SIZE] = Some(Side::White);
            cells[r * SIZE + SIZE - 1] = Some(Side::White);
        }
        Self::with_cells(cells, Side::Black)
    }

    /// Parses 64 cells given row 8 first, each `-` (or `.`), `b` or `w`.
    /// Whitespace is ignored, so one row per line reads naturally.
    pub fn from_layout(layout: &str, turn: Side) -> Result<Self, BoardError> {
        let mut cells = [None; SIZE * SIZE];
        let mut n = 0usize;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            let piece = match ch.to_ascii_lowercase() {
                '-' | '.' => None,
                'b' => Some(Side::Black),
                'w' => Some(Side::White),
                other => return Err(BoardError::BadLayout(format!("unexpected character {other:?}"))),
            };
            if n >= SIZE * SIZE { return Err(BoardError::BadLayout("more than 64 cells".into())); }
            let row = SIZE - 1 - n / SIZE;
            cells[row * SIZE + n % SIZE] = piece;
            n += 1;
        }
        if n != SIZE * SIZE { return Err(BoardError::BadLayout(format!("expected 64 cells, got {n}"))); }
        Ok(Self::with_cells(cells, turn))
    }

    fn with_cells(cells: [Option<Side>; SIZE * SIZE], turn: Side) -> Self {
        let mut b = Self { cells, turn, moves_made: 0, move_limit: DEFAULT_MOVE_LIMIT, status: Status::InProgress };
        b.status = b.compute_status();
        b
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, BoardError> {
        let mut b = Self::startpos();
        for m in moves { b.make_move_str(m)?; }
        Ok(b)
    }

    pub fn get(&self, sq: Square) -> Option<Side> { self.cells[sq.index()] }
    pub fn turn(&self) -> Side { self.turn }
    pub fn status(&self) -> Status { self.status }
    pub fn moves_made(&self) -> u32 { self.moves_made }
    pub fn move_limit(&self) -> u32 { self.move_limit }

    pub fn set_move_limit(&mut self, limit: u32) {
        self.move_limit = limit;
        self.status = self.compute_status();
    }

    pub fn is_legal(&self, mv: Move) -> bool { self.legal_moves().contains(&mv) }

    pub fn legal_moves_count(&self) -> usize { self.legal_moves().len() }

    pub fn make_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) { return Err(BoardError::IllegalMove(mv)); }
        self.play(mv);
        Ok(())
    }

    pub fn make_move_str(&mut self, text: &str) -> Result<Move, BoardError> {
        let mv: Move = text.parse()?;
        self.make_move(mv)?;
        Ok(mv)
    }

    fn play(&mut self, mv: Move) {
        self.cells[mv.to.index()] = self.cells[mv.from.index()].take();
        self.turn = self.turn.opposite();
        self.moves_made += 1;
        self.status = self.compute_status();
    }

    // The side that just moved wins if both sides end up connected.
    fn compute_status(&self) -> Status {
        let mover = self.turn.opposite();
        if self.contiguous(mover) { return Status::Won(mover); }
        if self.contiguous(self.turn) { return Status::Won(self.turn); }
        if self.moves_made >= self.move_limit { return Status::Drawn; }
        Status::InProgress
    }

    fn contiguous(&self, side: Side) -> bool { self.regions(side).len() == 1 }

    /// Pieces of either color on the whole line through `sq` along (dc, dr).
    fn line_count(&self, sq: Square, dc: i32, dr: i32) -> i32 {
        let mut n = 1;
        for sign in [1, -1] {
            let mut k = 1;
            while let Some(s) = sq.step(dc * sign, dr * sign, k) {
                if self.cells[s.index()].is_some() { n += 1; }
                k += 1;
            }
        }
        n
    }

    fn generate(&self) -> Vec<Move> {
        let me = self.turn;
        let mut out = Vec::with_capacity(64);
        for from in Square::all().filter(|&s| self.cells[s.index()] == Some(me)) {
            for &(dc, dr) in DIRECTIONS.iter() {
                let dist = self.line_count(from, dc, dr);
                let to = match from.step(dc, dr, dist) { Some(t) => t, None => continue };
                if self.cells[to.index()] == Some(me) { continue; }
                let blocked = (1..dist).any(|k| {
                    from.step(dc, dr, k).map_or(false, |s| self.cells[s.index()] == Some(me.opposite()))
                });
                if !blocked { out.push(Move { from, to }); }
            }
        }
        out
    }

    /// Connected (8-neighbour) group sizes, largest first.
    pub fn regions(&self, side: Side) -> Vec<usize> {
        let mut seen = [false; SIZE * SIZE];
        let mut sizes = Vec::new();
        let mut stack = Vec::with_capacity(SIZE * SIZE);
        for start in Square::all() {
            if seen[start.index()] || self.cells[start.index()] != Some(side) { continue; }
            seen[start.index()] = true;
            stack.push(start);
            let mut size = 0usize;
            while let Some(sq) = stack.pop() {
                size += 1;
                for &(dc, dr) in DIRECTIONS.iter() {
                    if let Some(n) = sq.step(dc, dr, 1) {
                        if !seen[n.index()] && self.cells[n.index()] == Some(side) {
                            seen[n.index()] = true;
                            stack.push(n);
                        }
                    }
                }
            }
            sizes.push(size);
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

impl GameBoard for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        if self.status != Status::InProgress { return Vec::new(); }
        self.generate()
    }

    fn apply(&self, mv: Move) -> Self {
        let mut child = self.clone();
        child.play(mv);
        child
    }

    fn is_terminal(&self) -> bool { self.status != Status::InProgress }

    fn winner(&self) -> Option<Side> {
        match self.status { Status::Won(s) => Some(s), _ => None }
    }

    fn piece_count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| **c == Some(side)).count()
    }

    fn region_sizes(&self, side: Side) -> Vec<usize> { self.regions(side) }

    fn side_to_move(&self) -> Side { self.turn }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..SIZE {
                let ch = match self.cells[row * SIZE + col] {
                    Some(Side::Black) => 'b',
                    Some(Side::White) => 'w',
                    None => '-',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "Next move: {}", self.turn)
    }
}
