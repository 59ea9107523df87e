#![allow(dead_code)]

use std::rc::Rc;

use loabot::board::{Board, GameBoard, Side};
use loabot::search::{evaluate, Sense, Value, MAXIMIZER};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// White to move; c2-c3 and d4-d3 both connect all white pieces.
pub const WHITE_WIN_IN_ONE: &str = "
    --------
    --------
    --------
    --------
    ---w----
    --------
    -ww--b--
    w---b--b";

// Same shape with colors swapped, Black to move.
pub const BLACK_WIN_IN_ONE: &str = "
    --------
    --------
    --------
    --------
    ---b----
    --------
    -bb--w--
    b---w--w";

pub fn layout(text: &str, turn: Side) -> Board {
    Board::from_layout(text, turn).expect("valid layout")
}

/// Positions reached by seeded random play from the start, none of them finished.
pub fn random_positions(seed: u64, count: usize, plies: usize) -> Vec<Board> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = Vec::new();
    while out.len() < count {
        let mut b = Board::startpos();
        for _ in 0..plies {
            let moves = b.legal_moves();
            if moves.is_empty() { break; }
            b = b.apply(moves[rng.gen_range(0..moves.len())]);
        }
        if !b.is_terminal() { out.push(b); }
    }
    out
}

/// A node of a hand-written game tree. Moves are child node ids.
#[derive(Clone, Debug)]
pub struct Node {
    pub to_move: Side,
    pub winner: Option<Side>,
    pub terminal: bool,
    pub black_regions: Vec<usize>,
    pub white_regions: Vec<usize>,
    pub children: Vec<usize>,
}

impl Node {
    pub fn new(to_move: Side, white_regions: &[usize], black_regions: &[usize]) -> Self {
        Self {
            to_move,
            winner: None,
            terminal: false,
            black_regions: black_regions.to_vec(),
            white_regions: white_regions.to_vec(),
            children: Vec::new(),
        }
    }

    /// Regions chosen so that `evaluate(node, White)` is `Score(n)`, n in 0..=3.
    pub fn scoring(to_move: Side, n: i32) -> Self {
        match n {
            0 => Node::new(to_move, &[1], &[2]),
            1 => Node::new(to_move, &[1, 1], &[3]),
            2 => Node::new(to_move, &[3], &[1, 1]),
            3 => Node::new(to_move, &[2, 2], &[1]),
            _ => panic!("no features give score {n}"),
        }
    }

    pub fn won_by(to_move: Side, winner: Side) -> Self {
        let mut n = Node::new(to_move, &[2], &[2]);
        n.terminal = true;
        n.winner = Some(winner);
        n
    }

    pub fn with_children(mut self, children: &[usize]) -> Self {
        self.children = children.to_vec();
        self
    }
}

#[derive(Clone, Debug)]
pub struct ScriptedGame {
    nodes: Rc<Vec<Node>>,
    at: usize,
}

impl ScriptedGame {
    pub fn new(nodes: Vec<Node>) -> Self { Self { nodes: Rc::new(nodes), at: 0 } }
    pub fn at(&self) -> usize { self.at }
    fn node(&self) -> &Node { &self.nodes[self.at] }
}

impl GameBoard for ScriptedGame {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        if self.node().terminal { Vec::new() } else { self.node().children.clone() }
    }

    fn apply(&self, mv: usize) -> Self { Self { nodes: Rc::clone(&self.nodes), at: mv } }

    fn is_terminal(&self) -> bool { self.node().terminal }

    fn winner(&self) -> Option<Side> { self.node().winner }

    fn piece_count(&self, side: Side) -> usize { self.region_sizes(side).iter().sum() }

    fn region_sizes(&self, side: Side) -> Vec<usize> {
        match side {
            Side::Black => self.node().black_regions.clone(),
            Side::White => self.node().white_regions.clone(),
        }
    }

    fn side_to_move(&self) -> Side { self.node().to_move }
}

/// Random tree of the given height; the root is never finished. Some inner
/// nodes are won games and some leaves sit above `height` (live, no moves).
pub fn random_tree(seed: u64, height: u32, max_branch: usize) -> ScriptedGame {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut nodes = Vec::new();
    let root_side = if rng.gen_bool(0.5) { Side::White } else { Side::Black };
    grow(&mut rng, &mut nodes, root_side, height, max_branch, true);
    ScriptedGame::new(nodes)
}

fn grow(rng: &mut SmallRng, nodes: &mut Vec<Node>, to_move: Side, height: u32, max_branch: usize, root: bool) -> usize {
    let id = nodes.len();
    let node = if !root && rng.gen_ratio(1, 10) {
        let w = if rng.gen_bool(0.5) { Side::White } else { Side::Black };
        Node::won_by(to_move, w)
    } else {
        Node::scoring(to_move, rng.gen_range(0..=3))
    };
    let terminal = node.terminal;
    nodes.push(node);
    if height > 0 && !terminal {
        let n = if !root && rng.gen_ratio(1, 20) { 0 } else { rng.gen_range(1..=max_branch) };
        for _ in 0..n {
            let child = grow(rng, nodes, to_move.opposite(), height - 1, max_branch, false);
            nodes[id].children.push(child);
        }
    }
    id
}

/// Plain minimax with the searcher's conventions: seeded extremes, first
/// strictly better move wins, finished games evaluated in place.
pub fn minimax<B: GameBoard>(board: &B, depth: u32, sense: Sense) -> (Value, Option<B::Move>) {
    if depth == 0 || board.is_terminal() { return (evaluate(board, MAXIMIZER), None); }
    let mut best = match sense { Sense::Maximize => Value::NegInfinity, Sense::Minimize => Value::PosInfinity };
    let mut best_move = None;
    for mv in board.legal_moves() {
        let (v, _) = minimax(&board.apply(mv), depth - 1, sense.flip());
        let better = match sense { Sense::Maximize => v > best, Sense::Minimize => v < best };
        if better {
            best = v;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}
