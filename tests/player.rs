mod common;

use common::{layout, random_positions, Node, ScriptedGame, BLACK_WIN_IN_ONE, WHITE_WIN_IN_ONE};
use loabot::board::{Board, GameBoard, Move, Side};
use loabot::game::play_game;
use loabot::player::{MachinePlayer, Player, RandomPlayer, SearchError};
use loabot::search::{SearchParams, Value};

#[test]
fn machine_picks_legal_moves() {
    let mut p = MachinePlayer::with_depth(2);
    let b = Board::startpos();
    let mv = p.select_move(&b).unwrap();
    assert!(b.is_legal(mv));
    for b in random_positions(3, 5, 6) {
        let mv = p.select_move(&b).unwrap();
        assert!(b.is_legal(mv), "{mv} in\n{b}");
    }
}

#[test]
fn machine_is_deterministic() {
    let b = Board::startpos().apply("b1-d3".parse().unwrap());
    let a = MachinePlayer::with_depth(2).select_move(&b).unwrap();
    let c = MachinePlayer::with_depth(2).select_move(&b).unwrap();
    assert_eq!(a, c);
}

#[test]
fn depth_defaults_and_floor() {
    assert_eq!(MachinePlayer::new(SearchParams::default()).choose_depth(), 4);
    assert_eq!(MachinePlayer::with_depth(0).choose_depth(), 1);
    assert_eq!(MachinePlayer::with_depth(3).params().depth, 3);
}

#[test]
fn finished_game_is_an_error() {
    let b = layout(WHITE_WIN_IN_ONE, Side::White).apply("c2-c3".parse().unwrap());
    let mut p = MachinePlayer::with_depth(2);
    assert_eq!(p.select_move(&b), Err(SearchError::GameDecided));
    assert!(Player::<Board>::choose_move(&mut p, &b).is_err());
}

#[test]
fn live_position_without_moves_is_an_error() {
    let g = ScriptedGame::new(vec![Node::scoring(Side::Black, 1)]);
    let mut p = MachinePlayer::with_depth(3);
    assert_eq!(p.select_move(&g), Err(SearchError::NoMoveFound { side: Side::Black, depth: 3 }));
    let err = Player::<ScriptedGame>::choose_move(&mut p, &g).unwrap_err();
    assert!(err.to_string().contains("black"), "{err}");
}

#[test]
fn black_machine_finds_its_win() {
    let b = layout(BLACK_WIN_IN_ONE, Side::Black);
    let mut p = MachinePlayer::with_depth(2);
    let res = p.analyze(&b).unwrap();
    assert_eq!(res.value, Value::Loss);
    let mv = res.best_move.unwrap();
    assert_eq!(b.apply(mv).winner(), Some(Side::Black));
}

#[test]
fn random_player_is_seeded() {
    let b = Board::startpos();
    let pick = |seed| {
        let mut r = RandomPlayer::new(seed);
        (0..5).map(|_| Player::<Board>::choose_move(&mut r, &b).unwrap()).collect::<Vec<Move>>()
    };
    assert_eq!(pick(9), pick(9));
    assert!(pick(9).iter().all(|m| b.is_legal(*m)));
}

#[test]
fn machine_against_random_replays_cleanly() {
    let mut white = MachinePlayer::with_depth(1);
    let mut black = RandomPlayer::new(5);
    let (record, end) = play_game(Board::startpos(), &mut white, &mut black, 40).unwrap();
    assert!(record.moves.len() <= 40);
    assert_eq!(record.black, "random");
    assert_eq!(record.finished, end.is_terminal());
    assert_eq!(record.winner, end.winner());
    let replay = Board::set_from_start_and_moves(&record.moves).unwrap();
    assert_eq!(replay, end);
}

#[derive(Default)]
struct Counting {
    inner: Option<RandomPlayer>,
    seen: Vec<Move>,
}

impl Player<Board> for Counting {
    fn name(&self) -> &str { "counting" }

    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Move> {
        let inner = self.inner.get_or_insert_with(|| RandomPlayer::new(1));
        Player::<Board>::choose_move(inner, board)
    }

    fn move_applied(&mut self, _board: &Board, mv: Move) { self.seen.push(mv); }
}

#[test]
fn both_players_hear_every_move() {
    let mut white = Counting::default();
    let mut black = Counting::default();
    let (record, _) = play_game(Board::startpos(), &mut white, &mut black, 10).unwrap();
    let heard: Vec<String> = white.seen.iter().map(|m| m.to_string()).collect();
    assert_eq!(heard, record.moves);
    assert_eq!(white.seen, black.seen);
}

#[test]
fn game_from_a_won_position_in_one() {
    let b = layout(WHITE_WIN_IN_ONE, Side::White);
    let mut white = MachinePlayer::with_depth(2);
    let mut black = RandomPlayer::new(0);
    let (record, _) = play_game(b, &mut white, &mut black, 10).unwrap();
    assert_eq!(record.moves, vec!["c2-c3".to_string()]);
    assert_eq!(record.winner, Some(Side::White));
    assert!(record.finished);
}
