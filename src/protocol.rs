use std::io::{BufRead, Write};

use anyhow::Result;
use log::info;

use crate::board::{Board, GameBoard, Move, Side, Status};
use crate::config::{EngineConfig, PlayerKind};
use crate::player::{MachinePlayer, Player, RandomPlayer};

const HELP: &str = "\
commands:
  c1-c3            play a move for the side to move
  go               let the engine move once for the side to move
  new              start a new game
  board            print the position
  auto|manual|random <black|white>
                   choose who moves for a side
  depth N          search depth for automated moves
  limit N          total move limit before a tie
  seed N           reseed the random player
  help             this text
  quit             exit";

/// Line-oriented front end: reads commands, writes replies.
pub struct TextEngine {
    board: Board,
    config: EngineConfig,
    machine: MachinePlayer,
    random: RandomPlayer,
    announced: bool,
}

impl TextEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut board = Board::startpos();
        board.set_move_limit(config.move_limit);
        Self {
            board,
            machine: MachinePlayer::new(config.search),
            random: RandomPlayer::new(config.seed),
            config,
            announced: false,
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn config(&self) -> &EngineConfig { &self.config }

    /// Runs until `quit` or end of input. Search failures end the loop with an error.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.autoplay(out)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            if !self.handle(line, out)? { break; }
            out.flush()?;
        }
        out.flush()?;
        Ok(())
    }

    /// Returns false on `quit`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let mut tokens = line.split_whitespace();
        let cmd = tokens.next().unwrap_or("");
        let arg = tokens.next();
        match cmd {
            "quit" | "exit" => return Ok(false),
            "help" => writeln!(out, "{}", HELP)?,
            "board" | "dump" => writeln!(out, "{}", self.board)?,
            "new" => {
                self.cmd_new();
                self.autoplay(out)?;
            }
            "go" => {
                if self.board.is_terminal() {
                    writeln!(out, "error: game is over")?;
                } else {
                    self.play_automated(PlayerKind::Auto, out)?;
                    self.autoplay(out)?;
                }
            }
            "depth" => match arg.and_then(|s| s.parse::<u32>().ok()) {
                Some(d) if d > 0 => {
                    self.config.search.depth = d;
                    self.machine = MachinePlayer::new(self.config.search);
                }
                _ => writeln!(out, "error: depth needs a positive number")?,
            },
            "limit" => match arg.and_then(|s| s.parse::<u32>().ok()) {
                Some(n) => {
                    self.config.move_limit = n;
                    self.board.set_move_limit(n);
                    if !self.board.is_terminal() { self.announced = false; }
                    self.announce(out)?;
                }
                None => writeln!(out, "error: limit needs a number")?,
            },
            "seed" => match arg.and_then(|s| s.parse::<u64>().ok()) {
                Some(s) => {
                    self.config.seed = s;
                    self.random = RandomPlayer::new(s);
                }
                None => writeln!(out, "error: seed needs a number")?,
            },
            "auto" | "manual" | "random" => match (PlayerKind::parse(cmd), arg.and_then(Side::parse)) {
                (Some(kind), Some(side)) => {
                    self.config.set_player(side, kind);
                    self.autoplay(out)?;
                }
                _ => writeln!(out, "error: usage: {} <black|white>", cmd)?,
            },
            _ => self.manual_move(line, out)?,
        }
        Ok(true)
    }

    fn cmd_new(&mut self) {
        self.board = Board::startpos();
        self.board.set_move_limit(self.config.move_limit);
        self.announced = false;
        info!("new game");
    }

    fn manual_move<W: Write>(&mut self, text: &str, out: &mut W) -> Result<()> {
        if self.board.is_terminal() {
            writeln!(out, "error: game is over")?;
            return Ok(());
        }
        let mv = match text.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                return Ok(());
            }
        };
        if let Err(e) = self.board.make_move(mv) {
            writeln!(out, "error: {}", e)?;
            return Ok(());
        }
        self.notify(mv);
        self.announce(out)?;
        self.autoplay(out)
    }

    // Lets automated sides move until a manual side is to move or the game ends.
    fn autoplay<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while !self.board.is_terminal() {
            let kind = self.config.player(self.board.side_to_move());
            if kind == PlayerKind::Manual { break; }
            self.play_automated(kind, out)?;
        }
        Ok(())
    }

    fn play_automated<W: Write>(&mut self, kind: PlayerKind, out: &mut W) -> Result<()> {
        let mv = match kind {
            PlayerKind::Random => Player::<Board>::choose_move(&mut self.random, &self.board)?,
            _ => self.machine.select_move(&self.board)?,
        };
        self.board.make_move(mv)?;
        writeln!(out, "* {}", mv)?;
        self.notify(mv);
        self.announce(out)
    }

    fn notify(&mut self, mv: Move) {
        Player::<Board>::move_applied(&mut self.machine, &self.board, mv);
        Player::<Board>::move_applied(&mut self.random, &self.board, mv);
    }

    fn announce<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.announced { return Ok(()); }
        let msg = match self.board.status() {
            Status::InProgress => return Ok(()),
            Status::Won(Side::Black) => "Black wins.",
            Status::Won(Side::White) => "White wins.",
            Status::Drawn => "Tie game.",
        };
        self.announced = true;
        writeln!(out, "{}", msg)?;
        Ok(())
    }
}
