use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::board::loa::DEFAULT_MOVE_LIMIT;
use crate::board::Side;
use crate::search::SearchParams;

/// Who moves for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are typed in.
    Manual,
    /// Alpha-beta search.
    Auto,
    /// Uniformly random legal moves.
    Random,
}

impl PlayerKind {
    pub fn parse(s: &str) -> Option<PlayerKind> {
        match s.to_lowercase().as_str() {
            "manual" | "human" => Some(PlayerKind::Manual),
            "auto" | "machine" | "ai" => Some(PlayerKind::Auto),
            "random" => Some(PlayerKind::Random),
            _ => None,
        }
    }
}

/// Engine settings, loadable from JSON. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchParams,
    pub move_limit: u32,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            move_limit: DEFAULT_MOVE_LIMIT,
            white: PlayerKind::Auto,
            black: PlayerKind::Manual,
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid engine config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn player(&self, side: Side) -> PlayerKind {
        match side { Side::White => self.white, Side::Black => self.black }
    }

    pub fn set_player(&mut self, side: Side, kind: PlayerKind) {
        match side { Side::White => self.white = kind, Side::Black => self.black = kind }
    }
}
