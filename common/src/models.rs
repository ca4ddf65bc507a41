use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a game, as handed out by the service.
///
/// The service owns its format, so both numeric and textual ids are accepted
/// and written back exactly as received.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(u64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(id) => write!(f, "{}", id),
            GameId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        GameId::Number(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId::Text(id.to_owned())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        GameId::Text(id)
    }
}

impl From<&GameId> for GameId {
    fn from(id: &GameId) -> Self {
        id.clone()
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

/// Body of a game creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewGame {
    pub rows: usize,
    pub columns: usize,
    pub mines: usize,
}

impl Default for NewGame {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 9,
            mines: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RevealCell {
    pub x_position: usize,
    pub y_position: usize,
}

impl From<Pos> for RevealCell {
    fn from(pos: Pos) -> Self {
        Self {
            x_position: pos.x,
            y_position: pos.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagCell {
    pub x_position: usize,
    pub y_position: usize,
    pub is_flagged: bool,
}

impl FlagCell {
    pub fn new(pos: Pos, is_flagged: bool) -> Self {
        Self {
            x_position: pos.x,
            y_position: pos.y,
            is_flagged,
        }
    }
}

/// Typed view over a game descriptor returned by the service.
///
/// The board is left as raw JSON; its cell encoding belongs to the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Game {
    pub id: GameId,
    pub rows: usize,
    pub columns: usize,
    pub mines: usize,
    #[serde(default)]
    pub was_lost: bool,
    #[serde(default)]
    pub was_won: bool,
    #[serde(default)]
    pub is_over: bool,
    #[serde(default)]
    pub board: Value,
}

impl Game {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
