use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Grid coordinate as sent by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InitMessage {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub walls: Vec<Position>,
    #[serde(default)]
    pub exit: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreasureState {
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub collected: bool,
}

impl TreasureState {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateMessage {
    pub players: HashMap<String, Position>,
    pub enemies: Vec<Position>,
    #[serde(default)]
    pub treasure: Option<TreasureState>,
    #[serde(default)]
    pub you: Option<String>,
}

/// Frames pushed by the game server
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "init")]
    Init(InitMessage),
    #[serde(rename = "state")]
    State(StateMessage),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Frames sent to the game server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "move")]
    Move { dir: Direction },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed server frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ServerMessage {
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
