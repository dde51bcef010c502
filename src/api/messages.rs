use serde::{Deserialize, Serialize};

use crate::game::{Board, Player, BOARD_SIZE};

/// Wire form of the board: N×N of `null` / `"black"` / `"white"`.
pub type BoardView = Vec<Vec<Option<Player>>>;

/// Build the wire view of a board.
pub fn board_view(board: &Board) -> BoardView {
    (0..BOARD_SIZE)
        .map(|row| (0..BOARD_SIZE).map(|col| board.get(row, col).player()).collect())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Column value as submitted by the client: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColValue {
    Number(i64),
    Text(String),
}

impl ColValue {
    /// Parse to an integer, if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ColValue::Number(n) => Some(*n),
            ColValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether the value counts as absent for validation purposes
    pub fn is_empty(&self) -> bool {
        matches!(self, ColValue::Text(s) if s.trim().is_empty())
    }
}

/// A client request, tagged on `"op"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Get current board and turn
    Game,
    /// Submit a move
    Move(MoveRequest),
    /// Start a fresh game
    Reset,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default)]
    pub col: Option<ColValue>,
}

/// Response to a state query
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub board: BoardView,
    pub current_player: Player,
}

/// The applied move, echoed in the client's own notation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveEcho {
    pub row: String,
    pub col: ColValue,
}

/// Response to a successful move. `winner` is present only when the move
/// won, and `current_player` then also names the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResponse {
    pub status: Status,
    pub board: BoardView,
    #[serde(rename = "move")]
    pub mv: MoveEcho,
    pub current_player: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub status: Status,
    pub message: &'static str,
    pub board: BoardView,
    pub current_player: Player,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: Status::Error,
            message: message.into(),
        }
    }
}
