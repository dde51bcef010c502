use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Stone color. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Black.name(), "black");
        assert_eq!(Player::White.name(), "white");
    }

    #[test]
    fn test_wire_representation() {
        assert_eq!(serde_json::to_string(&Player::Black).unwrap(), "\"black\"");
        assert_eq!(
            serde_json::from_str::<Player>("\"white\"").unwrap(),
            Player::White
        );
    }
}
