use super::{Board, Player};

/// A move rejected by the engine. The game state is unmodified on either
/// variant; the caller must resubmit a corrected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Out of board range")]
    OutOfRange,

    #[error("Cell already occupied")]
    CellOccupied,
}

/// Result of a successful move.
///
/// `current_player` is the player to move next — except when `winner` is
/// set, in which case it still names the player who just won. The turn
/// marker is deliberately not advanced after a winning move so callers can
/// answer "who won" from the same field they use for "whose turn".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub col: usize,
    pub winner: Option<Player>,
    pub current_player: Player,
}

/// The single authoritative game: board plus turn marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state: empty board, black to move
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Black,
        }
    }

    /// Read-only view of the board and whose turn it is. Never fails.
    pub fn snapshot(&self) -> (&Board, Player) {
        (&self.board, self.current_player)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Place the current player's stone at zero-based (row, col).
    ///
    /// Validates bounds then occupancy, places the stone, and runs win
    /// detection centered on it. On a non-winning move the turn passes to
    /// the other player; on a winning move the turn marker is left holding
    /// the winner. There is no game-over latch and no draw detection: a
    /// full board simply keeps rejecting occupied cells.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if !Board::in_bounds(row, col) {
            return Err(MoveError::OutOfRange);
        }
        if self.board.get(row, col).player().is_some() {
            return Err(MoveError::CellOccupied);
        }

        let mover = self.current_player;
        self.board.place(row, col, mover.to_cell());

        let winner = if self.board.check_win(row, col) {
            Some(mover)
        } else {
            self.current_player = mover.other();
            None
        };

        Ok(MoveOutcome {
            row,
            col,
            winner,
            current_player: self.current_player,
        })
    }

    /// Clear the board and hand the first move back to black
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
