use std::sync::Mutex;

use crate::error::{MoveError, RequestError};
use crate::game::GameState;

use super::coords;
use super::messages::{
    board_view, ErrorResponse, GameResponse, MoveEcho, MoveRequest, MoveResponse, Request,
    ResetResponse, Status,
};

/// Request/response surface over the single authoritative game.
///
/// Holds the one `GameState` behind a mutex so a concurrent transport can
/// share the service; every operation locks for its whole duration, which
/// is enough since the engine does no I/O and each operation is
/// O(BOARD_SIZE) at most.
pub struct GameService {
    state: Mutex<GameState>,
}

impl GameService {
    pub fn new() -> Self {
        GameService {
            state: Mutex::new(GameState::new()),
        }
    }

    /// Current board and turn
    pub fn game(&self) -> GameResponse {
        let state = self.lock();
        let (board, current_player) = state.snapshot();
        GameResponse {
            board: board_view(board),
            current_player,
        }
    }

    /// Validate, translate, and apply a client move.
    ///
    /// Engine state is unmodified on any error.
    pub fn submit_move(&self, req: &MoveRequest) -> Result<MoveResponse, RequestError> {
        let row_letter = req
            .row
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(RequestError::MissingField)?;
        let col_value = req
            .col
            .as_ref()
            .filter(|c| !c.is_empty())
            .ok_or(RequestError::MissingField)?;

        let row = coords::row_index(row_letter).ok_or(MoveError::OutOfRange)?;
        let col = col_value
            .as_i64()
            .and_then(coords::col_index)
            .ok_or(MoveError::OutOfRange)?;

        let mut state = self.lock();
        let outcome = state.apply_move(row, col).inspect_err(|err| {
            log::warn!("rejected move ({row}, {col}): {err}");
        })?;

        match outcome.winner {
            Some(winner) => log::info!("{} wins at ({row}, {col})", winner.name()),
            None => log::debug!(
                "{} played ({row}, {col}), {} to move",
                outcome.current_player.other().name(),
                outcome.current_player.name()
            ),
        }

        Ok(MoveResponse {
            status: Status::Success,
            board: board_view(state.board()),
            mv: MoveEcho {
                row: row_letter.trim().to_ascii_uppercase(),
                col: col_value.clone(),
            },
            current_player: outcome.current_player,
            winner: outcome.winner,
        })
    }

    /// Start a fresh game
    pub fn reset(&self) -> ResetResponse {
        let mut state = self.lock();
        state.reset();
        log::info!("game reset");
        let (board, current_player) = state.snapshot();
        ResetResponse {
            status: Status::Success,
            message: "Game reset",
            board: board_view(board),
            current_player,
        }
    }

    /// Dispatch a request to the matching operation, folding request errors
    /// into the wire error shape.
    pub fn handle(&self, request: Request) -> Result<serde_json::Value, serde_json::Error> {
        match request {
            Request::Game => serde_json::to_value(self.game()),
            Request::Move(req) => match self.submit_move(&req) {
                Ok(response) => serde_json::to_value(response),
                Err(err) => serde_json::to_value(ErrorResponse::new(err.to_string())),
            },
            Request::Reset => serde_json::to_value(self.reset()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GameState> {
        // Engine operations cannot panic while holding the lock
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
