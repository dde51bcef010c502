//! Core Gomoku game logic: board representation, player types, and the
//! turn-state machine with last-move win detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, BOARD_SIZE};
pub use player::Player;
pub use state::{GameState, MoveError, MoveOutcome};
