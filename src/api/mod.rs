//! Request/response surface over the game engine: coordinate translation
//! from the external letter/number notation, serde wire types, and the
//! dispatching service that any transport can call.

pub mod coords;
mod messages;
mod service;

pub use messages::{
    board_view, BoardView, ColValue, ErrorResponse, GameResponse, MoveEcho, MoveRequest,
    MoveResponse, Request, ResetResponse, Status,
};
pub use service::GameService;
