//! # Gomoku
//!
//! Rules engine and turn-state machine for two-player Gomoku (five-in-a-row)
//! on a fixed 14×14 board, plus a transport-agnostic JSON request/response
//! surface. Win detection scans only the four axes through the just-placed
//! stone, so every operation is synchronous and bounded.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-state machine
//! - [`api`] — Coordinate translation, wire types, request dispatch
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod api;
pub mod config;
pub mod error;
pub mod game;
