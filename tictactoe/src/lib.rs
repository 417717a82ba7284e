//! Rules for tic-tac-toe on an N x N board.
//!
//! [`Game`] is the entry point. It validates moves, detects wins and ties,
//! and keeps track of whose turn it is. Rendering the board and reading input
//! is up to the caller.

pub use board::*;
pub use config::*;
pub use errors::*;
pub use game::*;
pub use moves::*;
pub use player::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
mod game;
mod moves;
mod player;
