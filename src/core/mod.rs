//! Core types: slots, positions, moves, the board value, configuration,
//! RNG, display tokens.
//!
//! Nothing here knows the rules of the game. Legality and transitions
//! live in `rules`.

pub mod cell;
pub mod position;
pub mod board;
pub mod config;
pub mod rng;
pub mod tokens;

pub use cell::Cell;
pub use position::{Move, Position};
pub use board::Board;
pub use config::{BoardConfig, DEFAULT_SIZE};
pub use rng::GameRng;
pub use tokens::TokenSet;
