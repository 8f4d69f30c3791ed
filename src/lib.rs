//! # peg-solitaire
//!
//! A rules engine for Peg Solitaire on a square grid.
//!
//! Pegs jump over an adjacent peg into an empty slot two away, removing
//! the peg they passed. The game ends when no such jump remains; leaving a
//! single peg is a win.
//!
//! ## Design Principles
//!
//! 1. **Stateless rules**: every engine function takes a board and returns
//!    a value. Nothing is cached between calls.
//!
//! 2. **Immutable boards**: a move produces a new `Board`. Columns are
//!    persistent vectors via `im-rs`, so untouched columns are shared.
//!
//! 3. **Answers, not errors**: illegal moves come back as `false` or
//!    `None`. Only malformed boards and bad configuration are errors.
//!
//! ## Modules
//!
//! - `core`: slots, positions, moves, the board, configuration, RNG,
//!   token sets
//! - `rules`: construction, legality, transitions, terminal detection
//! - `render`: text rendering
//! - `session`: caller-owned board plus two-click selection
//! - `error`: error types

pub mod core;
pub mod error;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, BoardConfig, Cell, GameRng, Move, Position, TokenSet};

pub use crate::error::{BoardError, ConfigError};

pub use crate::render::{render, DEFAULT_TOKENS, DISK_TOKENS};

pub use crate::rules::Outcome;

pub use crate::session::{ClickOutcome, Session};
