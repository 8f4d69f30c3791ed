//! Error types.
//!
//! Illegal moves are not errors: `valid_move` answers with a boolean and
//! `update_board` with `None`. Only malformed boards and bad configuration
//! are reported through these types.

use std::path::PathBuf;

/// A board value that violates the grid invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The outer sequence had no columns at all.
    #[error("board has no columns")]
    Empty,

    /// A column's height differs from the first column's.
    #[error("board is not rectangular: column {column} has {found} slots, expected {expected}")]
    Irregular {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// A slot holds something other than an empty slot (0) or a peg (1).
    #[error("board contains invalid token {value} at ({col}, {row})")]
    InvalidToken { value: u8, col: usize, row: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
