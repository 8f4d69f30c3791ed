//! Text rendering.
//!
//! Columns are drawn vertically: each printed line is one row index,
//! highest row at the top, with slots separated by a single space.
//!
//! ```
//! use peg_solitaire::core::Board;
//! use peg_solitaire::render::{render, DISK_TOKENS};
//!
//! let board = Board::from_columns(vec![vec![1, 0], vec![1, 1]]).unwrap();
//! assert_eq!(board.to_string(), "0 1\n1 1");
//! assert_eq!(render(&board, DISK_TOKENS), "⚫ 🔴\n🔴 🔴");
//! ```

use std::fmt;

use crate::core::Board;

pub use crate::core::tokens::{TokenSet, DEFAULT_TOKENS, DISK_TOKENS};

/// Render `board` with `tokens[value]` standing in for each slot.
///
/// A value with no entry in `tokens`, or an empty entry, is written as
/// its number.
#[must_use]
pub fn render(board: &Board, tokens: &[&str]) -> String {
    let token = |value: u8| match tokens.get(usize::from(value)) {
        Some(s) if !s.is_empty() => (*s).to_string(),
        _ => value.to_string(),
    };

    let lines: Vec<String> = board
        .transpose()
        .columns()
        .map(|line| {
            line.iter()
                .map(|cell| token(cell.value()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    lines.into_iter().rev().collect::<Vec<_>>().join("\n")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, DEFAULT_TOKENS))
    }
}
