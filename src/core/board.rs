//! The board value.
//!
//! A `Board` is a rectangular grid stored as a sequence of columns,
//! indexed `board[col][row]`. Boards are never mutated: every change
//! produces a new value. Columns are persistent vectors (`im-rs`), so a
//! jump that touches one or two columns shares the rest with its parent.
//!
//! ## Usage
//!
//! ```
//! use peg_solitaire::core::{Board, Cell, Position};
//!
//! let board = Board::from_columns(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 0],
//! ]).unwrap();
//!
//! assert_eq!(board.get(Position::new(0, 1)), Some(Cell::Peg));
//! assert_eq!(board.peg_count(), 3);
//!
//! let cleared = board.with_cell(Position::new(0, 0), Cell::Empty);
//! assert_eq!(cleared.peg_count(), 2);
//! assert_eq!(board.peg_count(), 3); // unchanged
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::position::Position;
use crate::error::BoardError;

/// A rectangular grid of slots.
///
/// Constructed boards are always square. Boards built with
/// [`Board::from_columns`] only need to be rectangular.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Board {
    columns: Vector<Vector<Cell>>,
}

impl Board {
    /// A `size`×`size` board with every slot set to `cell`.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn filled(size: usize, cell: Cell) -> Self {
        assert!(size > 0, "Board must have at least one slot");

        let column: Vector<Cell> = std::iter::repeat(cell).take(size).collect();
        Self {
            columns: std::iter::repeat(column).take(size).collect(),
        }
    }

    /// Build a board from raw column data, validating it eagerly.
    ///
    /// Fails with [`BoardError::Irregular`] when columns differ in height and
    /// [`BoardError::InvalidToken`] when a slot is neither 0 nor 1. Shape is
    /// checked before tokens.
    pub fn from_columns(columns: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let expected = columns.first().ok_or(BoardError::Empty)?.len();

        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(BoardError::Irregular {
                column,
                expected,
                found,
            });
        }

        let mut parsed = Vector::new();
        for (col, values) in columns.into_iter().enumerate() {
            let mut column = Vector::new();
            for (row, value) in values.into_iter().enumerate() {
                let cell = Cell::from_value(value)
                    .ok_or(BoardError::InvalidToken { value, col, row })?;
                column.push_back(cell);
            }
            parsed.push_back(column);
        }

        Ok(Self { columns: parsed })
    }

    /// Number of columns (outer index range).
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of slots per column (inner index range).
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.front().map_or(0, Vector::len)
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.width() && pos.row < self.height()
    }

    /// Cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.columns.get(pos.col)?.get(pos.row).copied()
    }

    /// A new board with `pos` set to `cell`. Out-of-bounds positions leave
    /// the copy unchanged.
    #[must_use]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        if !self.contains(pos) {
            return self.clone();
        }
        let column = self.columns[pos.col].update(pos.row, cell);
        Self {
            columns: self.columns.update(pos.col, column),
        }
    }

    /// Iterate over columns.
    pub fn columns(&self) -> impl Iterator<Item = &Vector<Cell>> + '_ {
        self.columns.iter()
    }

    /// Iterate over every slot with its position, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, &cell)| (Position::new(col, row), cell))
        })
    }

    /// Swap the two axes: row `i` of the result is built from slot `i` of
    /// every column.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let columns = (0..self.height())
            .map(|row| self.columns.iter().map(|column| column[row]).collect())
            .collect();
        Self { columns }
    }

    /// Number of pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_peg()).count()
    }

    /// Number of empty slots on the board.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Raw column data, the inverse of [`Board::from_columns`].
    #[must_use]
    pub fn to_columns(&self) -> Vec<Vec<u8>> {
        self.columns
            .iter()
            .map(|column| column.iter().map(|cell| cell.value()).collect())
            .collect()
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_columns()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Board::from_columns(columns)
    }
}
