//! Slot coordinates and candidate jumps.
//!
//! A board is stored as a sequence of columns, so a `Position` names the
//! column first (the outer index) and the slot within that column second.
//!
//! ```
//! use peg_solitaire::core::{Move, Position};
//!
//! let mv = Move::new(2, 0, 2, 2);
//! assert!(mv.is_axis_jump());
//! assert_eq!(mv.jumped(), Some(Position::new(2, 1)));
//!
//! // Diagonals never jump
//! assert_eq!(Move::new(2, 2, 4, 4).jumped(), None);
//! ```

use serde::{Deserialize, Serialize};

/// A slot on the board: `board[col][row]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Outer (storage) index.
    pub col: usize,
    /// Inner index, within the column.
    pub row: usize,
}

impl Position {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Offset by a signed delta. `None` if either index would go negative.
    #[must_use]
    pub fn offset(self, d_col: isize, d_row: isize) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(d_col)?,
            row: self.row.checked_add_signed(d_row)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

/// A candidate jump from one slot to another.
///
/// Nothing about a `Move` is checked on construction; legality against a
/// board is decided by [`crate::rules::valid_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Build a move from the quadruple `(from_col, from_row, to_col, to_row)`.
    #[must_use]
    pub const fn new(from_col: usize, from_row: usize, to_col: usize, to_row: usize) -> Self {
        Self {
            from: Position::new(from_col, from_row),
            to: Position::new(to_col, to_row),
        }
    }

    #[must_use]
    pub const fn from_indices(indices: [usize; 4]) -> Self {
        Self::new(indices[0], indices[1], indices[2], indices[3])
    }

    #[must_use]
    pub const fn between(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn indices(self) -> [usize; 4] {
        [self.from.col, self.from.row, self.to.col, self.to.row]
    }

    /// True when exactly one axis differs, by exactly two.
    #[must_use]
    pub fn is_axis_jump(self) -> bool {
        let d_col = self.from.col.abs_diff(self.to.col);
        let d_row = self.from.row.abs_diff(self.to.row);
        (d_col == 0 && d_row == 2) || (d_col == 2 && d_row == 0)
    }

    /// The slot jumped over, for axis-aligned distance-two moves.
    #[must_use]
    pub fn jumped(self) -> Option<Position> {
        if !self.is_axis_jump() {
            return None;
        }
        Some(Position::new(
            (self.from.col + self.to.col) / 2,
            (self.from.row + self.to.row) / 2,
        ))
    }

    /// The same jump travelled backwards.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Position::new(1, 3);
        assert_eq!(p.offset(2, 0), Some(Position::new(3, 3)));
        assert_eq!(p.offset(-2, 0), None);
        assert_eq!(p.offset(0, -2), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_axis_jump_shapes() {
        assert!(Move::new(0, 0, 0, 2).is_axis_jump());
        assert!(Move::new(4, 1, 2, 1).is_axis_jump());

        // Diagonal
        assert!(!Move::new(2, 2, 4, 4).is_axis_jump());
        // Distance four
        assert!(!Move::new(0, 1, 4, 1).is_axis_jump());
        // Distance zero
        assert!(!Move::new(3, 3, 3, 3).is_axis_jump());
        // Distance one
        assert!(!Move::new(3, 3, 3, 4).is_axis_jump());
    }

    #[test]
    fn test_jumped_midpoint() {
        assert_eq!(Move::new(4, 1, 2, 1).jumped(), Some(Position::new(3, 1)));
        assert_eq!(Move::new(0, 5, 0, 3).jumped(), Some(Position::new(0, 4)));
        assert_eq!(Move::new(0, 1, 4, 1).jumped(), None);
    }

    #[test]
    fn test_indices_roundtrip() {
        let mv = Move::from_indices([1, 2, 3, 2]);
        assert_eq!(mv.indices(), [1, 2, 3, 2]);
        assert_eq!(mv.reversed(), Move::new(3, 2, 1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(1, 2, 3, 2).to_string(), "[1,2] -> [3,2]");
    }
}
