//! Slot values.

use serde::{Deserialize, Serialize};

/// Contents of a single slot.
///
/// The numeric values matter: a board's score is the sum of its cell
/// values. Value `2` is reserved for a second peg colour but no board
/// generation produces it, so it is rejected as an invalid token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Cell {
    /// An empty slot.
    #[default]
    Empty = 0,
    /// A slot holding a peg.
    Peg = 1,
}

impl Cell {
    /// Raw token value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a raw token value. Returns `None` for anything but 0 or 1.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Peg),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_peg(self) -> bool {
        matches!(self, Cell::Peg)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Cell::from_value(value).ok_or_else(|| format!("invalid cell token {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Cell::Peg.value(), 1);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Cell::from_value(0), Some(Cell::Empty));
        assert_eq!(Cell::from_value(1), Some(Cell::Peg));
        // Reserved second colour
        assert_eq!(Cell::from_value(2), None);
        assert_eq!(Cell::from_value(255), None);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&Cell::Peg).unwrap(), "1");
        let cell: Cell = serde_json::from_str("0").unwrap();
        assert_eq!(cell, Cell::Empty);
        assert!(serde_json::from_str::<Cell>("2").is_err());
    }
}
