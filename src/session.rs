//! Presentation-side game state.
//!
//! A front end owns a `Session`: the current board plus the slot picked by
//! the first half of a two-click gesture. The engine never sees either; the
//! session feeds it boards and replaces its own on every accepted move.
//!
//! ```
//! use peg_solitaire::core::{Board, Position};
//! use peg_solitaire::session::{ClickOutcome, Session};
//!
//! let board = Board::from_columns(vec![
//!     vec![1, 1, 0],
//!     vec![0, 0, 0],
//!     vec![0, 0, 0],
//! ]).unwrap();
//! let mut session = Session::new(board);
//!
//! assert!(matches!(session.click(Position::new(0, 0)), ClickOutcome::Selected { .. }));
//! assert!(matches!(session.click(Position::new(0, 2)), ClickOutcome::Moved { .. }));
//! assert_eq!(session.board().peg_count(), 1);
//! ```

use log::debug;
use smallvec::SmallVec;

use crate::core::{Board, Move, Position};
use crate::rules::{self, Outcome};

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A source was picked; these are its legal destinations.
    Selected {
        from: Position,
        destinations: SmallVec<[Position; 4]>,
    },
    /// The clicked slot has no legal jump. Nothing stays selected.
    NoMoves { from: Position },
    /// The jump was applied. `outcome` is set once the game has ended.
    Moved { mv: Move, outcome: Option<Outcome> },
    /// The jump was refused; the board is unchanged.
    Rejected { mv: Move },
}

/// The current board and the pending selection.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    selected: Option<Position>,
}

impl Session {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selected: None,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Source picked by a pending first click.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(&self.board)
    }

    /// Handle one click.
    ///
    /// The first click picks a source, the second names a destination and
    /// consumes the selection whether or not the jump is accepted.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        match self.selected.take() {
            None => {
                let destinations = rules::possible_valid_moves(&self.board, pos);
                if destinations.is_empty() {
                    return ClickOutcome::NoMoves { from: pos };
                }
                self.selected = Some(pos);
                ClickOutcome::Selected {
                    from: pos,
                    destinations,
                }
            }
            Some(from) => self.play(Move::between(from, pos)),
        }
    }

    /// Attempt a full move, bypassing the selection buffer.
    pub fn play(&mut self, mv: Move) -> ClickOutcome {
        self.selected = None;
        match rules::update_board(&self.board, mv) {
            Some(next) => {
                self.board = next;
                let outcome = self.outcome();
                if let Some(outcome) = outcome {
                    debug!("game over after {mv}: {outcome:?}");
                }
                ClickOutcome::Moved { mv, outcome }
            }
            None => ClickOutcome::Rejected { mv },
        }
    }

    /// Start over on `board`, dropping any selection.
    pub fn restart(&mut self, board: Board) {
        self.board = board;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn small() -> Board {
        Board::from_columns(vec![vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_select_then_move() {
        let mut session = Session::new(small());

        let first = session.click(Position::new(0, 0));
        assert_eq!(
            first,
            ClickOutcome::Selected {
                from: Position::new(0, 0),
                destinations: SmallVec::from_slice(&[Position::new(2, 0), Position::new(0, 2)]),
            }
        );
        assert_eq!(session.selected(), Some(Position::new(0, 0)));

        let second = session.click(Position::new(0, 2));
        assert_eq!(
            second,
            ClickOutcome::Moved {
                mv: Move::new(0, 0, 0, 2),
                outcome: Some(Outcome::Stuck { score: 2 }),
            }
        );
        assert_eq!(session.selected(), None);
        assert_eq!(session.board().get(Position::new(0, 2)), Some(Cell::Peg));
    }

    #[test]
    fn test_no_moves_clears_selection() {
        let mut session = Session::new(small());
        let outcome = session.click(Position::new(2, 2));
        assert_eq!(outcome, ClickOutcome::NoMoves { from: Position::new(2, 2) });
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_rejected_keeps_board() {
        let mut session = Session::new(small());
        session.click(Position::new(0, 0));
        let outcome = session.click(Position::new(2, 2));

        assert_eq!(outcome, ClickOutcome::Rejected { mv: Move::new(0, 0, 2, 2) });
        assert_eq!(session.board(), &small());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_play_to_the_end() {
        let mut session = Session::new(small());

        // (0,0) over (0,1) into (0,2), leaving (1,0) and (0,2).
        assert!(matches!(session.play(Move::new(0, 0, 0, 2)), ClickOutcome::Moved { .. }));
        assert_eq!(session.outcome(), Some(Outcome::Stuck { score: 2 }));

        // Nothing more is accepted.
        assert_eq!(
            session.play(Move::new(1, 0, 1, 2)),
            ClickOutcome::Rejected { mv: Move::new(1, 0, 1, 2) }
        );
    }

    #[test]
    fn test_winning_move_reports_outcome() {
        let board = Board::from_columns(vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
        let mut session = Session::new(board);
        assert_eq!(
            session.play(Move::new(1, 0, 1, 2)),
            ClickOutcome::Moved {
                mv: Move::new(1, 0, 1, 2),
                outcome: Some(Outcome::Won),
            }
        );
    }

    #[test]
    fn test_restart_drops_selection() {
        let mut session = Session::new(small());
        session.click(Position::new(0, 0));
        session.restart(Board::filled(3, Cell::Peg));
        assert_eq!(session.selected(), None);
        assert_eq!(session.board().peg_count(), 9);
    }
}
