//! The Peg Solitaire rules.
//!
//! Every function here is pure over an immutable [`Board`]; only the
//! starting-board constructor consumes randomness, and it takes the RNG
//! explicitly. Illegal input is answered, never raised: `valid_move`
//! returns `false` and `update_board` returns `None`.
//!
//! ```
//! use peg_solitaire::core::{Board, Move, Position};
//! use peg_solitaire::rules::{self, Outcome};
//!
//! let board = Board::from_columns(vec![
//!     vec![1, 1, 0],
//!     vec![0, 0, 0],
//!     vec![0, 0, 0],
//! ]).unwrap();
//!
//! assert_eq!(rules::possible_valid_moves(&board, Position::new(0, 0)).as_slice(),
//!            &[Position::new(0, 2)]);
//!
//! let next = rules::update_board(&board, Move::new(0, 0, 0, 2)).unwrap();
//! assert_eq!(rules::outcome(&next), Some(Outcome::Won));
//! ```

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::{Board, BoardConfig, Cell, GameRng, Move, Position, DEFAULT_SIZE};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one peg remains.
    Won,
    /// No jump remains but more than one peg (or none) is left.
    Stuck { score: usize },
}

impl Outcome {
    /// Pegs left on the board.
    #[must_use]
    pub fn score(self) -> usize {
        match self {
            Outcome::Won => 1,
            Outcome::Stuck { score } => score,
        }
    }
}

// === Construction ===

/// A `size`×`size` board of pegs with a single empty slot.
///
/// The empty slot's row and column are drawn independently, each uniform
/// over `0..size`.
///
/// Panics if `size` is zero.
#[must_use]
pub fn starting_board(size: usize, rng: &mut GameRng) -> Board {
    assert!(size > 0, "Board must have at least one slot");

    let row = rng.gen_range_usize(0..size);
    let col = rng.gen_range_usize(0..size);
    debug!("starting {size}x{size} board with empty slot at ({col}, {row})");

    Board::filled(size, Cell::Peg).with_cell(Position::new(col, row), Cell::Empty)
}

/// A standard 6×6 starting board seeded from the operating system.
#[must_use]
pub fn default_starting_board() -> Board {
    starting_board(DEFAULT_SIZE, &mut GameRng::from_entropy())
}

/// A starting board sized and seeded by `config`.
#[must_use]
pub fn new_game(config: &BoardConfig) -> Board {
    starting_board(config.size, &mut config.rng())
}

// === Terminal detection ===

/// Whether a single line contains a peg, peg, empty run in either order.
///
/// This is a structural scan of every three-slot window; it never builds a
/// `Move` or consults `valid_move`.
#[must_use]
pub fn line_has_jump(line: &[Cell]) -> bool {
    use Cell::{Empty, Peg};

    line.windows(3)
        .any(|w| matches!(w, [Peg, Peg, Empty] | [Empty, Peg, Peg]))
}

fn no_jumps_along_columns(board: &Board) -> bool {
    board.columns().all(|column| {
        let line: Vec<Cell> = column.iter().copied().collect();
        !line_has_jump(&line)
    })
}

/// Whether no jump is possible anywhere on the board.
///
/// Columns are scanned with [`line_has_jump`], then the same scan runs over
/// the transposed board. No move search is involved: the game ends exactly
/// when neither pass finds a window.
#[must_use]
pub fn is_ended(board: &Board) -> bool {
    no_jumps_along_columns(board) && no_jumps_along_columns(&board.transpose())
}

/// Number of pegs left: the sum of every slot's value.
#[must_use]
pub fn final_score(board: &Board) -> usize {
    board.cells().map(|(_, cell)| usize::from(cell.value())).sum()
}

/// Whether exactly one peg remains.
#[must_use]
pub fn has_won(board: &Board) -> bool {
    final_score(board) == 1
}

/// `None` while the game continues, otherwise how it ended.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !is_ended(board) {
        return None;
    }
    Some(if has_won(board) {
        Outcome::Won
    } else {
        Outcome::Stuck {
            score: final_score(board),
        }
    })
}

// === Moves ===

/// Whether `mv` is a legal jump on `board`.
///
/// Legal means: both ends on the board, a peg at the source, an empty slot
/// at the destination, exactly one axis changing by exactly two, and a peg
/// on the slot in between. Whether the game has already ended is not
/// considered here.
#[must_use]
pub fn valid_move(board: &Board, mv: Move) -> bool {
    if board.get(mv.to) != Some(Cell::Empty) {
        return false;
    }
    if board.get(mv.from) != Some(Cell::Peg) {
        return false;
    }
    match mv.jumped() {
        Some(mid) => board.get(mid) == Some(Cell::Peg),
        None => false,
    }
}

/// Legal destinations for the peg at `from`.
///
/// Candidates are tried in a fixed order: column +2, column −2, row +2,
/// row −2. An empty result means the peg cannot jump.
#[must_use]
pub fn possible_valid_moves(board: &Board, from: Position) -> SmallVec<[Position; 4]> {
    const OFFSETS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

    OFFSETS
        .iter()
        .filter_map(|&(d_col, d_row)| from.offset(d_col, d_row))
        .filter(|&to| valid_move(board, Move::between(from, to)))
        .collect()
}

/// Every legal move, sources in column-major order.
#[must_use]
pub fn all_valid_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_peg())
        .flat_map(|(from, _)| {
            possible_valid_moves(board, from)
                .into_iter()
                .map(move |to| Move::between(from, to))
        })
        .collect()
}

/// Apply `mv`, returning the resulting board.
///
/// Returns `None` without touching anything when the game has already
/// ended or `mv` is not legal. On success the source and the jumped slot
/// become empty and the destination gets the peg; every other slot is
/// carried over unchanged.
#[must_use]
pub fn update_board(board: &Board, mv: Move) -> Option<Board> {
    if is_ended(board) {
        debug!("rejected {mv}: game has ended");
        return None;
    }
    if !valid_move(board, mv) {
        debug!("rejected {mv}: not a legal jump");
        return None;
    }
    let jumped = mv.jumped()?;

    trace!("applying {mv}, removing peg at {jumped}");
    Some(
        board
            .with_cell(mv.from, Cell::Empty)
            .with_cell(jumped, Cell::Empty)
            .with_cell(mv.to, Cell::Peg),
    )
}
