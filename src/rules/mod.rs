//! The Board Engine: construction, legality, transitions, and terminal
//! detection for Peg Solitaire.
//!
//! The engine is stateless. Callers own the current board and replace it
//! with whatever `update_board` returns.

pub mod engine;

pub use engine::{
    all_valid_moves, default_starting_board, final_score, has_won, is_ended, line_has_jump,
    new_game, outcome, possible_valid_moves, starting_board, update_board, valid_move, Outcome,
};
