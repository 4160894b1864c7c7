//! Candidate move generation
//!
//! Only empty cells touching an existing stone are searched. This keeps
//! the branching factor small but is a heuristic: it can miss the best move.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// An empty cell with at least one stone among its 8 neighbours.
#[inline]
pub fn is_candidate(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos) && board.has_neighbor(pos)
}

/// All candidate cells in row-major order.
///
/// Empty on an empty board; callers special-case the opening move.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_candidate(board, pos))
        .collect()
}
