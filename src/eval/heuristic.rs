//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a whole position from the computer's point of view: every stone
//! contributes its directional potential plus a small bonus for sitting
//! near the center. Human stones contribute negatively and five times as
//! strongly, so the search prefers blocking to building.
//!
//! The evaluation is a full-board pass, recomputed at every leaf.

use crate::board::{Board, Pos, Side, CENTER};

use super::line::stone_potential;
use super::patterns::PatternScore;

/// Evaluate the board. Positive favours the computer.
#[must_use]
pub fn evaluate(board: &Board) -> f64 {
    let mut score = 0.0;
    for pos in board.occupied() {
        score += stone_score(board, pos);
    }
    score
}

/// Signed contribution of the stone at `pos`
#[must_use]
pub fn stone_score(board: &Board, pos: Pos) -> f64 {
    let mut value = stone_potential(board, pos);
    value += center_bonus(pos);

    match board.get(pos).side() {
        Some(Side::Human) => -value * PatternScore::DEFENSE_MULTIPLIER,
        Some(Side::Computer) => value,
        None => 0.0,
    }
}

/// Small preference for stones near the middle of the board
#[inline]
pub fn center_bonus(pos: Pos) -> f64 {
    let dist = (i32::from(pos.row) - i32::from(CENTER.row)).abs()
        + (i32::from(pos.col) - i32::from(CENTER.col)).abs();
    PatternScore::CENTER_WEIGHT * f64::from(PatternScore::CENTER_REACH - dist)
}
