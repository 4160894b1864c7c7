//! Terminal-state detection
//!
//! A game ends when the stone just placed completes five or more in a row
//! along any of the four axes, or when the board fills up without one.
//! Only lines through the last move are examined: any earlier five would
//! already have ended the game.

use crate::board::{Board, Pos, Side};

/// Axis directions, in the order they are checked.
const AXES: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal, top-left to bottom-right
    (-1, 1), // Diagonal, bottom-left to top-right
];

/// How far the sliding window reaches on each side of the last move
const WINDOW: i32 = 4;

/// Outcome of a terminal check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalResult {
    Continuing,
    /// `line` runs from the first to the last of the five winning cells
    Win { side: Side, line: [Pos; 5] },
    Draw,
}

impl TerminalResult {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, TerminalResult::Continuing)
    }
}

/// Check whether the stone at `last_move` ended the game.
///
/// An empty anchor cell can't have produced a five, so only the draw
/// condition applies to it.
pub fn check_terminal(board: &Board, last_move: Pos) -> TerminalResult {
    if let Some(side) = board.get(last_move).side() {
        if let Some(line) = find_five_line_at_pos(board, last_move, side) {
            return TerminalResult::Win { side, line };
        }
    }

    if board.is_full() {
        TerminalResult::Draw
    } else {
        TerminalResult::Continuing
    }
}

/// Fast five-in-a-row test through `pos` for `side`.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, side: Side) -> bool {
    find_five_line_at_pos(board, pos, side).is_some()
}

/// Slide a nine-cell window centred on `pos` along each axis and report the
/// first five consecutive `side` stones found.
///
/// The counter resets on any cell not owned by `side`, including cells off
/// the board. When it reaches five, the run ends at the current offset and
/// the span is walked back from there.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, side: Side) -> Option<[Pos; 5]> {
    let stone = side.stone();

    for &(dr, dc) in &AXES {
        let mut run = 0;
        for offset in -WINDOW..=WINDOW {
            match pos.offset(dr, dc, offset) {
                Some(p) if board.get(p) == stone => run += 1,
                _ => run = 0,
            }

            if run == 5 {
                let end = (i32::from(pos.row) + dr * offset, i32::from(pos.col) + dc * offset);
                let mut line = [pos; 5];
                for (i, cell) in line.iter_mut().enumerate() {
                    let back = 4 - i as i32;
                    *cell = Pos::new((end.0 - dr * back) as u8, (end.1 - dc * back) as u8);
                }
                return Some(line);
            }
        }
    }

    None
}
