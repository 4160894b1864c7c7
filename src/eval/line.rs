//! Directional line scanning
//!
//! For a stone and one of the eight compass directions, measures how much
//! room the line has to grow (cells up to four steps away that the opponent
//! hasn't blocked) and how many friendly stones follow the stone without a
//! gap.

use crate::board::{Board, Pos, Stone};

use super::patterns::{run_value, PatternScore};

/// The eight scan directions, in evaluation order:
/// up, down, left, right, up-left, up-right, down-left, down-right.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Raw measurements of one direction from one stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Steps taken (at most 4) before hitting an opponent stone or the edge
    pub extendable: u8,
    /// Consecutive stones of the same owner, the starting stone included
    pub run: u8,
}

/// Scan from the stone at `pos` towards (dr, dc).
///
/// Returns `None` for an empty cell.
pub fn scan_direction(board: &Board, pos: Pos, dr: i32, dc: i32) -> Option<LineScan> {
    let own = board.get(pos);
    let opponent = own.side()?.opponent().stone();

    let mut extendable = 0u8;
    while extendable < PatternScore::ROOM_FOR_FIVE {
        match pos.offset(dr, dc, i32::from(extendable) + 1) {
            Some(p) if board.get(p) != opponent => extendable += 1,
            _ => break,
        }
    }

    let mut run = 1u8;
    while let Some(p) = pos.offset(dr, dc, i32::from(run)) {
        if board.get(p) != own {
            break;
        }
        run += 1;
    }

    Some(LineScan { extendable, run })
}

/// Potential of the line leaving `pos` towards (dr, dc).
///
/// Zero when fewer than four cells of room remain (five can never be made
/// that way), otherwise exponential in the unbroken run length.
pub fn direction_value(board: &Board, pos: Pos, dr: i32, dc: i32) -> f64 {
    match scan_direction(board, pos, dr, dc) {
        Some(scan) if scan.extendable >= PatternScore::ROOM_FOR_FIVE => run_value(scan.run),
        _ => 0.0,
    }
}

/// Sum of `direction_value` over all eight directions
pub fn stone_potential(board: &Board, pos: Pos) -> f64 {
    debug_assert!(board.get(pos) != Stone::Empty);
    let mut value = 0.0;
    for &(dr, dc) in &DIRECTIONS {
        value += direction_value(board, pos, dr, dc);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn test_lone_stone_in_open() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Side::Human).unwrap();

        let scan = scan_direction(&board, Pos::new(7, 7), 0, 1).unwrap();
        assert_eq!(scan, LineScan { extendable: 4, run: 1 });
        assert_eq!(direction_value(&board, Pos::new(7, 7), 0, 1), 10.0);
        assert_eq!(stone_potential(&board, Pos::new(7, 7)), 80.0);
    }

    #[test]
    fn test_empty_cell_has_no_scan() {
        let board = Board::new();
        assert_eq!(scan_direction(&board, Pos::new(3, 3), 1, 0), None);
        assert_eq!(direction_value(&board, Pos::new(3, 3), 1, 0), 0.0);
    }

    #[test]
    fn test_edge_cuts_room() {
        let mut board = Board::new();
        board.place(Pos::new(2, 7), Side::Computer).unwrap();

        // Only two cells above row 2
        let up = scan_direction(&board, Pos::new(2, 7), -1, 0).unwrap();
        assert_eq!(up.extendable, 2);
        assert_eq!(direction_value(&board, Pos::new(2, 7), -1, 0), 0.0);

        // Exactly four cells of room on the left of column 4
        board.place(Pos::new(9, 4), Side::Computer).unwrap();
        assert_eq!(direction_value(&board, Pos::new(9, 4), 0, -1), 10.0);
    }

    #[test]
    fn test_opponent_blocks_room() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Side::Human).unwrap();
        board.place(Pos::new(7, 10), Side::Computer).unwrap();

        let scan = scan_direction(&board, Pos::new(7, 7), 0, 1).unwrap();
        assert_eq!(scan.extendable, 2);
        assert_eq!(direction_value(&board, Pos::new(7, 7), 0, 1), 0.0);

        // The other way is still open
        assert_eq!(direction_value(&board, Pos::new(7, 7), 0, -1), 10.0);
    }

    #[test]
    fn test_run_counts_consecutive_friends() {
        let mut board = Board::new();
        for c in 3..6 {
            board.place(Pos::new(7, c), Side::Human).unwrap();
        }

        assert_eq!(scan_direction(&board, Pos::new(7, 3), 0, 1).unwrap().run, 3);
        assert_eq!(direction_value(&board, Pos::new(7, 3), 0, 1), 1000.0);
        assert_eq!(direction_value(&board, Pos::new(7, 4), 0, 1), 100.0);
        assert_eq!(direction_value(&board, Pos::new(7, 5), 0, 1), 10.0);
    }

    #[test]
    fn test_gap_ends_run_but_not_room() {
        let mut board = Board::new();
        board.place(Pos::new(7, 3), Side::Computer).unwrap();
        board.place(Pos::new(7, 5), Side::Computer).unwrap();

        let scan = scan_direction(&board, Pos::new(7, 3), 0, 1).unwrap();
        assert_eq!(scan, LineScan { extendable: 4, run: 1 });
    }

    #[test]
    fn test_run_longer_than_room() {
        let mut board = Board::new();
        for c in 0..6 {
            board.place(Pos::new(0, c), Side::Human).unwrap();
        }
        let scan = scan_direction(&board, Pos::new(0, 0), 0, 1).unwrap();
        assert_eq!(scan, LineScan { extendable: 4, run: 6 });
        assert_eq!(direction_value(&board, Pos::new(0, 0), 0, 1), 1_000_000.0);
    }
}
