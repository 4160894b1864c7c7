//! Error types surfaced to callers of the engine

use crate::board::{Pos, BOARD_SIZE};

/// A stone could not be placed.
///
/// The only recoverable condition in the engine; the caller is expected to
/// re-prompt for another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfRange { row: usize, col: usize },

    #[error("({}, {}) is already occupied", .pos.row, .pos.col)]
    Occupied { pos: Pos },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = InvalidMove::OutOfRange { row: 15, col: 3 };
        assert_eq!(err.to_string(), "(15, 3) is outside the 15x15 board");
    }

    #[test]
    fn test_occupied_display() {
        let err = InvalidMove::Occupied { pos: Pos::new(7, 7) };
        assert_eq!(err.to_string(), "(7, 7) is already occupied");
    }
}
