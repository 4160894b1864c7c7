//! Game rules for Gomoku
//!
//! Freestyle five-in-a-row on a 15x15 board: the first side to line up
//! five or more stones wins, and a full board without one is a draw.

pub mod win;

pub use win::{check_terminal, find_five_line_at_pos, has_five_at_pos, TerminalResult};
