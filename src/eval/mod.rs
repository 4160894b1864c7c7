//! Evaluation module for Gomoku AI
//!
//! Contains:
//! - Line scanning from a single stone
//! - Scoring weights
//! - Whole-board heuristic evaluation

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{center_bonus, evaluate, stone_score};
pub use line::{direction_value, scan_direction, stone_potential, LineScan, DIRECTIONS};
pub use patterns::{run_value, PatternScore};
