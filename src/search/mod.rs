//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation restricted to cells next to existing stones
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{minimax_root, minimax_value, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH};
pub use movegen::{candidate_moves, is_candidate};
