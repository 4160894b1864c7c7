//! Minimax search with alpha-beta pruning
//!
//! The computer maximizes the evaluation, the human minimizes it. The root
//! enumerates the computer's candidate moves itself and searches a fixed
//! number of plies below each one; leaves are scored with the static
//! evaluator.
//!
//! A single board is threaded through the recursion by `&mut` and every
//! tentative stone is removed again before the next sibling is tried, so no
//! board is ever copied. The anchor for terminal checks (the stone placed
//! most recently on the search board) is passed down explicitly.
//!
//! Candidates are visited in row-major order. Updates use strict `>` / `<`
//! so ties keep the earliest cell, and a node stops as soon as its bounds
//! meet (`min <= max`).
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Side};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Side::Human).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Some(Pos::new(7, 7)));
//! assert!(result.best_move.is_some());
//! ```

use log::trace;

use crate::board::{Board, Pos, Side, CENTER, TOTAL_CELLS};
use crate::eval::evaluate;
use crate::rules::check_terminal;

use super::movegen::is_candidate;

/// Plies searched below each root move
pub const DEFAULT_DEPTH: u8 = 2;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Nodes scored by the static evaluator
    pub leaves: u64,
    /// Nodes left early because their bounds met
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only on a full board
    pub best_move: Option<Pos>,
    /// Backed-up value of the best move
    pub score: f64,
    pub depth: u8,
    pub stats: SearchStats,
}

impl SearchResult {
    fn opening() -> Self {
        Self {
            best_move: Some(CENTER),
            score: 0.0,
            depth: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Depth-limited alpha-beta searcher.
///
/// Single-threaded; the board handed to [`Searcher::search`] is mutated
/// during the call and restored before it returns.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Choose the computer's move.
    ///
    /// `last_move` is the most recent stone on the authoritative board;
    /// `None` means nothing has been played yet and the center is taken
    /// without searching.
    pub fn search(&mut self, board: &mut Board, last_move: Option<Pos>) -> SearchResult {
        self.stats = SearchStats::default();

        if (last_move.is_none() || board.is_board_empty()) && board.is_empty(CENTER) {
            return SearchResult::opening();
        }

        let mut best_move = None;
        let mut max_bound = f64::MIN;
        let min_bound = f64::MAX;

        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if !is_candidate(board, pos) {
                continue;
            }

            board.put(pos, Side::Computer);
            let value = self.alpha_beta(board, pos, Side::Human, self.depth, max_bound, min_bound);
            board.remove(pos);

            trace!("candidate ({}, {}) -> {}", pos.row, pos.col, value);

            if value > max_bound {
                max_bound = value;
                best_move = Some(pos);
            }
        }

        // A board with stones and empty cells always has a candidate; this
        // only covers being handed an inconsistent anchor.
        if best_move.is_none() {
            best_move = (0..TOTAL_CELLS)
                .map(Pos::from_index)
                .find(|&pos| board.is_empty(pos));
        }

        SearchResult {
            best_move,
            score: max_bound,
            depth: self.depth,
            stats: self.stats.clone(),
        }
    }

    /// Value of the position after `last_move`, with `to_move` to play.
    ///
    /// `max_bound` is the best the computer is already guaranteed higher up
    /// the tree, `min_bound` the best the human is guaranteed.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        last_move: Pos,
        to_move: Side,
        depth: u8,
        mut max_bound: f64,
        mut min_bound: f64,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 || check_terminal(board, last_move).is_over() {
            self.stats.leaves += 1;
            return evaluate(board);
        }

        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if !is_candidate(board, pos) {
                continue;
            }

            board.put(pos, to_move);
            let value =
                self.alpha_beta(board, pos, to_move.opponent(), depth - 1, max_bound, min_bound);
            board.remove(pos);

            match to_move {
                Side::Human => {
                    if value < min_bound {
                        min_bound = value;
                    }
                }
                Side::Computer => {
                    if value > max_bound {
                        max_bound = value;
                    }
                }
            }

            if min_bound <= max_bound {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match to_move {
            Side::Human => min_bound,
            Side::Computer => max_bound,
        }
    }

    /// Statistics of the last search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain minimax without pruning.
///
/// Visits every candidate at every node. Used as the reference that
/// alpha-beta must agree with.
pub fn minimax_value(board: &mut Board, last_move: Pos, to_move: Side, depth: u8) -> f64 {
    if depth == 0 || check_terminal(board, last_move).is_over() {
        return evaluate(board);
    }

    let mut best = match to_move {
        Side::Human => f64::MAX,
        Side::Computer => f64::MIN,
    };

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !is_candidate(board, pos) {
            continue;
        }

        board.put(pos, to_move);
        let value = minimax_value(board, pos, to_move.opponent(), depth - 1);
        board.remove(pos);

        best = match to_move {
            Side::Human if value < best => value,
            Side::Computer if value > best => value,
            _ => best,
        };
    }

    best
}

/// Root move choice by plain minimax, same enumeration order and tie-break
/// as [`Searcher::search`].
pub fn minimax_root(board: &mut Board, depth: u8) -> (Option<Pos>, f64) {
    let mut best_move = None;
    let mut best = f64::MIN;

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !is_candidate(board, pos) {
            continue;
        }

        board.put(pos, Side::Computer);
        let value = minimax_value(board, pos, Side::Human, depth);
        board.remove(pos);

        if value > best {
            best = value;
            best_move = Some(pos);
        }
    }

    (best_move, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn place_all(board: &mut Board, cells: &[(u8, u8)], side: Side) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), side).unwrap();
        }
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();

        let result = searcher.search(&mut board, None);
        assert_eq!(result.best_move, Some(CENTER));
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_search_restores_board() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 8)], Side::Human);
        place_all(&mut board, &[(7, 8)], Side::Computer);
        let before = board.clone();

        let result = searcher.search(&mut board, Some(Pos::new(8, 8)));
        assert!(result.best_move.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_move_is_adjacent_and_empty() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Side::Human);

        let mov = searcher.search(&mut board, Some(CENTER)).best_move.unwrap();
        assert!(board.is_empty(mov));
        assert!(board.has_neighbor(mov));
    }

    #[test]
    fn test_search_takes_winning_cell() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Side::Computer);
        place_all(&mut board, &[(7, 2), (8, 4), (6, 5)], Side::Human);

        let result = searcher.search(&mut board, Some(Pos::new(6, 5)));
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_search_blocks_open_end() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Side::Human);
        place_all(&mut board, &[(7, 2), (6, 4), (8, 5)], Side::Computer);

        let result = searcher.search(&mut board, Some(Pos::new(7, 6)));
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_search_full_board() {
        let mut board = Board::new();
        for r in 0..15u8 {
            for c in 0..15u8 {
                let side = if (c as usize + 2 * r as usize) % 4 < 2 {
                    Side::Human
                } else {
                    Side::Computer
                };
                board.place(Pos::new(r, c), side).unwrap();
            }
        }
        let result = Searcher::new().search(&mut board, Some(Pos::new(0, 0)));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_counts_nodes() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Side::Human);

        let result = searcher.search(&mut board, Some(CENTER));
        assert!(result.stats.nodes > 0);
        assert!(result.stats.leaves > 0);
        assert!(result.stats.leaves <= result.stats.nodes);
        assert_eq!(searcher.stats(), &result.stats);
    }

    #[test]
    fn test_pruning_matches_minimax_fixed() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (7, 8)], Side::Human);
        place_all(&mut board, &[(8, 7)], Side::Computer);

        let (expected_move, expected_value) = minimax_root(&mut board.clone(), 2);
        let result = Searcher::new().search(&mut board, Some(Pos::new(7, 8)));

        assert_eq!(result.best_move, expected_move);
        assert_eq!(result.score, expected_value);
    }

    #[test]
    fn test_pruning_matches_minimax_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..4 {
            let mut board = Board::new();
            let mut last = CENTER;
            for i in 0..4 {
                let side = if i % 2 == 0 { Side::Human } else { Side::Computer };
                loop {
                    let pos = Pos::new(rng.random_range(5..10), rng.random_range(5..10));
                    if board.place(pos, side).is_ok() {
                        last = pos;
                        break;
                    }
                }
            }

            let (expected_move, expected_value) = minimax_root(&mut board.clone(), 2);
            let result = Searcher::new().search(&mut board, Some(last));

            assert_eq!(result.best_move, expected_move);
            assert_eq!(result.score, expected_value);
        }
    }

    #[test]
    fn test_minimax_leaf_is_evaluation() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3)], Side::Computer);
        assert_eq!(
            minimax_value(&mut board, Pos::new(3, 3), Side::Human, 0),
            evaluate(&board)
        );
    }

    #[test]
    fn test_with_depth() {
        assert_eq!(Searcher::new().depth(), DEFAULT_DEPTH);
        assert_eq!(Searcher::with_depth(1).depth(), 1);
    }
}
