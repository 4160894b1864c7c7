//! Engine facade: the interface the rest of the program talks to
//!
//! [`Game`] owns the authoritative board and the last-move anchor and
//! exposes the three operations a front-end needs: place a stone, ask
//! whether the game is over, and ask the computer for its move.
//! [`AIEngine`] runs the search and reports timing and node counts.
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, Side, TerminalResult};
//!
//! let mut game = Game::new();
//! game.place_stone(7, 7, Side::Human).unwrap();
//!
//! let reply = game.choose_ai_move().unwrap();
//! game.place_stone(reply.row as usize, reply.col as usize, Side::Computer).unwrap();
//! assert_eq!(game.status(), TerminalResult::Continuing);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Side};
use crate::error::InvalidMove;
use crate::rules::{check_terminal, TerminalResult};
use crate::search::{Searcher, DEFAULT_DEPTH};

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below each of the computer's candidate moves
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Backed-up evaluation of the best move
    pub score: f64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Computer opponent.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine searching the default two plies below each move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_depth(config.depth),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Get the best move for the computer.
    ///
    /// The board is searched in place and is back in its original state
    /// when this returns.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, last_move: Option<Pos>) -> Option<Pos> {
        self.get_move_with_stats(board, last_move).best_move
    }

    /// Get the best move along with timing and node counts.
    pub fn get_move_with_stats(&mut self, board: &mut Board, last_move: Option<Pos>) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, last_move);
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(pos) = result.best_move {
            debug!(
                "AI move ({}, {}) score {} after {} nodes ({} cutoffs) in {}ms",
                pos.row, pos.col, result.score, result.stats.nodes, result.stats.cutoffs, time_ms
            );
        } else {
            debug!("AI found no empty cell");
        }

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One game: the authoritative board plus the last placed stone.
pub struct Game {
    board: Board,
    last_move: Option<Pos>,
    engine: AIEngine,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(AIEngine::new())
    }

    #[must_use]
    pub fn with_engine(engine: AIEngine) -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            engine,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The most recent stone on this board, `None` before the first move
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Place a stone and make it the new anchor for terminal checks.
    pub fn place_stone(&mut self, row: usize, col: usize, side: Side) -> Result<(), InvalidMove> {
        let pos = Pos::try_new(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        self.board.place(pos, side)?;
        self.last_move = Some(pos);
        Ok(())
    }

    /// Terminal check anchored on an explicit cell.
    ///
    /// Out-of-range coordinates can't have produced a five; only the draw
    /// condition applies to them.
    #[must_use]
    pub fn is_terminal(&self, last_row: usize, last_col: usize) -> TerminalResult {
        match Pos::try_new(last_row, last_col) {
            Some(pos) => check_terminal(&self.board, pos),
            None if self.board.is_full() => TerminalResult::Draw,
            None => TerminalResult::Continuing,
        }
    }

    /// Terminal check anchored on the stored last move.
    #[must_use]
    pub fn status(&self) -> TerminalResult {
        match self.last_move {
            Some(pos) => check_terminal(&self.board, pos),
            None => TerminalResult::Continuing,
        }
    }

    /// The computer's reply to the current position. `None` only when the
    /// board is full.
    pub fn choose_ai_move(&mut self) -> Option<Pos> {
        self.choose_ai_move_with_stats().best_move
    }

    pub fn choose_ai_move_with_stats(&mut self) -> MoveResult {
        self.engine.get_move_with_stats(&mut self.board, self.last_move)
    }

    /// Clear the board for a new game.
    pub fn reset(&mut self) {
        info!("new game");
        self.board = Board::new();
        self.last_move = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;

    #[test]
    fn test_engine_default_depth() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().depth, 2);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig { depth: 1 });
        assert_eq!(engine.config(), EngineConfig { depth: 1 });
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let result = engine.get_move_with_stats(&mut board, None);
        assert_eq!(result.best_move, Some(CENTER));
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_place_stone_updates_anchor() {
        let mut game = Game::new();
        assert_eq!(game.last_move(), None);
        game.place_stone(3, 4, Side::Human).unwrap();
        assert_eq!(game.last_move(), Some(Pos::new(3, 4)));
        game.place_stone(3, 5, Side::Computer).unwrap();
        assert_eq!(game.last_move(), Some(Pos::new(3, 5)));
    }

    #[test]
    fn test_place_stone_rejects_occupied() {
        let mut game = Game::new();
        game.place_stone(3, 4, Side::Human).unwrap();
        game.place_stone(9, 9, Side::Computer).unwrap();

        let err = game.place_stone(3, 4, Side::Computer).unwrap_err();
        assert_eq!(err, InvalidMove::Occupied { pos: Pos::new(3, 4) });
        // Anchor unchanged by a rejected move
        assert_eq!(game.last_move(), Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_place_stone_rejects_out_of_range() {
        let mut game = Game::new();
        assert_eq!(
            game.place_stone(15, 0, Side::Human),
            Err(InvalidMove::OutOfRange { row: 15, col: 0 })
        );
        assert_eq!(
            game.place_stone(0, 200, Side::Human),
            Err(InvalidMove::OutOfRange { row: 0, col: 200 })
        );
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_status_before_first_move() {
        let game = Game::new();
        assert_eq!(game.status(), TerminalResult::Continuing);
        assert_eq!(game.is_terminal(7, 7), TerminalResult::Continuing);
        assert_eq!(game.is_terminal(20, 20), TerminalResult::Continuing);
    }

    #[test]
    fn test_first_ai_move_is_center() {
        let mut game = Game::new();
        assert_eq!(game.choose_ai_move(), Some(CENTER));
    }

    #[test]
    fn test_ai_reply_is_legal() {
        let mut game = Game::new();
        game.place_stone(0, 0, Side::Human).unwrap();
        let reply = game.choose_ai_move().unwrap();
        assert!(game.board().is_empty(reply));
        assert!(game
            .place_stone(reply.row as usize, reply.col as usize, Side::Computer)
            .is_ok());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.place_stone(7, 7, Side::Human).unwrap();
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.choose_ai_move(), Some(CENTER));
    }
}
