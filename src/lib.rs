//! Gomoku AI Engine
//!
//! A computer opponent for freestyle Gomoku:
//! - 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - Full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Terminal-state detection (five in a row, draw)
//! - [`eval`]: Directional line scanning and position evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: The game-facing interface integrating all components
//! - [`ui`]: egui front-end driving the engine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, Side, TerminalResult};
//!
//! let mut game = Game::new();
//!
//! // The computer opens in the center
//! let opening = game.choose_ai_move().unwrap();
//! assert_eq!((opening.row, opening.col), (7, 7));
//! game.place_stone(7, 7, Side::Computer).unwrap();
//!
//! game.place_stone(7, 8, Side::Human).unwrap();
//! assert_eq!(game.is_terminal(7, 8), TerminalResult::Continuing);
//! ```
//!
//! # Search
//!
//! The computer maximizes and the human minimizes a hand-tuned evaluation.
//! Every empty cell next to an existing stone is a candidate; each is
//! searched two further plies deep with alpha-beta pruning.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE, CENTER};
pub use engine::{AIEngine, EngineConfig, Game, MoveResult};
pub use error::InvalidMove;
pub use rules::TerminalResult;
