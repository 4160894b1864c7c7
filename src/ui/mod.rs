//! GUI module for the Gomoku game
//!
//! A native egui/eframe front-end: the human clicks cells, the computer
//! answers from a worker thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiState, FirstMover, GameConfig, GameState};
