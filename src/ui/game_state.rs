//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::{AIEngine, Board, Game, InvalidMove, MoveResult, Pos, Side, TerminalResult};

/// Who places the first stone of a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstMover {
    /// Coin flip at the start of every game
    #[default]
    Random,
    Human,
    Computer,
}

impl FirstMover {
    pub fn resolve(self) -> Side {
        match self {
            FirstMover::Random => {
                if rand::random::<bool>() {
                    Side::Human
                } else {
                    Side::Computer
                }
            }
            FirstMover::Human => Side::Human,
            FirstMover::Computer => Side::Computer,
        }
    }
}

/// Front-end settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub first_mover: FirstMover,
    /// Minimum time the computer appears to think before its stone lands
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::Random,
            ai_delay_ms: 1000,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub current_turn: Side,
    /// Set once the game has been won or drawn
    pub outcome: Option<TerminalResult>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let current_turn = config.first_mover.resolve();
        info!("game start, {:?} moves first", current_turn);

        Self {
            game: Game::new(),
            config,
            current_turn,
            outcome: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start over with the same settings. A pending AI result is dropped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.current_turn = self.config.first_mover.resolve();
        self.outcome = None;
        self.move_count = 0;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        info!("game start, {:?} moves first", self.current_turn);
    }

    /// Start over with a different first mover
    pub fn restart_with(&mut self, first_mover: FirstMover) {
        self.config.first_mover = first_mover;
        self.reset();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.game.last_move()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == Side::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.current_turn == Side::Computer
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// The five stones to highlight after a win
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.outcome {
            Some(TerminalResult::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos, Side::Human).map_err(|e| e.to_string())
    }

    /// Place a stone for either side, then check for the end of the game
    fn execute_move(&mut self, pos: Pos, side: Side) -> Result<(), InvalidMove> {
        self.game
            .place_stone(pos.row as usize, pos.col as usize, side)?;
        self.move_count += 1;
        self.message = None;

        let status = self.game.is_terminal(pos.row as usize, pos.col as usize);
        match status {
            TerminalResult::Win { side, line } => {
                info!(
                    "game over: {:?} wins from ({}, {}) to ({}, {}) after {} moves",
                    side, line[0].row, line[0].col, line[4].row, line[4].col, self.move_count
                );
                self.outcome = Some(status);
            }
            TerminalResult::Draw => {
                info!("game over: draw after {} moves", self.move_count);
                self.outcome = Some(status);
            }
            TerminalResult::Continuing => {
                self.current_turn = side.opponent();
            }
        }

        Ok(())
    }

    /// Search the current position on a worker thread.
    ///
    /// The worker gets its own copy of the board, so the displayed board is
    /// never touched mid-search.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let mut board = self.game.board().clone();
        let last_move = self.game.last_move();
        let delay = Duration::from_millis(self.config.ai_delay_ms);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let started = Instant::now();
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&mut board, last_move);

            let remaining = delay.saturating_sub(started.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos, Side::Computer) {
                        warn!("AI produced an illegal move: {}", e);
                        self.message = Some(format!("AI error: {}", e));
                    }
                }
                None => {
                    self.message = Some("AI could not find a move".to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config(first_mover: FirstMover) -> GameConfig {
        GameConfig {
            first_mover,
            ai_delay_ms: 0,
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "AI did not answer in time");
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.first_mover, FirstMover::Random);
        assert_eq!(config.ai_delay_ms, 1000);
    }

    #[test]
    fn test_random_first_mover_picks_a_side() {
        for _ in 0..20 {
            let side = FirstMover::Random.resolve();
            assert!(side == Side::Human || side == Side::Computer);
        }
    }

    #[test]
    fn test_human_first() {
        let mut state = GameState::new(instant_config(FirstMover::Human));
        assert!(state.is_human_turn());

        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.move_count, 1);
        assert!(state.is_ai_turn());
        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));

        // Not the human's turn any more
        assert_eq!(
            state.try_place_stone(Pos::new(0, 0)),
            Err("Not your turn".to_string())
        );
    }

    #[test]
    fn test_occupied_cell_message() {
        let mut state = GameState::new(instant_config(FirstMover::Human));
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.current_turn = Side::Human;

        let err = state.try_place_stone(Pos::new(7, 7)).unwrap_err();
        assert_eq!(err, "(7, 7) is already occupied");
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn test_computer_opens_center() {
        let mut state = GameState::new(instant_config(FirstMover::Computer));
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));
        assert!(state.is_human_turn());
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut state = GameState::new(instant_config(FirstMover::Human));
        for col in 2..7u8 {
            state.current_turn = Side::Human;
            state.try_place_stone(Pos::new(7, col)).unwrap();
        }

        assert!(state.is_over());
        assert!(!state.is_ai_turn());
        let line = state.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(7, 2));
        assert_eq!(line[4], Pos::new(7, 6));
        assert_eq!(
            state.try_place_stone(Pos::new(0, 0)),
            Err("Game is over".to_string())
        );
    }

    #[test]
    fn test_reset_clears_game() {
        let mut state = GameState::new(instant_config(FirstMover::Human));
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.restart_with(FirstMover::Human);

        assert!(state.board().is_board_empty());
        assert_eq!(state.move_count, 0);
        assert!(state.outcome.is_none());
        assert!(state.is_human_turn());
    }
}
