//! State management module for tic-tac-toe.
//!
//! - `board` - marks, boards and win detection
//! - `game` - snapshot history, current index, moves and jumps
//! - `view` - pure `render(state) -> view` projection
//! - `config` - display symbols and labels
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     GameController                       │
//! │                                                          │
//! │  on_cell_click(i) ──▶ GameState::play_move(i) ─┐         │
//! │  on_history_jump(k) ─▶ GameState::jump_to(k) ──┤         │
//! │                                                ▼         │
//! │                     render(&GameState, &ViewConfig)      │
//! │                                                │         │
//! └────────────────────────────────────────────────┼─────────┘
//!                                                  ▼
//!                                              GameView
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tictactoe_state::state::{GameState, Mark, Status};
//!
//! let mut game = GameState::new();
//! game.play_move(4).unwrap();
//! assert_eq!(game.status(), Status::Next(Mark::O));
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.active_player(), Mark::X);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod view;

use chrono::{DateTime, Utc};
use tracing::instrument;

// Re-export commonly used types
pub use board::{winner, winning_line, Board, Cell, Mark, BOARD_CELLS, WINNING_LINES};
pub use config::{ConfigError, ViewConfig};
pub use game::{status, GameError, GameSnapshot, GameState, HistoryError, Status};
pub use view::{render, CellView, GameView, HistoryEntry};

/// Single owner of one game, driven by presentation-layer callbacks.
///
/// Rejected actions are ignored: the state stays as it was and the returned
/// view is the same frame as before.
#[derive(Debug, Clone)]
pub struct GameController {
    game: GameState,
    config: ViewConfig,

    /// When this session was created
    pub created_at: DateTime<Utc>,

    /// When the last accepted move or jump happened
    pub last_action_at: Option<DateTime<Utc>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::with_config(ViewConfig::default())
    }

    pub fn with_config(config: ViewConfig) -> Self {
        Self::from_state(GameState::new(), config)
    }

    /// Resume from an existing state (for restoring a saved game).
    pub fn from_state(game: GameState, config: ViewConfig) -> Self {
        Self {
            game,
            config,
            created_at: Utc::now(),
            last_action_at: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Render the current frame without changing state.
    pub fn view(&self) -> GameView {
        render(&self.game, &self.config)
    }

    /// Handle a click on board cell `index`.
    #[instrument(skip(self), fields(current = self.game.current_index()))]
    pub fn on_cell_click(&mut self, index: usize) -> GameView {
        match self.game.play_move(index) {
            Ok(()) => self.touch(),
            Err(e) => tracing::debug!(error = %e, "move ignored"),
        }
        self.view()
    }

    /// Handle a click on history entry `step`.
    #[instrument(skip(self), fields(current = self.game.current_index()))]
    pub fn on_history_jump(&mut self, step: usize) -> GameView {
        match self.game.jump_to(step) {
            Ok(()) => self.touch(),
            Err(e) => tracing::debug!(error = %e, "jump ignored"),
        }
        self.view()
    }

    /// Start over with an empty board, keeping the config.
    pub fn reset(&mut self) -> GameView {
        self.game = GameState::new();
        self.touch();
        tracing::debug!("game reset");
        self.view()
    }

    fn touch(&mut self) {
        self.last_action_at = Some(Utc::now());
    }

    /// Session snapshot including the rendered view.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "created_at": self.created_at,
            "last_action_at": self.last_action_at,
            "game": self.game.to_json(),
            "view": self.view().to_json()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_controller_basic() {
        let mut ctl = GameController::new();
        assert!(ctl.last_action_at.is_none());

        let view = ctl.on_cell_click(4);
        assert_eq!(view.cells[4].symbol, "X");
        assert_eq!(view.status, "Next player: O");
        assert!(ctl.last_action_at.is_some());
    }

    #[test]
    fn test_controller_ignores_illegal_move() {
        let mut ctl = GameController::new();
        let before = ctl.on_cell_click(4);
        let stamp = ctl.last_action_at;

        let after = ctl.on_cell_click(4);
        assert_eq!(after, before);
        assert_eq!(ctl.last_action_at, stamp);
        assert_eq!(ctl.game().len(), 2);

        let after = ctl.on_cell_click(42);
        assert_eq!(after, before);
    }

    #[test]
    fn test_controller_ignores_bad_jump() {
        let mut ctl = GameController::new();
        ctl.on_cell_click(0);
        let before = ctl.view();

        assert_eq!(ctl.on_history_jump(5), before);
        assert_eq!(ctl.game().current_index(), 1);
    }

    #[test]
    fn test_controller_winning_game() {
        let mut ctl = GameController::new();
        let mut view = ctl.view();
        for i in [0, 4, 1, 3, 2] {
            view = ctl.on_cell_click(i);
        }
        assert_eq!(view.status, "Winner: X");

        // Further clicks change nothing
        assert_eq!(ctl.on_cell_click(8), view);
    }

    #[test]
    fn test_controller_time_travel() {
        let mut ctl = GameController::new();
        for i in [0, 1, 2] {
            ctl.on_cell_click(i);
        }

        let view = ctl.on_history_jump(0);
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.history.len(), 4);
        assert!(view.history[0].is_current);

        let view = ctl.on_cell_click(8);
        assert_eq!(view.history.len(), 2);
        assert_eq!(view.cells[8].symbol, "X");
        assert_eq!(view.cells[0].symbol, "");
    }

    #[test]
    fn test_controller_reset_keeps_config() {
        let config = ViewConfig::new().with_symbols("❌", "⭕");
        let mut ctl = GameController::with_config(config.clone());
        ctl.on_cell_click(0);

        let view = ctl.reset();
        assert_eq!(ctl.game(), &GameState::new());
        assert_eq!(ctl.config(), &config);
        assert_eq!(view.status, "Next player: ❌");
    }

    #[test]
    fn test_controller_from_state() {
        let mut game = GameState::new();
        game.play_move(4).unwrap();

        let ctl = GameController::from_state(game.clone(), ViewConfig::default());
        assert_eq!(ctl.game(), &game);
        assert_eq!(ctl.view().cells[4].symbol, "X");
    }

    #[test]
    fn test_controller_to_json() {
        let mut ctl = GameController::new();
        ctl.on_cell_click(4);
        let json = ctl.to_json();

        assert_eq!(json["game"]["current_index"], 1);
        assert_eq!(json["view"]["status"], "Next player: O");
        assert!(json["created_at"].is_string());
    }
}
