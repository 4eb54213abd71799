//! Game state management.
//!
//! Holds the history of board snapshots and a pointer to the active one.
//! Everything else (whose turn it is, who won, the status line) is derived
//! from the snapshot at the current index.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{winner, Board, Mark, BOARD_CELLS};

/// Derived game status for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A mark completed a line
    Winner(Mark),
    /// Board is full and nobody won
    Draw,
    /// Game continues; this mark plays next
    Next(Mark),
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winner(_) => "winner",
            Self::Draw => "draw",
            Self::Next(_) => "next",
        }
    }

    /// Check if no further moves are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Winner(_) | Self::Draw)
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Winner(m) => serde_json::json!({"status": self.as_str(), "mark": m.as_str()}),
            Self::Draw => serde_json::json!({"status": self.as_str()}),
            Self::Next(m) => serde_json::json!({"status": self.as_str(), "mark": m.as_str()}),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(m) => write!(f, "Winner: {}", m),
            Self::Draw => write!(f, "Draw"),
            Self::Next(m) => write!(f, "Next player: {}", m),
        }
    }
}

/// Errors from rejected moves and jumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    CellOutOfRange { index: usize },
    CellOccupied { index: usize },
    GameOver { winner: Mark },
    MoveOutOfRange { step: usize, len: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfRange { index } => write!(f, "Cell {} is off the board", index),
            Self::CellOccupied { index } => write!(f, "Cell {} is already occupied", index),
            Self::GameOver { winner } => write!(f, "Game already won by {}", winner),
            Self::MoveOutOfRange { step, len } => {
                write!(f, "Move {} is outside history of length {}", step, len)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Errors when restoring a state from stored snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    Empty,
    InitialNotEmpty,
    NotSingleCell { step: usize, changed: usize },
    OverwroteCell { step: usize, index: usize },
    WrongMark { step: usize, expected: Mark },
    MoveAfterWin { step: usize },
    CurrentOutOfRange { current: usize, len: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "History has no snapshots"),
            Self::InitialNotEmpty => write!(f, "First snapshot is not an empty board"),
            Self::NotSingleCell { step, changed } => {
                write!(f, "Snapshot {} changes {} cells, expected 1", step, changed)
            }
            Self::OverwroteCell { step, index } => {
                write!(f, "Snapshot {} overwrites occupied cell {}", step, index)
            }
            Self::WrongMark { step, expected } => {
                write!(f, "Snapshot {} should place {}", step, expected)
            }
            Self::MoveAfterWin { step } => {
                write!(f, "Snapshot {} continues a game that was already won", step)
            }
            Self::CurrentOutOfRange { current, len } => {
                write!(f, "Current index {} is outside history of length {}", current, len)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Serialized form of a game state.
///
/// Converting back into a [`GameState`] validates the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub history: Vec<Board>,
    pub current_index: usize,
}

/// Game state: snapshot history plus the active position.
///
/// Invariants:
/// - `history[0]` is the empty board
/// - each later snapshot fills exactly one previously empty cell, with the
///   mark whose turn it was
/// - no snapshot follows a won board
/// - `current < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot", into = "GameSnapshot")]
pub struct GameState {
    history: Vec<Board>,
    current: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new game with a single empty board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Rebuild a game from stored snapshots (for restoring state).
    pub fn from_history(history: Vec<Board>, current: usize) -> Result<Self, HistoryError> {
        let first = history.first().ok_or(HistoryError::Empty)?;
        if first.filled_count() != 0 {
            return Err(HistoryError::InitialNotEmpty);
        }

        for (step, pair) in history.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (prev, next) = (&pair[0], &pair[1]);

            if winner(prev).is_some() {
                return Err(HistoryError::MoveAfterWin { step });
            }

            let changed = prev.diff(next);
            if changed.len() != 1 {
                return Err(HistoryError::NotSingleCell {
                    step,
                    changed: changed.len(),
                });
            }

            let index = changed[0];
            if !prev.is_empty_at(index) {
                return Err(HistoryError::OverwroteCell { step, index });
            }

            let expected = Mark::for_position(step - 1);
            if next.get(index) != Some(expected) {
                return Err(HistoryError::WrongMark { step, expected });
            }
        }

        if current >= history.len() {
            return Err(HistoryError::CurrentOutOfRange {
                current,
                len: history.len(),
            });
        }

        Ok(Self { history, current })
    }

    /// All recorded snapshots, including any ahead of the current index.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; a game holds at least the initial board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Mark to play next, derived from the current index.
    pub fn active_player(&self) -> Mark {
        Mark::for_position(self.current)
    }

    /// Winner of the current snapshot.
    pub fn winner(&self) -> Option<Mark> {
        winner(self.current_board())
    }

    pub fn status(&self) -> Status {
        status(self.current_board(), self.active_player())
    }

    /// Check if the current snapshot accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Cell filled at history step `step` (1-based; step 0 is the empty board).
    pub fn move_cell(&self, step: usize) -> Option<usize> {
        if step == 0 || step >= self.history.len() {
            return None;
        }
        self.history[step - 1]
            .diff(&self.history[step])
            .first()
            .copied()
    }

    /// Place the active player's mark at `index`.
    ///
    /// On error nothing changes. On success any snapshots after the current
    /// index are discarded before the new one is appended.
    pub fn play_move(&mut self, index: usize) -> Result<(), GameError> {
        if index >= BOARD_CELLS {
            return Err(GameError::CellOutOfRange { index });
        }

        let board = *self.current_board();
        if !board.is_empty_at(index) {
            return Err(GameError::CellOccupied { index });
        }
        if let Some(w) = winner(&board) {
            return Err(GameError::GameOver { winner: w });
        }

        let mark = self.active_player();
        let next = board.with_mark(index, mark);

        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        tracing::trace!(index, %mark, step = self.current, discarded, "move played");
        Ok(())
    }

    /// Make snapshot `step` the active one. Later snapshots are kept.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current = step;
        tracing::trace!(step, "jumped to snapshot");
        Ok(())
    }

    /// Convert full game state to JSON.
    pub fn to_json(&self) -> serde_json::Value {
        let history: Vec<serde_json::Value> = self.history.iter().map(|b| b.to_json()).collect();

        serde_json::json!({
            "history": history,
            "current_index": self.current,
            "active_player": self.active_player().as_str(),
            "status": self.status().to_json()
        })
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = HistoryError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        Self::from_history(snapshot.history, snapshot.current_index)
    }
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self {
            history: state.history,
            current_index: state.current,
        }
    }
}

/// Status for a board given the mark whose turn it is.
pub fn status(board: &Board, active_player: Mark) -> Status {
    if let Some(m) = winner(board) {
        Status::Winner(m)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::Next(active_player)
    }
}
