//! Pure projection of a game into what the presentation layer draws.
//!
//! [`render`] is called after every state transition; it never mutates the
//! game and two calls on the same state give equal views.

use serde::Serialize;

use super::board::{winning_line, BOARD_CELLS};
use super::config::ViewConfig;
use super::game::{GameState, Status};

/// One board cell as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,

    /// Mark symbol, empty string for a blank cell
    pub symbol: String,

    /// Whether clicking this cell would place a mark
    pub clickable: bool,

    /// Whether this cell is part of the winning line
    pub highlighted: bool,
}

/// One history list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Index to pass back to `on_history_jump`
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub status: String,
    pub cells: Vec<CellView>,
    pub history: Vec<HistoryEntry>,
}

impl GameView {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status,
            "cells": self.cells,
            "history": self.history
        })
    }
}

/// Render the current snapshot of `state`.
pub fn render(state: &GameState, config: &ViewConfig) -> GameView {
    let board = state.current_board();
    let over = state.is_over();
    let line = winning_line(board);

    let cells = (0..BOARD_CELLS)
        .map(|index| {
            let mark = board.get(index);
            CellView {
                index,
                symbol: mark.map(|m| config.symbol(m).to_string()).unwrap_or_default(),
                clickable: mark.is_none() && !over,
                highlighted: line.is_some_and(|l| l.contains(&index)),
            }
        })
        .collect();

    let history = (0..state.len())
        .map(|step| HistoryEntry {
            step,
            label: config.history_label(step),
            is_current: step == state.current_index(),
        })
        .collect();

    GameView {
        status: status_text(state, config),
        cells,
        history,
    }
}

/// Status line using the configured symbols.
fn status_text(state: &GameState, config: &ViewConfig) -> String {
    match state.status() {
        Status::Winner(m) => format!("Winner: {}", config.symbol(m)),
        Status::Draw => "Draw".to_string(),
        Status::Next(m) => format!("Next player: {}", config.symbol(m)),
    }
}
