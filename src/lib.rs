//! Tic-Tac-Toe State Library
//!
//! This crate provides state management for a two-player tic-tac-toe game
//! with move history and time travel.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board** - Marks, 3x3 boards and detection of the eight winning lines.
//!
//! - **Game State** - An append-only history of board snapshots with a pointer
//!   to the active one. Jumping back keeps later snapshots until a new move is
//!   played from the earlier position.
//!
//! - **Views** - A pure `render` function projecting the state into cells and
//!   history entries for whatever draws the game.
//!
//! - **Controller** - One owner for a game that handles cell clicks and
//!   history jumps and re-renders after each.
//!
//! # Design Principles
//!
//! 1. **Derived, not stored** - Active player, winner and status all come from
//!    the snapshot at the current index.
//!
//! 2. **Illegal moves are no-ops** - Clicking an occupied cell or playing after
//!    a win leaves the state untouched.
//!
//! 3. **No rendering** - This crate is pure state; no UI, I/O or networking.
//!
//! 4. **Serialization-ready** - State and views convert to JSON.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_state::GameController;
//!
//! let mut ctl = GameController::new();
//!
//! for cell in [0, 4, 1, 3, 2] {
//!     ctl.on_cell_click(cell);
//! }
//! assert_eq!(ctl.view().status, "Winner: X");
//!
//! // Go back to the start; later snapshots are still listed
//! let view = ctl.on_history_jump(0);
//! assert_eq!(view.status, "Next player: X");
//! assert_eq!(view.history.len(), 6);
//!
//! // A new move from the start discards them
//! let view = ctl.on_cell_click(4);
//! assert_eq!(view.history.len(), 2);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
