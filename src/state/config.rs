//! Display configuration for rendered views.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Mark;

/// Symbols and labels used when rendering a game.
///
/// Any field missing from a JSON config falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Symbol shown for X
    pub x_symbol: String,

    /// Symbol shown for O
    pub o_symbol: String,

    /// History label for the initial empty board
    pub start_label: String,

    /// History label prefix for later snapshots, followed by the move number
    pub move_label_prefix: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x_symbol: "X".to_string(),
            o_symbol: "O".to_string(),
            start_label: "Start Game".to_string(),
            move_label_prefix: "Move #".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn with_symbols(mut self, x: impl Into<String>, o: impl Into<String>) -> Self {
        self.x_symbol = x.into();
        self.o_symbol = o.into();
        self
    }

    pub fn with_start_label(mut self, label: impl Into<String>) -> Self {
        self.start_label = label.into();
        self
    }

    pub fn with_move_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.move_label_prefix = prefix.into();
        self
    }

    /// Display symbol for a mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.x_symbol.as_str(),
            Mark::O => self.o_symbol.as_str(),
        }
    }

    /// History label for snapshot `step`.
    pub fn history_label(&self, step: usize) -> String {
        if step == 0 {
            self.start_label.clone()
        } else {
            format!("{}{}", self.move_label_prefix, step)
        }
    }
}

/// Config errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Invalid view config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
        }
    }
}
