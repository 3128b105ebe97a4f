// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board configuration
//!
//! ```json
//! { "size": 9, "rules": "capture" }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Board, BoardError};

/// Selects how `Board::play_move` treats a stone on an empty point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Any empty point is legal. Nothing is ever captured.
    #[default]
    Freestyle,
    /// Go rules on top of five-in-a-row: liberty-less opponent blocks are
    /// removed, suicide and immediate ko recapture are illegal.
    Capture,
}

impl FromStr for RuleSet {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "freestyle" => Ok(RuleSet::Freestyle),
            "capture" => Ok(RuleSet::Capture),
            other => Err(BoardError::UnknownRuleSet(other.to_string())),
        }
    }
}

/// Settings for creating a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board side length
    pub size: usize,
    /// Move-execution rules
    #[serde(default)]
    pub rules: RuleSet,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 7,
            rules: RuleSet::Freestyle,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load_from_file(path: &Path) -> Result<Self, BoardError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Create the configured board
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::with_rules(self.size, self.rules)
    }
}
