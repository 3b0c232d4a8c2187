//! Game configuration

use crate::board::{Side, DEFAULT_COLS, DEFAULT_ROWS, MAX_SIDE, MIN_SIDE};
use crate::error::{GameError, Result};
use crate::game::StartOptions;
use crate::search::DEFAULT_BUDGET;

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid extent along `x`
    pub rows: u8,
    /// Grid extent along `y`
    pub cols: u8,
    /// Child positions the AI may create per move
    pub budget: u64,
    /// Side that moves first
    pub first: Side,
    /// Requested start cells and pre-mark count
    pub start: StartOptions,
    /// Ignore `start` and draw random start options instead
    pub randomize: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            budget: DEFAULT_BUDGET,
            first: Side::Ai,
            start: StartOptions::default(),
            randomize: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check the values that cannot be repaired with defaults.
    ///
    /// Start coordinates and the pre-mark count are not checked here: bad
    /// values there fall back to defaults when the grid is built.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
                return Err(GameError::InvalidConfiguration {
                    message: format!("{name} must be in {MIN_SIDE}..={MAX_SIDE}, got {value}"),
                });
            }
        }
        if self.budget == 0 {
            return Err(GameError::InvalidConfiguration {
                message: "search budget must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
