//! Error types for the isolation engine

use thiserror::Error;

use crate::board::{Coord, Side};

/// Main error type for the isolation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("game already over")]
    GameOver,

    #[error("not the player's turn")]
    NotPlayerTurn,

    #[error("not the A.I.'s turn")]
    NotAiTurn,

    #[error("illegal destination {destination} for {side}")]
    IllegalDestination { side: Side, destination: Coord },

    #[error("search returned no move")]
    NoMoveFound,

    #[error("invalid grid: {message}")]
    InvalidGrid { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
