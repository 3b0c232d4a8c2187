//! Isolation game engine with an exhaustive minimax AI
//!
//! Two sides share a small grid. On its turn a side moves one or two cells
//! in any of eight directions and every cell it leaves or crosses becomes
//! unavailable for the rest of the game. A side with no free neighbouring
//! cell on its turn has lost.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid representation with a bitboard of unavailable cells
//! - [`rules`]: Move generation and terminal detection
//! - [`search`]: Minimax search under a node budget
//! - [`engine`]: AI engine wrapping the searcher
//! - [`game`]: Start position, turn controller and its collaborators
//!
//! # Quick Start
//!
//! ```
//! use isolation::{AIEngine, Coord, GameState, Grid, Side};
//!
//! let grid = Grid::new(4, 4, Coord::new(1, 0), Coord::new(2, 3)).unwrap();
//! let mut game = GameState::new(grid, Side::Ai, AIEngine::with_budget(5_000));
//!
//! // AI moves first
//! let result = game.play_ai_turn().unwrap();
//! println!("A.I. plays {:?}", result.best_move);
//!
//! // Player answers with any offered destination
//! let dest = game.player_destinations()[0];
//! game.try_move_player(dest).unwrap();
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Cell, Coord, Grid, Side};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{GameError, Result};
pub use game::{GameObserver, GameResult, GameState, MoveSource, StartOptions};
pub use search::Value;
