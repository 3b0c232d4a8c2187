//! Game flow: start position, turn controller and its collaborators

pub mod observer;
pub mod setup;
pub mod state;

pub use observer::{GameObserver, MoveSource};
pub use setup::{build_initial_grid, StartOptions, DEFAULT_UNAVAILABLE};
pub use state::{GameResult, GameState, MoveRecord};
