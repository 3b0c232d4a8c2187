//! Collaborators of the game loop
//!
//! A [`GameObserver`] is told about every state change; it never mutates the
//! game. A [`MoveSource`] supplies the player's destinations.

use crate::board::{Coord, Grid};
use crate::error::GameError;

use super::state::GameResult;

/// Receives game state after every transition.
pub trait GameObserver {
    /// Full position after a transition, with the player's cell
    fn on_update(&mut self, grid: &Grid, player: Coord);

    /// No player input is accepted until the next destination set arrives
    fn on_interaction_disabled(&mut self) {}

    /// Cells the player may move to
    fn on_player_destinations(&mut self, _destinations: &[Coord]) {}

    /// A player request was refused; the game state is unchanged
    fn on_rejected(&mut self, _error: &GameError) {}

    fn on_game_over(&mut self, result: &GameResult);
}

/// Supplies the player's chosen destination. `None` ends the game loop.
pub trait MoveSource {
    fn next_move(&mut self, grid: &Grid, destinations: &[Coord]) -> Option<Coord>;
}

impl<F> MoveSource for F
where
    F: FnMut(&Grid, &[Coord]) -> Option<Coord>,
{
    fn next_move(&mut self, grid: &Grid, destinations: &[Coord]) -> Option<Coord> {
        self(grid, destinations)
    }
}
