//! Terminal detection
//!
//! A side is blocked, and has lost, when none of the eight cells around it
//! is free. Only one-step neighbours count: a side that could still escape
//! with a two-step jump is blocked all the same. The move generator never
//! offers such a jump anyway, since it requires the one-step cell to be free.

use crate::board::{Coord, Grid, Side};

use super::moves::Direction;

/// True if no one-step neighbour of `coord` is in bounds and free.
#[inline]
pub fn is_blocked(grid: &Grid, coord: Coord) -> bool {
    let x = i32::from(coord.x);
    let y = i32::from(coord.y);
    !Direction::ALL.iter().any(|d| {
        let (dx, dy) = d.delta();
        grid.is_in_bounds_and_free(x + i32::from(dx), y + i32::from(dy))
    })
}

/// Winner when `to_move` is about to play, if `to_move` is blocked.
#[inline]
pub fn check_winner(grid: &Grid, to_move: Side) -> Option<Side> {
    if is_blocked(grid, grid.coord(to_move)) {
        Some(to_move.opponent())
    } else {
        None
    }
}
