//! Initial position from start options
//!
//! Requested coordinates that are off the grid or already taken fall back to
//! defaults: the AI starts at the middle of the first column, the player at
//! the middle of the last one. Pre-marked cells are placed by sampling random
//! cells and marking those still free; a miss is skipped, not retried.

use rand::Rng;

use crate::board::{Coord, Grid, MAX_SIDE, MIN_SIDE};
use crate::error::{GameError, Result};

/// Pre-marked cells when the start options do not say otherwise
pub const DEFAULT_UNAVAILABLE: i32 = 4;

/// Start options as supplied by the user, possibly invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    /// Requested AI cell `(x, y)`
    pub ai: Option<(i32, i32)>,
    /// Requested player cell `(x, y)`
    pub player: Option<(i32, i32)>,
    /// Number of random cells to mark unavailable before the first move
    pub unavailable: i32,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            ai: None,
            player: None,
            unavailable: DEFAULT_UNAVAILABLE,
        }
    }
}

impl StartOptions {
    /// Random, distinct start cells and a random pre-mark count below half
    /// the board.
    pub fn randomized<R: Rng>(rows: u8, cols: u8, rng: &mut R) -> Self {
        let mut sample = || {
            (
                rng.random_range(0..i32::from(rows)),
                rng.random_range(0..i32::from(cols)),
            )
        };
        let ai = sample();
        let mut player = sample();
        while player == ai {
            player = sample();
        }
        let half = (i32::from(rows) * i32::from(cols)) / 2;
        Self {
            ai: Some(ai),
            player: Some(player),
            unavailable: rng.random_range(0..half),
        }
    }
}

/// Default AI cell: middle of the first column (upper middle for even rows).
pub fn default_ai_coord(rows: u8) -> Coord {
    let x = if rows % 2 == 1 { rows / 2 } else { rows / 2 - 1 };
    Coord::new(x, 0)
}

/// Default player cell: middle of the last column.
pub fn default_player_coord(rows: u8, cols: u8) -> Coord {
    Coord::new(rows / 2, cols - 1)
}

/// Build the first position of a game.
pub fn build_initial_grid<R: Rng>(
    rows: u8,
    cols: u8,
    options: &StartOptions,
    rng: &mut R,
) -> Result<Grid> {
    if !(MIN_SIDE..=MAX_SIDE).contains(&rows) || !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
        return Err(GameError::InvalidConfiguration {
            message: format!("board must be between {MIN_SIDE} and {MAX_SIDE} cells per side"),
        });
    }

    let requested = |cell: Option<(i32, i32)>| {
        cell.and_then(|(x, y)| Coord::checked(x, y, rows, cols))
    };

    let ai = requested(options.ai).unwrap_or_else(|| {
        log::debug!("AI start {:?} unusable, using default", options.ai);
        default_ai_coord(rows)
    });

    let player = requested(options.player)
        .filter(|&c| c != ai)
        .or_else(|| {
            log::debug!("player start {:?} unusable, using default", options.player);
            Some(default_player_coord(rows, cols)).filter(|&c| c != ai)
        })
        .unwrap_or_else(|| first_cell_except(rows, cols, ai));

    let mut grid = Grid::new(rows, cols, ai, player)?;

    let count = options.unavailable;
    if count > 0 && (count as usize) < grid.cell_count() / 2 {
        for _ in 0..count {
            let x = rng.random_range(0..i32::from(rows));
            let y = rng.random_range(0..i32::from(cols));
            if grid.is_in_bounds_and_free(x, y) {
                grid.block(Coord::new(x as u8, y as u8));
            }
        }
    } else if count != 0 {
        log::debug!("ignoring {count} pre-marked cells on a {rows}x{cols} board");
    }

    log::info!(
        "new {}x{} game: A.I. at {}, player at {}, {} unavailable",
        rows,
        cols,
        ai,
        player,
        grid.unavailable_count()
    );
    Ok(grid)
}

/// First cell in row-major order other than `taken`
fn first_cell_except(rows: u8, cols: u8, taken: Coord) -> Coord {
    (0..rows)
        .flat_map(|x| (0..cols).map(move |y| Coord::new(x, y)))
        .find(|&c| c != taken)
        .unwrap_or(taken)
}
