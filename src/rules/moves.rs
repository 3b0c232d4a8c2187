//! Move generation
//!
//! A side moves one or two cells in one of eight directions. A two-step
//! move is only offered when the one-step move in the same direction is
//! itself legal, so a jump never crosses a blocked cell or the board edge.
//!
//! Enumeration order is fixed (see [`Direction::ALL`]) and the search keeps
//! the first move seen on ties, so changing the order changes which move the
//! AI plays.

use crate::board::{Coord, Grid};

/// Upper bound on moves from one cell: 8 directions x {1, 2} steps
pub const MAX_MOVES: usize = 16;

/// Compass directions, with `x` growing downwards and `y` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Enumeration order used by the move generator
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Unit step `(dx, dy)`
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

/// A relocation of the side to move, as offsets from its current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dx: i8,
    pub dy: i8,
}

impl Move {
    #[inline]
    pub fn new(direction: Direction, steps: i8) -> Self {
        debug_assert!(steps == 1 || steps == 2);
        let (dx, dy) = direction.delta();
        Self {
            dx: dx * steps,
            dy: dy * steps,
        }
    }

    /// True for a two-cell jump
    #[inline]
    pub fn is_double(self) -> bool {
        self.dx.abs() == 2 || self.dy.abs() == 2
    }

    /// Destination when played from `origin`. The move must come from
    /// [`legal_moves`] for that origin.
    #[inline]
    pub fn destination(self, origin: Coord) -> Coord {
        Coord::new(
            (i32::from(origin.x) + i32::from(self.dx)) as u8,
            (i32::from(origin.y) + i32::from(self.dy)) as u8,
        )
    }
}

/// All legal moves from `origin`, in the fixed enumeration order: each
/// direction's one-step move, followed immediately by its two-step move
/// when that is legal too.
pub fn legal_moves(grid: &Grid, origin: Coord) -> Vec<Move> {
    let mut moves = Vec::with_capacity(MAX_MOVES);
    let x = i32::from(origin.x);
    let y = i32::from(origin.y);

    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let (dx, dy) = (i32::from(dx), i32::from(dy));

        if !grid.is_in_bounds_and_free(x + dx, y + dy) {
            continue;
        }
        moves.push(Move::new(direction, 1));

        if grid.is_in_bounds_and_free(x + 2 * dx, y + 2 * dy) {
            moves.push(Move::new(direction, 2));
        }
    }

    moves
}

/// Destination cells of [`legal_moves`], in the same order.
pub fn legal_destinations(grid: &Grid, origin: Coord) -> Vec<Coord> {
    legal_moves(grid, origin)
        .into_iter()
        .map(|m| m.destination(origin))
        .collect()
}
