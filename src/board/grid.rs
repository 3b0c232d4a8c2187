//! Grid snapshot: unavailable cells plus both side coordinates

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Coord, Side, MAX_SIDE, MIN_SIDE};
use crate::error::GameError;

/// One position of the game.
///
/// Unavailable cells live in a bitboard; the AI and player cells are given
/// by their coordinates, which are authoritative. A `Grid` is `Copy`, so
/// deriving a child position is a plain copy followed by a few bit sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u8,
    cols: u8,
    unavailable: Bitboard,
    ai: Coord,
    player: Coord,
}

impl Grid {
    /// Create a grid with no unavailable cells.
    pub fn new(rows: u8, cols: u8, ai: Coord, player: Coord) -> Result<Self, GameError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) || !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
            return Err(GameError::InvalidGrid {
                message: format!(
                    "{rows}x{cols} is outside the supported {MIN_SIDE}..={MAX_SIDE} range"
                ),
            });
        }
        for (side, coord) in [(Side::Ai, ai), (Side::Player, player)] {
            if !Coord::is_valid(coord.x.into(), coord.y.into(), rows, cols) {
                return Err(GameError::InvalidGrid {
                    message: format!("{side} coordinate {coord} is off the {rows}x{cols} grid"),
                });
            }
        }
        if ai == player {
            return Err(GameError::InvalidGrid {
                message: format!("both sides placed on {ai}"),
            });
        }
        Ok(Self {
            rows,
            cols,
            unavailable: Bitboard::new(),
            ai,
            player,
        })
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Current coordinate of a side
    #[inline]
    pub fn coord(&self, side: Side) -> Coord {
        match side {
            Side::Ai => self.ai,
            Side::Player => self.player,
        }
    }

    /// Number of unavailable cells
    #[inline]
    pub fn unavailable_count(&self) -> u32 {
        self.unavailable.count()
    }

    /// State of a cell. Panics if the coordinate is off the grid.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Cell {
        assert!(
            coord.x < self.rows && coord.y < self.cols,
            "cell {coord} is off the {}x{} grid",
            self.rows,
            self.cols
        );
        if coord == self.ai {
            Cell::Ai
        } else if coord == self.player {
            Cell::Player
        } else if self.unavailable.get(coord.to_index(self.cols)) {
            Cell::Unavailable
        } else {
            Cell::Free
        }
    }

    /// True iff `(x, y)` lies on the grid and the cell there is free.
    #[inline]
    pub fn is_in_bounds_and_free(&self, x: i32, y: i32) -> bool {
        match Coord::checked(x, y, self.rows, self.cols) {
            Some(coord) => self.cell(coord) == Cell::Free,
            None => false,
        }
    }

    /// Mark a free cell unavailable. Panics if the cell holds a side.
    #[inline]
    pub fn block(&mut self, coord: Coord) {
        assert!(
            !matches!(self.cell(coord), Cell::Ai | Cell::Player),
            "cannot block occupied cell {coord}"
        );
        self.unavailable.set(coord.to_index(self.cols));
    }

    /// Relocate `side` to `destination` and return the resulting grid.
    ///
    /// The origin becomes unavailable, and for a two-step move so does the
    /// crossed cell. The destination must come from the move generator;
    /// any other shape of move is a caller bug and panics.
    #[must_use]
    pub fn apply_move(&self, side: Side, destination: Coord) -> Grid {
        let origin = self.coord(side);
        let dx = i32::from(destination.x) - i32::from(origin.x);
        let dy = i32::from(destination.y) - i32::from(origin.y);
        let span = dx.abs().max(dy.abs());
        assert!(
            (span == 1 || span == 2) && (dx == 0 || dy == 0 || dx.abs() == dy.abs()),
            "{side} cannot move from {origin} to {destination}"
        );
        assert!(
            self.cell(destination) == Cell::Free,
            "destination {destination} is not free"
        );

        let mut next = *self;
        next.unavailable.set(origin.to_index(self.cols));
        if span == 2 {
            let crossed = Coord::new(
                (i32::from(origin.x) + dx / 2) as u8,
                (i32::from(origin.y) + dy / 2) as u8,
            );
            next.unavailable.set(crossed.to_index(self.cols));
        }
        match side {
            Side::Ai => next.ai = destination,
            Side::Player => next.player = destination,
        }
        next
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.rows {
            for y in 0..self.cols {
                if y > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(Coord::new(x, y)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    /// Parse the text dump written by `Display`: one line per row, cells
    /// separated by whitespace, `_` free, `X` unavailable, `A` AI, `B` player.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| GameError::InvalidGrid { message };

        let lines: Vec<Vec<&str>> = s
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        if lines.iter().any(|tokens| tokens.len() != cols) {
            return Err(invalid("rows have different lengths".to_string()));
        }
        if rows > MAX_SIDE as usize || cols > MAX_SIDE as usize {
            return Err(invalid(format!("{rows}x{cols} grid is too large")));
        }

        let mut ai = None;
        let mut player = None;
        let mut blocked = Vec::new();
        for (x, tokens) in lines.iter().enumerate() {
            for (y, token) in tokens.iter().enumerate() {
                let mut chars = token.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) => Cell::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| invalid(format!("unknown cell '{token}' at ({x}, {y})")))?;

                let coord = Coord::new(x as u8, y as u8);
                let slot = match cell {
                    Cell::Free => continue,
                    Cell::Unavailable => {
                        blocked.push(coord);
                        continue;
                    }
                    Cell::Ai => &mut ai,
                    Cell::Player => &mut player,
                };
                if slot.replace(coord).is_some() {
                    return Err(invalid(format!("more than one '{token}' marker")));
                }
            }
        }

        let ai = ai.ok_or_else(|| invalid("missing AI marker 'A'".to_string()))?;
        let player = player.ok_or_else(|| invalid("missing player marker 'B'".to_string()))?;
        let mut grid = Grid::new(rows as u8, cols as u8, ai, player)?;
        for coord in blocked {
            grid.block(coord);
        }
        Ok(grid)
    }
}
