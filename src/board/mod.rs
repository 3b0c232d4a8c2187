//! Board representation for the isolation game

pub mod bitboard;
pub mod grid;


// Re-exports
pub use bitboard::Bitboard;
pub use grid::Grid;

/// Default board size (5x5)
pub const DEFAULT_ROWS: u8 = 5;
pub const DEFAULT_COLS: u8 = 5;

/// Smallest and largest supported board extent on either axis
pub const MIN_SIDE: u8 = 2;
pub const MAX_SIDE: u8 = 16;
pub const MAX_CELLS: usize = MAX_SIDE as usize * MAX_SIDE as usize; // 256

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Unavailable,
    Ai,
    Player,
}

impl Cell {
    /// Character used in the text dump of a grid
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Free => '_',
            Cell::Unavailable => 'X',
            Cell::Ai => 'A',
            Cell::Player => 'B',
        }
    }

    #[inline]
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '_' => Some(Cell::Free),
            'X' => Some(Cell::Unavailable),
            'A' => Some(Cell::Ai),
            'B' => Some(Cell::Player),
            _ => None,
        }
    }
}

/// The two sides. The AI is the maximizer, the player the minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Ai,
    Player,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Ai => Side::Player,
            Side::Player => Side::Ai,
        }
    }

    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Side::Ai
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ai => write!(f, "A.I."),
            Side::Player => write!(f, "Player"),
        }
    }
}

/// Coordinate on the grid. `x` indexes the first axis (rows), `y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < MAX_SIDE && y < MAX_SIDE);
        Self { x, y }
    }

    /// Build a coordinate from signed components if it lies inside a
    /// `rows` x `cols` grid.
    #[inline]
    pub fn checked(x: i32, y: i32, rows: u8, cols: u8) -> Option<Self> {
        if Self::is_valid(x, y, rows, cols) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, rows: u8, cols: u8) -> bool {
        x >= 0 && x < i32::from(rows) && y >= 0 && y < i32::from(cols)
    }

    /// Cell index in row-major order for a grid with `cols` columns
    #[inline]
    pub fn to_index(self, cols: u8) -> usize {
        self.x as usize * cols as usize + self.y as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
