//! AI engine wrapping the minimax searcher
//!
//! The engine owns the search configuration, times each search and reports
//! the chosen move together with search statistics.
//!
//! # Example
//!
//! ```
//! use isolation::{AIEngine, Coord, Grid, Side};
//!
//! let engine = AIEngine::with_budget(10_000);
//! let grid = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//!
//! let result = engine.get_move_with_stats(&grid);
//! if let Some(next) = result.next {
//!     println!("A.I. moves to {}", next.coord(Side::Ai));
//! }
//! ```

use std::time::Instant;

use crate::board::{Coord, Grid, Side};
use crate::rules::Move;
use crate::search::{SearchStats, Searcher, Value, DEFAULT_BUDGET};

/// Result of an AI move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Destination of the chosen move, if any
    pub best_move: Option<Coord>,
    /// Chosen move as offsets from the AI's cell
    pub delta: Option<Move>,
    /// Position after the chosen move
    pub next: Option<Grid>,
    /// Backed-up value of the searched position
    pub value: Value,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub stats: SearchStats,
}

/// AI engine: plays the maximizing side with a fixed node budget per move.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with the default budget of 4 000 000 children.
    #[must_use]
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_BUDGET)
    }

    /// Create an engine with a custom node budget per search.
    #[must_use]
    pub fn with_budget(budget: u64) -> Self {
        Self {
            searcher: Searcher::new(budget),
        }
    }

    #[inline]
    pub fn budget(&self) -> u64 {
        self.searcher.budget()
    }

    /// Destination of the AI's best move, or `None` if the AI cannot move.
    #[must_use]
    pub fn get_move(&self, grid: &Grid) -> Option<Coord> {
        self.get_move_with_stats(grid).best_move
    }

    /// Search for the AI's best move with a fresh budget.
    #[must_use]
    pub fn get_move_with_stats(&self, grid: &Grid) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(grid, Side::Ai);
        let time_ms = start.elapsed().as_millis() as u64;

        let best_move = result.next.map(|next| next.coord(Side::Ai));
        log::info!(
            "search: value {:?}, move {:?}, {} nodes ({} cut, {} skipped), depth {}, {}ms",
            result.value,
            best_move,
            result.stats.nodes,
            result.stats.budget_cutoffs,
            result.stats.skipped_moves,
            result.stats.max_depth,
            time_ms
        );
        if result.stats.truncated() {
            log::debug!(
                "budget of {} reached, value is not exact",
                self.searcher.budget()
            );
        }

        MoveResult {
            best_move,
            delta: result.best_move,
            next: result.next,
            value: result.value,
            time_ms,
            stats: result.stats,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
