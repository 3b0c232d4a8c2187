//! Exhaustive minimax search under a node budget
//!
//! The AI is the maximizer and the player the minimizer. Every backed-up
//! value is one of two sentinels, there is no static evaluation:
//!
//! - a side to move that is blocked loses,
//! - a node reached after the budget ran out is scored as a loss for the
//!   side to move,
//! - otherwise the node takes the best value among its children, comparing
//!   strictly so the earliest enumerated child wins ties.
//!
//! Moves left over once the budget is spent are still compared. Their child
//! is never created: it would stop at its first check and score as a loss
//! for the opponent, so that value is used directly. Every child is dropped
//! as soon as it has been compared; the position after the chosen root move
//! is rebuilt at the end.
//!
//! # Example
//!
//! ```
//! use isolation::board::{Coord, Grid, Side};
//! use isolation::search::{Searcher, Value};
//!
//! let grid = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! let result = Searcher::new(10_000).search(&grid, Side::Ai);
//! assert!(result.next.is_some());
//! assert!(matches!(result.value, Value::MaxWins | Value::MinWins));
//! ```

use crate::board::{Grid, Side};
use crate::rules::{is_blocked, legal_moves, Move};

use super::budget::NodeBudget;

/// Backed-up value of a position. Ordered so that `MinWins < MaxWins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// The player (minimizer) wins
    MinWins,
    /// The AI (maximizer) wins
    MaxWins,
}

impl Value {
    /// Value of a position lost by `side`
    #[inline]
    pub fn loss_for(side: Side) -> Value {
        if side.is_maximizer() {
            Value::MinWins
        } else {
            Value::MaxWins
        }
    }

    /// Side this value declares the winner
    #[inline]
    pub fn winner(self) -> Side {
        match self {
            Value::MaxWins => Side::Ai,
            Value::MinWins => Side::Player,
        }
    }

    /// Strict preference of `side` for `self` over `current`
    #[inline]
    fn improves_on(self, current: Value, side: Side) -> bool {
        if side.is_maximizer() {
            self > current
        } else {
            self < current
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Child positions created (never more than the budget)
    pub nodes: u64,
    /// Leaves where the side to move was blocked
    pub terminal_leaves: u64,
    /// Nodes scored without expansion because the budget ran out
    pub budget_cutoffs: u64,
    /// Moves valued without creating their child because the budget ran out
    pub skipped_moves: u64,
    /// Deepest ply reached below the root
    pub max_depth: u32,
}

impl SearchStats {
    /// Whether the budget cut the search short, making the value inexact
    #[inline]
    pub fn truncated(&self) -> bool {
        self.budget_cutoffs > 0 || self.skipped_moves > 0
    }
}

/// Search result: the backed-up value and the chosen child of the root.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub value: Value,
    /// Move chosen at the root, `None` if the root was not expanded
    pub best_move: Option<Move>,
    /// Position after `best_move`
    pub next: Option<Grid>,
    pub stats: SearchStats,
}

/// Minimax searcher with a per-search node budget.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    budget: u64,
}

impl Searcher {
    pub fn new(budget: u64) -> Self {
        Self { budget }
    }

    #[inline]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Search `grid` with `side` to move, starting from a fresh budget.
    pub fn search(&self, grid: &Grid, side: Side) -> SearchResult {
        let mut budget = NodeBudget::new(self.budget);
        let mut stats = SearchStats::default();

        let (value, best_move) = minimax(grid, side, 0, &mut budget, &mut stats);
        stats.nodes = budget.created();

        let origin = grid.coord(side);
        let next = best_move.map(|m| grid.apply_move(side, m.destination(origin)));
        SearchResult {
            value,
            best_move,
            next,
            stats,
        }
    }
}

/// One search frame. Returns the node's value and, if it was expanded, the
/// chosen move.
fn minimax(
    grid: &Grid,
    side: Side,
    depth: u32,
    budget: &mut NodeBudget,
    stats: &mut SearchStats,
) -> (Value, Option<Move>) {
    stats.max_depth = stats.max_depth.max(depth);

    let origin = grid.coord(side);
    if is_blocked(grid, origin) {
        stats.terminal_leaves += 1;
        return (Value::loss_for(side), None);
    }
    if budget.is_exhausted() {
        stats.budget_cutoffs += 1;
        return (Value::loss_for(side), None);
    }

    let mut best: Option<(Value, Move)> = None;
    for m in legal_moves(grid, origin) {
        let value = if budget.try_take() {
            let child = grid.apply_move(side, m.destination(origin));
            minimax(&child, side.opponent(), depth + 1, budget, stats).0
        } else {
            // Blocked or out of budget, the child scores as the opponent's loss
            stats.skipped_moves += 1;
            Value::loss_for(side.opponent())
        };

        let better = match best {
            Some((current, _)) => value.improves_on(current, side),
            None => true,
        };
        if better {
            best = Some((value, m));
        }
    }

    match best {
        Some((value, m)) => (value, Some(m)),
        // Not blocked means at least one one-step move exists
        None => (Value::loss_for(side), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coord};
    use crate::search::DEFAULT_BUDGET;

    fn grid(text: &str) -> Grid {
        text.parse().expect("valid grid")
    }

    /// AI in a left-hand corridor, player with exactly one move left.
    /// Down walks the AI into a pocket, Up keeps a spare move.
    fn corridor() -> Grid {
        grid(
            "_ X X X
             _ X X X
             A X B _
             _ X X X
             X X X X",
        )
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::MinWins < Value::MaxWins);
        assert_eq!(Value::loss_for(Side::Ai), Value::MinWins);
        assert_eq!(Value::loss_for(Side::Player), Value::MaxWins);
        assert_eq!(Value::MaxWins.winner(), Side::Ai);
        assert_eq!(Value::MinWins.winner(), Side::Player);
    }

    #[test]
    fn test_zero_budget_returns_loss_without_expanding() {
        let g = Grid::new(5, 5, Coord::new(2, 0), Coord::new(2, 4)).unwrap();

        let result = Searcher::new(0).search(&g, Side::Ai);
        assert_eq!(result.value, Value::MinWins);
        assert!(result.best_move.is_none());
        assert!(result.next.is_none());
        assert_eq!(result.stats.nodes, 0);
        assert_eq!(result.stats.budget_cutoffs, 1);

        let result = Searcher::new(0).search(&g, Side::Player);
        assert_eq!(result.value, Value::MaxWins);
        assert!(result.next.is_none());
    }

    #[test]
    fn test_blocked_root_is_terminal() {
        let g = grid(
            "A X _
             X X _
             _ _ B",
        );
        let result = Searcher::new(DEFAULT_BUDGET).search(&g, Side::Ai);
        assert_eq!(result.value, Value::MinWins);
        assert!(result.next.is_none());
        assert_eq!(result.stats.terminal_leaves, 1);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_prefers_winning_move_over_earlier_loss() {
        let g = corridor();
        let result = Searcher::new(DEFAULT_BUDGET).search(&g, Side::Ai);

        assert_eq!(result.value, Value::MaxWins);
        assert_eq!(result.best_move, Some(Move { dx: -1, dy: 0 }));
        let next = result.next.unwrap();
        assert_eq!(next.coord(Side::Ai), Coord::new(1, 0));
        assert_eq!(next.cell(Coord::new(2, 0)), Cell::Unavailable);
        // Down: 2 nodes, Up: 3 nodes, Up x2: 2 nodes
        assert_eq!(result.stats.nodes, 7);
        assert!(!result.stats.truncated());
        assert_eq!(result.stats.max_depth, 4);
    }

    #[test]
    fn test_moves_left_after_budget_back_up_as_wins_for_mover() {
        let g = corridor();

        // Down and its reply use the budget; Up and Up x2 are valued as
        // AI wins without being created, and Up is the first of them.
        let result = Searcher::new(2).search(&g, Side::Ai);
        assert_eq!(result.stats.nodes, 2);
        assert_eq!(result.stats.skipped_moves, 2);
        assert_eq!(result.stats.budget_cutoffs, 0);
        assert!(result.stats.truncated());
        assert_eq!(result.value, Value::MaxWins);
        assert_eq!(result.best_move, Some(Move { dx: -1, dy: 0 }));
        let next = result.next.unwrap();
        assert_eq!(next.coord(Side::Ai), Coord::new(1, 0));
        assert_eq!(next.cell(Coord::new(2, 0)), Cell::Unavailable);
    }

    #[test]
    fn test_moves_left_after_budget_back_up_as_wins_for_minimizer() {
        // Corridor with the sides swapped, player to move
        let g = grid(
            "_ X X X
             _ X X X
             B X A _
             _ X X X
             X X X X",
        );
        let result = Searcher::new(2).search(&g, Side::Player);
        assert_eq!(result.stats.nodes, 2);
        assert_eq!(result.stats.skipped_moves, 2);
        assert_eq!(result.value, Value::MinWins);
        assert_eq!(result.best_move, Some(Move { dx: -1, dy: 0 }));
        assert_eq!(result.next.unwrap().coord(Side::Player), Coord::new(1, 0));
    }

    #[test]
    fn test_budget_spent_inside_first_child() {
        let g = corridor();

        // The player node below Down is scored as a loss for the player,
        // so Down already wins and the skipped moves cannot improve on it.
        let result = Searcher::new(1).search(&g, Side::Ai);
        assert_eq!(result.stats.nodes, 1);
        assert_eq!(result.stats.budget_cutoffs, 1);
        assert_eq!(result.stats.skipped_moves, 2);
        assert_eq!(result.value, Value::MaxWins);
        assert_eq!(result.best_move, Some(Move { dx: 1, dy: 0 }));
    }

    #[test]
    fn test_exactly_filled_budget_reports_cut() {
        let g = corridor();

        // Full tree is 7 children; 5 covers Down and Up, leaving Up x2
        let result = Searcher::new(5).search(&g, Side::Ai);
        assert_eq!(result.stats.nodes, 5);
        assert_eq!(result.stats.budget_cutoffs, 0);
        assert_eq!(result.stats.skipped_moves, 1);
        assert!(result.stats.truncated());
        assert_eq!(result.value, Value::MaxWins);
        assert_eq!(result.best_move, Some(Move { dx: -1, dy: 0 }));

        // Enough for the whole tree: nothing is cut
        let result = Searcher::new(7).search(&g, Side::Ai);
        assert_eq!(result.stats.nodes, 7);
        assert!(!result.stats.truncated());
    }

    #[test]
    fn test_maximizer_tie_keeps_first_move() {
        // Player is already walled in, so every AI move wins
        let g = grid(
            "B X _ _
             X X _ _
             _ _ A _
             _ _ _ _",
        );
        let result = Searcher::new(DEFAULT_BUDGET).search(&g, Side::Ai);
        assert_eq!(result.value, Value::MaxWins);
        assert_eq!(result.best_move, Some(Move { dx: 1, dy: 0 }));
        assert_eq!(result.next.unwrap().coord(Side::Ai), Coord::new(3, 2));
        assert_eq!(result.stats.nodes, 9);
    }

    #[test]
    fn test_minimizer_tie_keeps_first_move() {
        let g = grid(
            "A X _ _
             X X _ _
             _ _ B _
             _ _ _ _",
        );
        let result = Searcher::new(DEFAULT_BUDGET).search(&g, Side::Player);
        assert_eq!(result.value, Value::MinWins);
        assert_eq!(result.best_move, Some(Move { dx: 1, dy: 0 }));
        assert_eq!(result.next.unwrap().coord(Side::Player), Coord::new(3, 2));
    }

    #[test]
    fn test_budget_is_never_exceeded() {
        let g = Grid::new(5, 5, Coord::new(2, 0), Coord::new(2, 4)).unwrap();
        for limit in [1, 2, 3, 7, 16, 17, 100, 1_000, 25_000] {
            for side in [Side::Ai, Side::Player] {
                let result = Searcher::new(limit).search(&g, side);
                assert!(result.stats.nodes <= limit, "limit {limit} exceeded");
                assert!(result.next.is_some());
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let g = grid(
            "_ _ A _
             _ X _ _
             _ _ _ _
             B _ _ X",
        );
        let a = Searcher::new(50_000).search(&g, Side::Ai);
        let b = Searcher::new(50_000).search(&g, Side::Ai);
        assert_eq!(a.value, b.value);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.next, b.next);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_small_board_searched_to_the_end() {
        let g = Grid::new(3, 3, Coord::new(1, 0), Coord::new(1, 2)).unwrap();
        let result = Searcher::new(DEFAULT_BUDGET).search(&g, Side::Ai);
        assert!(result.stats.nodes < DEFAULT_BUDGET);
        assert!(!result.stats.truncated());
        assert!(result.stats.terminal_leaves > 0);
    }
}
