//! End-to-end scenarios on the default 5x5 board

use isolation::rules::{is_blocked, legal_destinations};
use isolation::search::{Searcher, DEFAULT_BUDGET};
use isolation::{AIEngine, Cell, Coord, GameError, GameState, Grid, Side, Value};

fn opening() -> Grid {
    Grid::new(5, 5, Coord::new(2, 0), Coord::new(2, 4)).unwrap()
}

fn unavailable_cells(grid: &Grid) -> Vec<Coord> {
    let mut cells = Vec::new();
    for x in 0..grid.rows() {
        for y in 0..grid.cols() {
            let c = Coord::new(x, y);
            if grid.cell(c) == Cell::Unavailable {
                cells.push(c);
            }
        }
    }
    cells
}

#[test]
fn first_ai_search_on_open_board() {
    let grid = opening();
    let result = Searcher::new(DEFAULT_BUDGET).search(&grid, Side::Ai);

    assert!(matches!(result.value, Value::MaxWins | Value::MinWins));
    assert!(result.stats.nodes <= DEFAULT_BUDGET);
    let m = result.best_move.expect("a chosen move");
    let next = result.next.expect("a chosen position");

    let origin = Coord::new(2, 0);
    let dest = next.coord(Side::Ai);
    assert!(legal_destinations(&grid, origin).contains(&dest));
    assert_eq!(next.cell(dest), Cell::Ai);
    assert_eq!(next.coord(Side::Player), Coord::new(2, 4));

    let mut expected = vec![origin];
    if m.is_double() {
        expected.push(Coord::new(
            (i32::from(origin.x) + i32::from(m.dx) / 2) as u8,
            (i32::from(origin.y) + i32::from(m.dy) / 2) as u8,
        ));
    }
    let mut blocked = unavailable_cells(&next);
    blocked.sort_by_key(|c| (c.x, c.y));
    expected.sort_by_key(|c| (c.x, c.y));
    assert_eq!(blocked, expected);
}

#[test]
fn zero_budget_never_expands() {
    let grid = opening();
    for side in [Side::Ai, Side::Player] {
        let result = Searcher::new(0).search(&grid, side);
        assert_eq!(result.value, Value::loss_for(side));
        assert!(result.next.is_none());
        assert_eq!(result.stats.nodes, 0);
    }
}

#[test]
fn rejected_request_keeps_grid_identical() {
    let mut game = GameState::new(opening(), Side::Player, AIEngine::with_budget(1_000));
    let before = *game.grid();
    let text = before.to_string();

    let err = game.try_move_player(Coord::new(4, 1)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalDestination {
            side: Side::Player,
            destination: Coord::new(4, 1)
        }
    );
    assert_eq!(*game.grid(), before);
    assert_eq!(game.grid().to_string(), text);
    assert_eq!(game.current_turn(), Side::Player);
}

#[test]
fn full_game_ends_with_blocked_loser() {
    let mut game = GameState::new(opening(), Side::Ai, AIEngine::with_budget(20_000));

    while game.check_game_over().is_none() {
        match game.current_turn() {
            Side::Ai => {
                game.play_ai_turn().unwrap();
            }
            Side::Player => {
                // Player always takes the last offered destination
                let dest = *game.player_destinations().last().unwrap();
                game.try_move_player(dest).unwrap();
            }
        }
    }

    let result = game.game_over().unwrap();
    let loser = result.winner.opponent();
    assert_eq!(game.current_turn(), loser);
    assert!(is_blocked(game.grid(), game.grid().coord(loser)));
    assert_eq!(result.moves, game.history().len());
    // Every move blocks at least its origin
    assert!(game.grid().unavailable_count() as usize >= result.moves);
}
