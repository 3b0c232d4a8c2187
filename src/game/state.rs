//! Turn controller
//!
//! Two states: the AI to move or the player to move. On entering either
//! state the side to move is checked for being blocked; if it is, the game
//! is over. The AI moves by search, the player by an external destination
//! that is validated against the move generator before it is applied.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Coord, Grid, Side};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, Result};
use crate::rules::{check_winner, legal_destinations};

use super::observer::{GameObserver, MoveSource};
use super::setup::{build_initial_grid, StartOptions};

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    /// Moves played by both sides
    pub moves: usize,
}

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Coord,
    pub to: Coord,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    current_turn: Side,
    game_over: Option<GameResult>,
    move_history: Vec<MoveRecord>,
    last_ai_result: Option<MoveResult>,
    engine: AIEngine,
}

impl GameState {
    pub fn new(grid: Grid, first: Side, engine: AIEngine) -> Self {
        Self {
            grid,
            current_turn: first,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            engine,
        }
    }

    /// Validate `config`, build the initial position and the engine.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let options = if config.randomize {
            StartOptions::randomized(config.rows, config.cols, &mut rng)
        } else {
            config.start
        };

        let grid = build_initial_grid(config.rows, config.cols, &options, &mut rng)?;
        log::debug!("initial grid:\n{grid}");
        Ok(Self::new(
            grid,
            config.first,
            AIEngine::with_budget(config.budget),
        ))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    #[inline]
    pub fn game_over(&self) -> Option<GameResult> {
        self.game_over
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn is_player_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == Side::Player
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == Side::Ai
    }

    /// Check whether the side to move is blocked and record the result.
    pub fn check_game_over(&mut self) -> Option<GameResult> {
        if self.game_over.is_none() {
            if let Some(winner) = check_winner(&self.grid, self.current_turn) {
                let result = GameResult {
                    winner,
                    moves: self.move_history.len(),
                };
                log::info!("{} is blocked, {} wins", self.current_turn, winner);
                self.game_over = Some(result);
            }
        }
        self.game_over
    }

    /// Destinations the player may choose, empty unless it is their turn.
    pub fn player_destinations(&self) -> Vec<Coord> {
        if !self.is_player_turn() {
            return Vec::new();
        }
        legal_destinations(&self.grid, self.grid.coord(Side::Player))
    }

    /// Run one AI turn: search with a fresh budget and adopt its choice.
    pub fn play_ai_turn(&mut self) -> Result<&MoveResult> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != Side::Ai {
            return Err(GameError::NotAiTurn);
        }
        if self.check_game_over().is_some() {
            return Err(GameError::GameOver);
        }

        let result = self.engine.get_move_with_stats(&self.grid);
        let next = result.next.ok_or(GameError::NoMoveFound)?;

        let from = self.grid.coord(Side::Ai);
        let to = next.coord(Side::Ai);
        self.grid = next;
        self.record(Side::Ai, from, to);
        log::debug!("A.I. moved:\n{}", self.grid);

        Ok(&*self.last_ai_result.insert(result))
    }

    /// Attempt to move the player to `destination`.
    ///
    /// Requests outside the player's turn or for a destination the move
    /// generator does not offer are refused and leave the state unchanged.
    pub fn try_move_player(&mut self, destination: Coord) -> Result<()> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != Side::Player {
            log::warn!("player move to {destination} refused: not the player's turn");
            return Err(GameError::NotPlayerTurn);
        }
        if self.check_game_over().is_some() {
            return Err(GameError::GameOver);
        }

        let from = self.grid.coord(Side::Player);
        if !legal_destinations(&self.grid, from).contains(&destination) {
            log::warn!("player move {from} -> {destination} refused: illegal destination");
            return Err(GameError::IllegalDestination {
                side: Side::Player,
                destination,
            });
        }

        self.grid = self.grid.apply_move(Side::Player, destination);
        self.record(Side::Player, from, destination);
        log::debug!("Player moved:\n{}", self.grid);
        Ok(())
    }

    /// Drive the game until one side is blocked or the move source closes.
    ///
    /// Returns the result, or `None` if the move source gave up first.
    pub fn run<O, S>(&mut self, observer: &mut O, source: &mut S) -> Result<Option<GameResult>>
    where
        O: GameObserver + ?Sized,
        S: MoveSource + ?Sized,
    {
        observer.on_update(&self.grid, self.grid.coord(Side::Player));

        loop {
            observer.on_interaction_disabled();
            if let Some(result) = self.check_game_over() {
                observer.on_game_over(&result);
                return Ok(Some(result));
            }

            match self.current_turn {
                Side::Ai => {
                    self.play_ai_turn()?;
                }
                Side::Player => {
                    let destinations = self.player_destinations();
                    observer.on_player_destinations(&destinations);
                    loop {
                        let Some(destination) = source.next_move(&self.grid, &destinations) else {
                            log::info!("move source closed, leaving game");
                            return Ok(None);
                        };
                        match self.try_move_player(destination) {
                            Ok(()) => break,
                            Err(e @ GameError::IllegalDestination { .. }) => {
                                observer.on_rejected(&e);
                            }
                            Err(e) => return Err(e),
                        }
                    }
                }
            }

            observer.on_update(&self.grid, self.grid.coord(Side::Player));
        }
    }

    fn record(&mut self, side: Side, from: Coord, to: Coord) {
        log::info!("{side} moves {from} -> {to}");
        self.move_history.push(MoveRecord { side, from, to });
        self.current_turn = side.opponent();
    }
}
