//! Isolation terminal driver
//!
//! Plays one game against the AI on the terminal. The grid is printed after
//! every move; the player types a destination as `x y` (or `q` to quit).

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use isolation::board::{DEFAULT_COLS, DEFAULT_ROWS, MAX_SIDE};
use isolation::game::DEFAULT_UNAVAILABLE;
use isolation::search::DEFAULT_BUDGET;
use isolation::{
    Coord, GameConfig, GameError, GameObserver, GameResult, GameState, Grid, MoveSource, Side,
    StartOptions,
};

#[derive(Parser)]
#[command(name = "isolation")]
#[command(version, about = "Play isolation against a minimax AI", long_about = None)]
struct Cli {
    /// Grid extent along x
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u8,

    /// Grid extent along y
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u8,

    /// Child positions the AI may create per move
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    budget: u64,

    /// Let the player move first
    #[arg(long)]
    player_first: bool,

    /// AI start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    ai: Option<(i32, i32)>,

    /// Player start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    player: Option<(i32, i32)>,

    /// Cells to mark unavailable before the first move
    #[arg(long, default_value_t = DEFAULT_UNAVAILABLE, allow_hyphen_values = true)]
    unavailable: i32,

    /// Draw random start cells and pre-mark count
    #[arg(long)]
    randomize: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            rows: cli.rows,
            cols: cli.cols,
            budget: cli.budget,
            first: if cli.player_first { Side::Player } else { Side::Ai },
            start: StartOptions {
                ai: cli.ai,
                player: cli.player,
                unavailable: cli.unavailable,
            },
            randomize: cli.randomize,
            seed: cli.seed,
        }
    }
}

fn parse_cell(s: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok((x, y))
}

/// Prints the grid and game events to stdout.
struct TerminalView;

impl GameObserver for TerminalView {
    fn on_update(&mut self, grid: &Grid, player: Coord) {
        println!("\n{grid}Player at {player}");
    }

    fn on_player_destinations(&mut self, destinations: &[Coord]) {
        let cells: Vec<String> = destinations
            .iter()
            .map(|c| format!("{} {}", c.x, c.y))
            .collect();
        println!("Your moves: {}", cells.join(" | "));
    }

    fn on_rejected(&mut self, error: &GameError) {
        println!("Refused: {error}");
    }

    fn on_game_over(&mut self, result: &GameResult) {
        println!("\nGAME OVER: {} wins after {} moves", result.winner, result.moves);
    }
}

/// Reads destinations from stdin, one `x y` pair per line.
struct StdinMoves<R> {
    input: R,
}

impl<R: BufRead> MoveSource for StdinMoves<R> {
    fn next_move(&mut self, _grid: &Grid, _destinations: &[Coord]) -> Option<Coord> {
        loop {
            print!("> ");
            io::stdout().flush().ok()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).ok()? == 0 {
                return None;
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return None;
            }

            let parts: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty())
                .collect();
            match parts.as_slice() {
                [x, y] => match (x.parse::<u8>(), y.parse::<u8>()) {
                    (Ok(x), Ok(y)) if x < MAX_SIDE && y < MAX_SIDE => {
                        return Some(Coord::new(x, y));
                    }
                    _ => println!("Coordinates must be small non-negative numbers"),
                },
                _ => println!("Enter a destination as: x y"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from(Cli::parse());
    let mut game = GameState::from_config(&config)?;

    let mut view = TerminalView;
    let mut moves = StdinMoves {
        input: io::stdin().lock(),
    };

    match game.run(&mut view, &mut moves)? {
        Some(result) => log::info!("{} won in {} moves", result.winner, result.moves),
        None => log::info!("game abandoned"),
    }
    Ok(())
}
