//! Gobang engine CLI
//!
//! Runs single engine operations against a board snapshot given as a JSON
//! file of rows (`0` empty, `1` black, `2` white).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use gobang::eval::recognize_pattern;
use gobang::rules::{audit_snapshot, play};
use gobang::search::RecordedMove;
use gobang::{
    check_game_end, find_winning_move, optimize, validate_move, Board, Engine, EngineConfig, Pos,
    Stone,
};

#[derive(Parser)]
#[command(name = "gobang", about = "Five-in-a-row rules and heuristics engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gobang.toml", global = true)]
    config: PathBuf,

    /// Board snapshot as JSON rows; an empty board of the configured size if omitted
    #[arg(long, global = true)]
    board: Option<PathBuf>,

    /// Log engine decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the board
    Show,
    /// Check a move without playing it
    Validate {
        #[arg(long, allow_negative_numbers = true)]
        row: i32,
        #[arg(long, allow_negative_numbers = true)]
        col: i32,
        #[arg(long, allow_negative_numbers = true)]
        player: i32,
    },
    /// Validate a move, apply it and print the new board as JSON
    Play {
        #[arg(long, allow_negative_numbers = true)]
        row: i32,
        #[arg(long, allow_negative_numbers = true)]
        col: i32,
        #[arg(long, allow_negative_numbers = true)]
        player: i32,
    },
    /// Report win/draw state as JSON
    Outcome,
    /// Score a placement with the configured weights
    Score {
        #[arg(long)]
        row: u8,
        #[arg(long)]
        col: u8,
        #[arg(long)]
        color: i32,
    },
    /// Whole-board balance for one color
    Evaluate {
        #[arg(long)]
        color: i32,
    },
    /// List threat cells for one color as JSON
    Threats {
        #[arg(long)]
        color: i32,
    },
    /// Situation report for both colors as JSON
    Analyze,
    /// Review a recorded game given as a JSON list of {row, col, player}
    Replay {
        #[arg(long)]
        moves: PathBuf,
    },
    /// Find a cell that wins immediately
    FindWin {
        #[arg(long)]
        color: i32,
    },
    /// Best of a seed move and its neighbors
    Optimize {
        #[arg(long)]
        row: u8,
        #[arg(long)]
        col: u8,
        #[arg(long)]
        color: i32,
        /// Overrides the configured repetitions
        #[arg(long)]
        repetitions: Option<u32>,
    },
    /// Suggest a move: win, block, or local optimum
    Suggest {
        #[arg(long)]
        color: i32,
        #[arg(long, requires = "col")]
        row: Option<u8>,
        #[arg(long, requires = "row")]
        col: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let board = load_board(cli.board.as_ref(), &config)?;
    if let Err(issue) = audit_snapshot(&board) {
        log::warn!("suspicious snapshot: {issue}");
    }
    let engine = Engine::new(config);

    match cli.command {
        Command::Show => print!("{board}"),
        Command::Validate { row, col, player } => match validate_move(&board, row, col, player) {
            Ok(mv) => println!("ok {} {:?}", mv.pos, mv.stone),
            Err(err) => println!("{}: {err}", err.code()),
        },
        Command::Play { row, col, player } => {
            let mut board = board;
            play(&mut board, row, col, player)?;
            println!("{}", serde_json::to_string(&board)?);
        }
        Command::Outcome => {
            let report = check_game_end(&board).report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Score { row, col, color } => {
            let pos = on_board(&board, row, col)?;
            let stone = player(color)?;
            let (pattern, value) = recognize_pattern(&board, pos, stone, &engine.config().weights);
            println!("{value} {pattern:?}");
        }
        Command::Evaluate { color } => {
            println!("{}", engine.evaluate_board(&board, player(color)?));
        }
        Command::Threats { color } => {
            let threats = engine.detect_threats(&board, player(color)?);
            println!("{}", serde_json::to_string_pretty(&threats)?);
        }
        Command::Analyze => {
            println!("{}", serde_json::to_string_pretty(&engine.analyze(&board))?);
        }
        Command::Replay { moves } => {
            let content = std::fs::read_to_string(&moves)
                .with_context(|| format!("reading moves from {}", moves.display()))?;
            let history: Vec<RecordedMove> = serde_json::from_str(&content)
                .with_context(|| format!("parsing moves {}", moves.display()))?;
            let report = engine.replay(&history)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::FindWin { color } => match find_winning_move(&board, player(color)?) {
            Some(pos) => println!("{pos}"),
            None => println!("none"),
        },
        Command::Optimize {
            row,
            col,
            color,
            repetitions,
        } => {
            let seed = on_board(&board, row, col)?;
            let repetitions = repetitions.unwrap_or(engine.config().repetitions);
            if repetitions == 0 {
                bail!("repetitions must be >= 1");
            }
            let best = optimize(&board, seed, player(color)?, &engine.config().weights, repetitions);
            println!("{best}");
        }
        Command::Suggest { color, row, col } => {
            let seed = match (row, col) {
                (Some(row), Some(col)) => Some(on_board(&board, row, col)?),
                _ => None,
            };
            match engine.suggest_move(&board, player(color)?, seed) {
                Some(result) => println!(
                    "{} {:?} score={}",
                    result.best_move, result.search_type, result.score
                ),
                None => println!("none"),
            }
        }
    }
    Ok(())
}

fn load_board(path: Option<&PathBuf>, config: &EngineConfig) -> Result<Board> {
    let Some(path) = path else {
        return Ok(Board::new(config.board_size));
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing board {}", path.display()))
}

fn on_board(board: &Board, row: u8, col: u8) -> Result<Pos> {
    if !board.contains(i32::from(row), i32::from(col)) {
        bail!("({row}, {col}) is outside the {0}x{0} board", board.size());
    }
    Ok(Pos::new(row, col))
}

fn player(code: i32) -> Result<Stone> {
    Stone::player(code).with_context(|| format!("invalid color {code} (expected 1 or 2)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_player_reaches_validator() {
        let cli = Cli::try_parse_from([
            "gobang", "validate", "--row", "0", "--col", "0", "--player", "-1",
        ])
        .unwrap();
        match cli.command {
            Command::Validate { row, col, player } => assert_eq!((row, col, player), (0, 0, -1)),
            _ => panic!("expected validate"),
        }

        let cli = Cli::try_parse_from([
            "gobang", "play", "--row", "-2", "--col", "3", "--player", "-7",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { row: -2, col: 3, player: -7 }
        ));
    }

    #[test]
    fn test_replay_and_analysis_subcommands() {
        let cli = Cli::try_parse_from(["gobang", "replay", "--moves", "game.json"]).unwrap();
        assert!(matches!(cli.command, Command::Replay { .. }));
        let cli = Cli::try_parse_from(["gobang", "threats", "--color", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Threats { color: 2 }));
        assert!(Cli::try_parse_from(["gobang", "analyze"]).is_ok());
    }
}
