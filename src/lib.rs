//! Gobang (five-in-a-row) rules and heuristics engine
//!
//! A stateless library over explicit board snapshots:
//! - Square board of configurable size (up to 255 per side)
//! - 5-in-a-row to win (overlines count), full board without five is a draw
//! - Pattern scoring of a placement along four axes with caller weights
//! - Immediate winning move search and a local neighborhood optimizer
//! - Whole-board balance, threat detection and situation analysis
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move validation, placement, win/draw detection
//! - [`eval`]: Pattern recognition, placement and board scoring
//! - [`search`]: Winning move finder, local optimizer, threats and analysis
//! - [`engine`]: Move suggestion combining the above
//! - [`config`]: TOML-loadable settings
//!
//! # Quick Start
//!
//! ```
//! use gobang::{check_game_end, validate_move, Board, Outcome, Stone};
//!
//! let mut board = Board::new(15);
//! for c in 0..5 {
//!     let mv = validate_move(&board, 7, c, 1).unwrap();
//!     board.place_stone(mv.pos, mv.stone);
//! }
//!
//! match check_game_end(&board) {
//!     Outcome::Win { winner, line } => {
//!         assert_eq!(winner, Stone::Black);
//!         assert_eq!(line.len(), 5);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! Every operation takes a snapshot and returns a new value, so read-only
//! calls may run concurrently on independent boards without locking.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
pub use config::EngineConfig;
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, MoveError, ReplayError, SnapshotIssue};
pub use eval::{evaluate_board, evaluate_move, score, LinePattern, PositionWeights, Weights};
pub use rules::{check_game_end, place, validate_move, Move, Outcome};
pub use search::{
    analyze_board_situation, detect_threats, find_winning_move, optimize, Situation,
    SituationReport, Threat, ThreatLevel,
};
