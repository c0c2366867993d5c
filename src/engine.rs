//! Move suggestion combining the core rules and heuristics
//!
//! The engine follows a short priority list for the side to move:
//!
//! 1. **Immediate win**: any cell that completes five in a row
//! 2. **Defense**: block a cell where the opponent would complete five
//! 3. **Local optimum**: best of a seed move and its empty neighbors
//!
//! The engine holds only immutable configuration, so one instance can be
//! shared freely across threads.
//!
//! # Example
//!
//! ```
//! use gobang::{Engine, EngineConfig, Pos, SearchType, Stone};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let mut board = engine.new_board();
//! for c in 4..8 {
//!     board.place_stone(Pos::new(7, c), Stone::Black);
//! }
//!
//! let result = engine.suggest_move(&board, Stone::Black, None).unwrap();
//! assert_eq!(result.best_move, Pos::new(7, 3));
//! assert_eq!(result.search_type, SearchType::ImmediateWin);
//! ```

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::ReplayError;
use crate::eval::{evaluate_board, evaluate_move};
use crate::rules::{check_game_end, Outcome};
use crate::search::{
    analyze_board_situation, detect_threats, find_winning_move, optimize_with_score,
    replay_report, RecordedMove, ReplayReport, SituationReport, Threat,
};

/// Which step of the priority list produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five in a row
    ImmediateWin,
    /// Blocks the opponent's five
    Defense,
    /// Best placement near the seed
    LocalOptimum,
}

/// Suggested move with its placement score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Pattern score of the move for the side to move
    pub score: f32,
    pub search_type: SearchType,
}

/// Decision aid over explicit board snapshots
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Empty board of the configured size
    #[must_use]
    pub fn new_board(&self) -> Board {
        Board::new(self.config.board_size)
    }

    /// Terminal-state check; see [`check_game_end`]
    #[must_use]
    pub fn check_game_end(&self, board: &Board) -> Outcome {
        check_game_end(board)
    }

    /// Score a placement with the configured weights
    #[must_use]
    pub fn evaluate_move(&self, board: &Board, pos: Pos, color: Stone) -> f32 {
        evaluate_move(board, pos, color, &self.config.weights)
    }

    /// Whole-board balance for `color` with the configured weights
    #[must_use]
    pub fn evaluate_board(&self, board: &Board, color: Stone) -> f32 {
        evaluate_board(board, color, &self.config.weights)
    }

    /// Cells where `color` creates a threat; see [`detect_threats`]
    #[must_use]
    pub fn detect_threats(&self, board: &Board, color: Stone) -> Vec<Threat> {
        detect_threats(board, color, &self.config.weights)
    }

    /// Situation report for both colors; see [`analyze_board_situation`]
    #[must_use]
    pub fn analyze(&self, board: &Board) -> SituationReport {
        analyze_board_situation(board, &self.config.weights)
    }

    /// Review a recorded game played on a board of the configured size
    pub fn replay(&self, history: &[RecordedMove]) -> Result<ReplayReport, ReplayError> {
        replay_report(self.config.board_size, history, &self.config.weights)
    }

    /// Suggest a move for `color`.
    ///
    /// # Arguments
    ///
    /// * `board` - Current board snapshot
    /// * `color` - Color to move
    /// * `seed` - Starting point for the local step; defaults to the center,
    ///   or the first empty cell when the center is taken
    ///
    /// # Returns
    ///
    /// `None` only when the board has no empty cell.
    #[must_use]
    pub fn suggest_move(&self, board: &Board, color: Stone, seed: Option<Pos>) -> Option<MoveResult> {
        let first_empty = board.empty_positions().next()?;

        if let Some(pos) = find_winning_move(board, color) {
            debug!("{color:?} wins immediately at {pos}");
            return Some(MoveResult {
                best_move: pos,
                score: self.evaluate_move(board, pos, color),
                search_type: SearchType::ImmediateWin,
            });
        }

        if let Some(pos) = find_winning_move(board, color.opponent()) {
            debug!("{color:?} blocks opponent five at {pos}");
            return Some(MoveResult {
                best_move: pos,
                score: self.evaluate_move(board, pos, color),
                search_type: SearchType::Defense,
            });
        }

        let seed = seed.unwrap_or_else(|| {
            let center = board.center();
            if board.is_empty(center) {
                center
            } else {
                first_empty
            }
        });
        let (best_move, score) = optimize_with_score(
            board,
            seed,
            color,
            &self.config.weights,
            self.config.repetitions,
        );
        Some(MoveResult {
            best_move,
            score,
            search_type: SearchType::LocalOptimum,
        })
    }
}
