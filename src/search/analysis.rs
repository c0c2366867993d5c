//! Board situation analysis
//!
//! Combines whole-board balance, threat detection and a position-weighted
//! best move for both colors into a single report.

use log::debug;
use serde::Serialize;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_board, evaluate_move, PositionWeights, Weights};

use super::threats::{detect_threats, Threat, ThreatLevel};

/// Balance gap above which one side is considered ahead
pub const ADVANTAGE_MARGIN: f32 = 50.0;

/// Overall verdict on a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    /// Black has a high threat or several threats
    BlackAttack,
    /// White has a high threat or several threats
    WhiteAttack,
    /// Black leads the balance by more than [`ADVANTAGE_MARGIN`]
    BlackAdvantage,
    /// White leads the balance by more than [`ADVANTAGE_MARGIN`]
    WhiteAdvantage,
    Balanced,
}

impl Situation {
    /// Classify from each side's threats and the black-minus-white gap.
    ///
    /// Black's threats are checked before White's, then the gap.
    pub fn classify(black_threats: &[Threat], white_threats: &[Threat], score_gap: f32) -> Self {
        let attacking = |threats: &[Threat]| {
            threats.len() >= 2 || threats.iter().any(|t| t.level == ThreatLevel::High)
        };

        if attacking(black_threats) {
            Situation::BlackAttack
        } else if attacking(white_threats) {
            Situation::WhiteAttack
        } else if score_gap > ADVANTAGE_MARGIN {
            Situation::BlackAdvantage
        } else if score_gap < -ADVANTAGE_MARGIN {
            Situation::WhiteAdvantage
        } else {
            Situation::Balanced
        }
    }
}

/// Best placement for one color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestMove {
    pub pos: Pos,
    /// Position-weighted score as a percentage of the `five` weight, in 0..=100
    pub rating: f32,
}

/// Empty cell maximising `evaluate_move * position weight` for `color`.
///
/// Ties go to the first cell in row-major order. Returns `None` on a full
/// board. The rating is 0 when the `five` weight is not positive.
pub fn find_best_move(
    board: &Board,
    color: Stone,
    weights: &Weights,
    positions: &PositionWeights,
) -> Option<BestMove> {
    let mut best: Option<(Pos, f32)> = None;
    for pos in board.empty_positions() {
        let value = evaluate_move(board, pos, color, weights) * positions.get(pos);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((pos, value));
        }
    }

    best.map(|(pos, value)| {
        let rating = if weights.five > 0.0 {
            (value / weights.five * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        BestMove { pos, rating }
    })
}

/// Situation report for both colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SituationReport {
    pub black_score: f32,
    pub white_score: f32,
    /// `black_score - white_score`
    pub score_gap: f32,
    pub black_threats: Vec<Threat>,
    pub white_threats: Vec<Threat>,
    pub black_best_move: Option<BestMove>,
    pub white_best_move: Option<BestMove>,
    pub situation: Situation,
}

/// Analyze `board` from both sides.
///
/// # Arguments
/// * `board` - Board snapshot (left unchanged)
/// * `weights` - Weight per pattern
pub fn analyze_board_situation(board: &Board, weights: &Weights) -> SituationReport {
    let positions = PositionWeights::new(board.size());

    let black_score = evaluate_board(board, Stone::Black, weights);
    let white_score = evaluate_board(board, Stone::White, weights);
    let score_gap = black_score - white_score;

    let black_threats = detect_threats(board, Stone::Black, weights);
    let white_threats = detect_threats(board, Stone::White, weights);
    let situation = Situation::classify(&black_threats, &white_threats, score_gap);
    debug!("situation {situation:?}, gap {score_gap}");

    SituationReport {
        black_score,
        white_score,
        score_gap,
        black_best_move: find_best_move(board, Stone::Black, weights, &positions),
        white_best_move: find_best_move(board, Stone::White, weights, &positions),
        black_threats,
        white_threats,
        situation,
    }
}
