//! Threat detection
//!
//! Every empty cell is tried for the side to move and the whole board is
//! re-evaluated. A cell is a threat when the resulting balance reaches the
//! open-four weight (high) or the open-three weight (medium).

use log::debug;
use serde::Serialize;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_board, Weights};

/// How urgent a threat is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    /// Balance reaches the `three` weight
    Medium,
    /// Balance reaches the `four` weight
    High,
}

/// Cell where a placement creates a threat
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threat {
    pub pos: Pos,
    pub level: ThreatLevel,
    /// Board balance for the threatening color after the placement
    pub score: f32,
}

/// Threats `color` could create with one stone, in row-major order.
///
/// # Arguments
/// * `board` - Board snapshot (left unchanged)
/// * `color` - Black or White
/// * `weights` - Weight per pattern; also supplies the two thresholds
pub fn detect_threats(board: &Board, color: Stone, weights: &Weights) -> Vec<Threat> {
    let mut scratch = board.clone();
    let mut threats = Vec::new();

    for pos in board.empty_positions() {
        scratch.place_stone(pos, color);
        let score = evaluate_board(&scratch, color, weights);
        scratch.remove_stone(pos);

        let level = if score >= weights.four {
            ThreatLevel::High
        } else if score >= weights.three {
            ThreatLevel::Medium
        } else {
            continue;
        };
        threats.push(Threat { pos, level, score });
    }

    debug!("{} threats for {color:?}", threats.len());
    threats
}
