//! Move quality review and game replay reports
//!
//! A move's quality on a 0..=100 scale blends three terms:
//! half its pattern score, twenty times its position weight, and 0.3 times
//! the change it causes in the whole-board balance. A replay walks a recorded
//! game move by move, reviewing each move and tracking threats.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::error::ReplayError;
use crate::eval::{evaluate_board, recognize_pattern, LinePattern, PositionWeights, Weights};
use crate::rules::validate_move;

use super::analysis::{analyze_board_situation, find_best_move, BestMove, Situation};

/// Quality at or above which a move counts as strong
pub const HIGH_QUALITY: f32 = 85.0;

/// Quality below which a move counts as weak
pub const LOW_QUALITY: f32 = 60.0;

/// Quality below which a move may be flagged as a bad key move
pub const BAD_MOVE_QUALITY: f32 = 50.0;

/// Minimum lead of the best alternative for a bad key move
pub const BAD_MOVE_GAP: f32 = 30.0;

/// Review of a single placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveQuality {
    pub pos: Pos,
    pub pattern: LinePattern,
    pub pattern_score: f32,
    pub position_weight: f32,
    /// Change in the mover's board balance
    pub impact: f32,
    /// Blended quality in 0..=100
    pub quality: f32,
    pub best_move: Option<BestMove>,
    /// Best alternative's rating minus `quality`
    pub quality_gap: f32,
}

/// Review `color` playing at empty `pos` on `board`.
///
/// # Arguments
/// * `board` - Board before the move (left unchanged)
/// * `pos` - Reviewed move (must be on the board)
/// * `color` - Black or White
/// * `weights` - Weight per pattern
/// * `positions` - Position values for the board size
pub fn analyze_move_quality(
    board: &Board,
    pos: Pos,
    color: Stone,
    weights: &Weights,
    positions: &PositionWeights,
) -> MoveQuality {
    let (pattern, pattern_score) = recognize_pattern(board, pos, color, weights);
    let position_weight = positions.get(pos);

    let before = evaluate_board(board, color, weights);
    let after = evaluate_board(&board.with_stone(pos, color), color, weights);
    let impact = after - before;

    let quality = (pattern_score * 0.5 + position_weight * 20.0 + impact * 0.3).clamp(0.0, 100.0);
    let best_move = find_best_move(board, color, weights, positions);
    let best_rating = best_move.map_or(0.0, |m| m.rating);

    MoveQuality {
        pos,
        pattern,
        pattern_score,
        position_weight,
        impact,
        quality,
        best_move,
        quality_gap: best_rating - quality,
    }
}

/// One move of a recorded game, in raw snapshot codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub row: i32,
    pub col: i32,
    pub player: i32,
}

/// Per-move entry of a replay report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveReview {
    /// 1-based move number
    pub index: usize,
    pub color: Stone,
    pub review: MoveQuality,
    /// Threat counts and verdict once the move is on the board
    pub black_threats: usize,
    pub white_threats: usize,
    pub situation: Situation,
}

/// Turning point in a replayed game
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyMoment {
    /// Black gained threats with this move
    BlackThreatIncrease { index: usize, threats: usize },
    /// White gained threats with this move
    WhiteThreatIncrease { index: usize, threats: usize },
    /// Weak move while a much better one was available
    BadKeyMove {
        index: usize,
        quality: f32,
        best_move: Option<Pos>,
    },
}

/// Summary of a replayed game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub total_moves: usize,
    pub average_quality: f32,
    /// Percentage of moves at or above [`HIGH_QUALITY`]
    pub high_quality_rate: f32,
    /// Moves below [`LOW_QUALITY`]
    pub low_quality_count: usize,
    /// Most frequent move pattern; earliest seen wins ties
    pub most_common_pattern: LinePattern,
    pub moves: Vec<MoveReview>,
    pub key_moments: Vec<KeyMoment>,
}

/// Replay `history` on an empty `size` x `size` board.
///
/// Every move is validated before it is applied; the first rejected move
/// aborts the replay with its 0-based position in `history`.
pub fn replay_report(
    size: usize,
    history: &[RecordedMove],
    weights: &Weights,
) -> Result<ReplayReport, ReplayError> {
    if history.is_empty() {
        return Err(ReplayError::EmptyHistory);
    }

    let positions = PositionWeights::new(size);
    let mut board = Board::new(size);
    let mut moves = Vec::with_capacity(history.len());

    for (i, recorded) in history.iter().enumerate() {
        let mv = validate_move(&board, recorded.row, recorded.col, recorded.player)
            .map_err(|source| ReplayError::InvalidMove { index: i, source })?;

        let review = analyze_move_quality(&board, mv.pos, mv.stone, weights, &positions);
        board.place_stone(mv.pos, mv.stone);
        let situation = analyze_board_situation(&board, weights);

        moves.push(MoveReview {
            index: i + 1,
            color: mv.stone,
            review,
            black_threats: situation.black_threats.len(),
            white_threats: situation.white_threats.len(),
            situation: situation.situation,
        });
    }

    let total = moves.len();
    let average_quality = moves.iter().map(|m| m.review.quality).sum::<f32>() / total as f32;
    let high = moves.iter().filter(|m| m.review.quality >= HIGH_QUALITY).count();
    let low_quality_count = moves.iter().filter(|m| m.review.quality < LOW_QUALITY).count();
    let key_moments = key_moments(&moves);
    debug!("replayed {total} moves, {} key moments", key_moments.len());

    Ok(ReplayReport {
        total_moves: total,
        average_quality,
        high_quality_rate: high as f32 / total as f32 * 100.0,
        low_quality_count,
        most_common_pattern: most_common_pattern(&moves),
        moves,
        key_moments,
    })
}

fn most_common_pattern(moves: &[MoveReview]) -> LinePattern {
    let mut counts: Vec<(LinePattern, usize)> = Vec::new();
    for m in moves {
        match counts.iter_mut().find(|(p, _)| *p == m.review.pattern) {
            Some((_, n)) => *n += 1,
            None => counts.push((m.review.pattern, 1)),
        }
    }

    let mut best = (LinePattern::One, 0);
    for (pattern, n) in counts {
        if n > best.1 {
            best = (pattern, n);
        }
    }
    best.0
}

/// Threat increases against the previous move, then weak moves
fn key_moments(moves: &[MoveReview]) -> Vec<KeyMoment> {
    let mut found = Vec::new();
    for (i, m) in moves.iter().enumerate() {
        if i > 0 {
            let prev = &moves[i - 1];
            if m.black_threats > prev.black_threats {
                found.push(KeyMoment::BlackThreatIncrease {
                    index: m.index,
                    threats: m.black_threats,
                });
            } else if m.white_threats > prev.white_threats {
                found.push(KeyMoment::WhiteThreatIncrease {
                    index: m.index,
                    threats: m.white_threats,
                });
            }
        }

        if m.review.quality < BAD_MOVE_QUALITY && m.review.quality_gap > BAD_MOVE_GAP {
            found.push(KeyMoment::BadKeyMove {
                index: m.index,
                quality: m.review.quality,
                best_move: m.review.best_move.map(|b| b.pos),
            });
        }
    }
    found
}
