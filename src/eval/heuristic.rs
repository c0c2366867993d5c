//! Pattern scoring for placements and whole boards
//!
//! A placement score only looks at the runs through the scored position;
//! each of the four axes contributes one weight. The board balance sums
//! those scores over every stone.

use crate::board::{Board, Pos, Stone};
use crate::rules::Axis;

use super::patterns::{LinePattern, Weights};

/// Run through a position along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRun {
    /// Same-color stones strictly beyond the position along +axis
    pub forward: usize,
    /// Same-color stones strictly beyond the position along -axis
    pub backward: usize,
    /// Opponent stone right past either end
    pub blocked: bool,
}

impl AxisRun {
    /// Run length including the position itself
    #[inline]
    pub fn total(&self) -> usize {
        self.forward + self.backward + 1
    }

    #[inline]
    pub fn pattern(&self) -> LinePattern {
        LinePattern::classify(self.total(), self.blocked)
    }
}

/// Count consecutive `color` stones from `pos` (exclusive) stepping `(dr, dc)`
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    while board.get_offset(pos, dr, dc, count as i32 + 1) == Some(color) {
        count += 1;
    }
    count
}

/// Measure the run through `pos` along `axis` for `color`.
///
/// The cell at `pos` itself is not inspected.
pub fn scan_axis(board: &Board, pos: Pos, axis: Axis, color: Stone) -> AxisRun {
    let (dr, dc) = axis.delta();
    let opponent = color.opponent();

    let forward = count_direction(board, pos, dr, dc, color);
    let backward = count_direction(board, pos, -dr, -dc, color);

    // Off-board ends read as None and never block
    let forward_end = board.get_offset(pos, dr, dc, forward as i32 + 1);
    let backward_end = board.get_offset(pos, -dr, -dc, backward as i32 + 1);
    let blocked = forward_end == Some(opponent) || backward_end == Some(opponent);

    AxisRun {
        forward,
        backward,
        blocked,
    }
}

/// Score the pattern through `pos` for `color`.
///
/// # Arguments
/// * `board` - Board snapshot, usually already holding `color` at `pos`
/// * `pos` - Scored position (must be on the board)
/// * `color` - Black or White
/// * `weights` - Weight per pattern
///
/// # Returns
/// Sum of the four per-axis pattern weights
#[must_use]
pub fn score(board: &Board, pos: Pos, color: Stone, weights: &Weights) -> f32 {
    Axis::ALL
        .iter()
        .map(|&axis| weights.value(scan_axis(board, pos, axis, color).pattern()))
        .sum()
}

/// Score `color` played at `pos` without touching the caller's board.
#[must_use]
pub fn evaluate_move(board: &Board, pos: Pos, color: Stone, weights: &Weights) -> f32 {
    let placed = board.with_stone(pos, color);
    score(&placed, pos, color, weights)
}

/// Score `color` at `pos` and name the strongest pattern it reaches
pub fn recognize_pattern(
    board: &Board,
    pos: Pos,
    color: Stone,
    weights: &Weights,
) -> (LinePattern, f32) {
    let value = evaluate_move(board, pos, color, weights);
    (weights.pattern_for_score(value), value)
}

/// Whole-board balance for `color`.
///
/// Every `color` stone adds its [`score`], every opponent stone subtracts
/// its own score for the opponent. Empty cells contribute nothing.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone, weights: &Weights) -> f32 {
    debug_assert!(color != Stone::Empty, "evaluate_board needs a player color");
    let opponent = color.opponent();

    let mut total = 0.0f32;
    for pos in board.positions() {
        let stone = board.get(pos);
        if stone == color {
            total += score(board, pos, color, weights);
        } else if stone == opponent {
            total -= score(board, pos, opponent, weights);
        }
    }
    total
}
