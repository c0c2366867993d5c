//! Local move optimization around a seed move
//!
//! A deterministic hill-climb step: the seed and its empty neighbors are
//! scored with [`evaluate_move`] and the best one is kept. There is no
//! randomness, so the repetition count only affects running time.

use log::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_move, Weights};

/// Neighbor offsets `(drow, dcol)` in enumeration order
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Candidate moves: `seed` first, then its on-board empty neighbors.
///
/// The seed is always included, even if occupied.
pub fn candidates(board: &Board, seed: Pos) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(NEIGHBORS.len() + 1);
    moves.push(seed);
    moves.extend(
        NEIGHBORS
            .iter()
            .filter_map(|&(dr, dc)| seed.offset(dr, dc, 1, board.size()))
            .filter(|&pos| board.is_empty(pos)),
    );
    moves
}

/// Mean of `repetitions` evaluations of one candidate.
///
/// Running mean: identical samples leave it exactly equal to one evaluation.
fn mean_score(board: &Board, pos: Pos, color: Stone, weights: &Weights, repetitions: u32) -> f32 {
    let mut mean = 0.0f32;
    for i in 0..repetitions {
        let sample = evaluate_move(board, pos, color, weights);
        mean += (sample - mean) / (i + 1) as f32;
    }
    mean
}

/// Pick the best of `seed` and its neighbors for `color`.
///
/// Only a strictly higher score replaces the current best, so ties go to
/// the earliest candidate and the seed wins every tie. With all-zero
/// weights the seed is returned unchanged.
///
/// # Arguments
/// * `board` - Board snapshot
/// * `seed` - Initial move (must be on the board)
/// * `color` - Color to move
/// * `weights` - Pattern weights
/// * `repetitions` - Evaluations averaged per candidate, at least 1
pub fn optimize(
    board: &Board,
    seed: Pos,
    color: Stone,
    weights: &Weights,
    repetitions: u32,
) -> Pos {
    debug_assert!(repetitions >= 1, "repetitions must be at least 1");

    let mut best_score = f32::NEG_INFINITY;
    let mut best_move = seed;
    for pos in candidates(board, seed) {
        let score = mean_score(board, pos, color, weights, repetitions);
        trace!("candidate {pos} scores {score}");
        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    debug!("local optimum around {seed}: {best_move} ({best_score})");
    best_move
}

/// Like [`optimize`], also returning the winning candidate's score
pub fn optimize_with_score(
    board: &Board,
    seed: Pos,
    color: Stone,
    weights: &Weights,
    repetitions: u32,
) -> (Pos, f32) {
    let best = optimize(board, seed, color, weights, repetitions);
    (best, evaluate_move(board, best, color, weights))
}
