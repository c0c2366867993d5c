//! Evaluation module for Gobang placements
//!
//! Pattern recognition along the four axes through a single position,
//! weighted by a caller-supplied [`Weights`] record, plus whole-board
//! balance and centre-weighted position values built on top of it.

pub mod heuristic;
pub mod patterns;
pub mod position;

pub use heuristic::{evaluate_board, evaluate_move, recognize_pattern, scan_axis, score, AxisRun};
pub use patterns::{LinePattern, Weights};
pub use position::{star_points, PositionWeights};
