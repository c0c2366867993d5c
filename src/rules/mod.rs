//! Game rules for Gobang
//!
//! This module implements the rule set:
//! - Move validation and placement
//! - Win conditions (5-in-a-row) and draw detection
//! - Consistency checks for externally supplied snapshots

pub mod audit;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use audit::audit_snapshot;
pub use validate::{place, play, validate_move, Move};
pub use win::{check_game_end, find_five, windows, winning_lines, Axis, GameEndReport, Line, Outcome};
