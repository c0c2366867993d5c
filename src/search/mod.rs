//! Search module for Gobang move suggestions
//!
//! Contains:
//! - Immediate winning move search (brute force over empty cells)
//! - Local optimization of a seed move over its 8-cell neighborhood
//! - Threat detection and whole-board situation analysis
//! - Move quality review and replay reports for recorded games

pub mod analysis;
pub mod local;
pub mod review;
pub mod threats;
pub mod winning;

pub use analysis::{
    analyze_board_situation, find_best_move, BestMove, Situation, SituationReport,
    ADVANTAGE_MARGIN,
};
pub use local::{candidates, optimize, optimize_with_score};
pub use review::{
    analyze_move_quality, replay_report, KeyMoment, MoveQuality, MoveReview, RecordedMove,
    ReplayReport,
};
pub use threats::{detect_threats, Threat, ThreatLevel};
pub use winning::{find_winning_move, winning_moves};
