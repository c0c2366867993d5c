//! Error types for the engine boundary

use std::path::PathBuf;

/// Why a move was rejected by [`crate::rules::validate_move`].
///
/// Rejections are routine outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("invalid player code {player} (expected 1 or 2)")]
    InvalidPlayer { player: i32 },
}

impl MoveError {
    /// Short reason code for callers that only pass strings around
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "invalid_position",
            MoveError::Occupied { .. } => "occupied",
            MoveError::InvalidPlayer { .. } => "invalid_player",
        }
    }
}

/// Errors that can occur when building a board from raw rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board size {size} exceeds the supported maximum")]
    TooLarge { size: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("cell ({row}, {col}) holds invalid value {value}")]
    InvalidCell { row: usize, col: usize, value: i32 },
}

/// Inconsistencies found by [`crate::rules::audit_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotIssue {
    #[error("piece count mismatch: black={black}, white={white}")]
    PieceCountMismatch { black: u32, white: u32 },

    #[error("board has {0} winning lines")]
    MultipleWinLines(usize),
}

/// Why a recorded game could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("move history is empty")]
    EmptyHistory,

    #[error("move {index} rejected: {source}")]
    InvalidMove { index: usize, source: MoveError },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::InvalidMove {
            index: 3,
            source: MoveError::Occupied { row: 7, col: 7 },
        };
        assert_eq!(err.to_string(), "move 3 rejected: position (7, 7) is already occupied");
        assert_eq!(ReplayError::EmptyHistory.to_string(), "move history is empty");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { row: -1, col: 3, size: 15 };
        assert_eq!(err.to_string(), "position (-1, 3) is outside the 15x15 board");
        assert_eq!(err.code(), "invalid_position");

        let err = MoveError::Occupied { row: 7, col: 7 };
        assert_eq!(err.to_string(), "position (7, 7) is already occupied");
        assert_eq!(err.code(), "occupied");

        let err = MoveError::InvalidPlayer { player: 0 };
        assert_eq!(err.to_string(), "invalid player code 0 (expected 1 or 2)");
        assert_eq!(err.code(), "invalid_player");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::NotSquare { row: 2, len: 14, expected: 15 };
        assert_eq!(err.to_string(), "row 2 has 14 cells, expected 15");
    }

    #[test]
    fn test_snapshot_issue_display() {
        let err = SnapshotIssue::PieceCountMismatch { black: 4, white: 1 };
        assert_eq!(err.to_string(), "piece count mismatch: black=4, white=1");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("repetitions must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: repetitions must be >= 1");
    }
}
