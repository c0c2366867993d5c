//! Consistency checks for board snapshots received from outside

use crate::board::{Board, Stone};
use crate::error::SnapshotIssue;

use super::win::winning_lines;

/// Check that a snapshot could have come from alternating play.
///
/// Black and White stone counts may differ by at most one, and at most one
/// winning window may be present.
pub fn audit_snapshot(board: &Board) -> Result<(), SnapshotIssue> {
    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);
    if black.abs_diff(white) > 1 {
        return Err(SnapshotIssue::PieceCountMismatch { black, white });
    }

    let lines = winning_lines(board).len();
    if lines > 1 {
        return Err(SnapshotIssue::MultipleWinLines(lines));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_passes() {
        assert_eq!(audit_snapshot(&Board::new(15)), Ok(()));
    }

    #[test]
    fn test_count_mismatch() {
        let board = Board::from_rows(&[[1, 1, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(
            audit_snapshot(&board),
            Err(SnapshotIssue::PieceCountMismatch { black: 2, white: 0 })
        );
    }

    #[test]
    fn test_single_five_passes() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        board.remove_stone(Pos::new(9, 4));
        assert_eq!(audit_snapshot(&board), Ok(()));
    }

    #[test]
    fn test_overline_counts_twice() {
        let mut board = Board::new(15);
        for i in 0..6 {
            board.place_stone(Pos::new(7, i), Stone::Black);
            board.place_stone(Pos::new(12, 2 * i), Stone::White);
        }
        assert_eq!(audit_snapshot(&board), Err(SnapshotIssue::MultipleWinLines(2)));
    }
}
