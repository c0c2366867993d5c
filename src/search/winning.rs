//! Immediate winning move search
//!
//! Brute force: every empty cell is tried in row-major order and the full
//! win detector runs on the result. Up to O(N⁴), fine for boards of a few
//! tens of cells per side when called on demand.

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_game_end, Outcome};

/// First empty cell (row-major) where `color` would complete five in a row.
///
/// A cell only counts when the full board scan reports `color` as the
/// winner afterwards.
pub fn find_winning_move(board: &Board, color: Stone) -> Option<Pos> {
    let mut scratch = board.clone();
    for pos in board.empty_positions() {
        scratch.place_stone(pos, color);
        let outcome = check_game_end(&scratch);
        scratch.remove_stone(pos);

        if matches!(outcome, Outcome::Win { winner, .. } if winner == color) {
            debug!("winning move for {color:?} at {pos}");
            return Some(pos);
        }
    }
    None
}

/// Cells where `color` wins immediately, in row-major order
pub fn winning_moves(board: &Board, color: Stone) -> Vec<Pos> {
    let mut scratch = board.clone();
    board
        .empty_positions()
        .filter(|&pos| {
            scratch.place_stone(pos, color);
            let wins = check_game_end(&scratch).winner() == Some(color);
            scratch.remove_stone(pos);
            wins
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_four_prefers_lower_column() {
        let mut board = Board::new(15);
        for c in 4..8 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert_eq!(find_winning_move(&board, Stone::Black), Some(Pos::new(7, 3)));
        assert_eq!(
            winning_moves(&board, Stone::Black),
            vec![Pos::new(7, 3), Pos::new(7, 8)]
        );
    }

    #[test]
    fn test_closed_four_other_end() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 3), Stone::White);
        for c in 4..8 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert_eq!(find_winning_move(&board, Stone::Black), Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_gap_fill() {
        let mut board = Board::new(15);
        for r in [2, 3, 5, 6] {
            board.place_stone(Pos::new(r, 10), Stone::White);
        }
        assert_eq!(find_winning_move(&board, Stone::White), Some(Pos::new(4, 10)));
    }

    #[test]
    fn test_row_major_tie_break() {
        let mut board = Board::new(15);
        // Vertical four completes at row 4 or 9, the diagonal four at row 2 or 7
        for r in 5..9 {
            board.place_stone(Pos::new(r, 1), Stone::Black);
        }
        for i in 3..7 {
            board.place_stone(Pos::new(i, i + 5), Stone::Black);
        }
        assert_eq!(find_winning_move(&board, Stone::Black), Some(Pos::new(2, 7)));
    }

    #[test]
    fn test_no_winning_move() {
        let mut board = Board::new(15);
        for c in 4..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert_eq!(find_winning_move(&board, Stone::Black), None);
        assert_eq!(find_winning_move(&Board::new(15), Stone::White), None);
        assert!(winning_moves(&board, Stone::Black).is_empty());
    }

    #[test]
    fn test_opponent_four_is_not_ours() {
        let mut board = Board::new(15);
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        assert_eq!(find_winning_move(&board, Stone::Black), None);
        assert_eq!(find_winning_move(&board, Stone::White), Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_board_untouched() {
        let mut board = Board::new(9);
        for c in 0..4 {
            board.place_stone(Pos::new(4, c), Stone::Black);
        }
        let before = board.clone();
        let _ = find_winning_move(&board, Stone::Black);
        assert_eq!(board, before);
    }
}
