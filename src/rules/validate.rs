//! Move validation and placement

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;

/// A move that passed [`validate_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Check a raw move against the board.
///
/// Checks run in a fixed order: bounds, then occupancy, then the player
/// code, so a move failing several checks reports the first one.
///
/// # Arguments
/// * `board` - Board snapshot
/// * `row`, `col` - Raw coordinates, possibly off the board
/// * `player` - Player code, `1` or `2`
pub fn validate_move(board: &Board, row: i32, col: i32, player: i32) -> Result<Move, MoveError> {
    if !board.contains(row, col) {
        return Err(MoveError::OutOfBounds {
            row,
            col,
            size: board.size(),
        });
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied {
            row: pos.row,
            col: pos.col,
        });
    }
    let stone = Stone::player(player).ok_or(MoveError::InvalidPlayer { player })?;
    Ok(Move { pos, stone })
}

/// Copy of `board` with `stone` at `pos`.
///
/// No validation is performed; `pos` must be on the board.
#[inline]
#[must_use]
pub fn place(board: &Board, pos: Pos, stone: Stone) -> Board {
    board.with_stone(pos, stone)
}

/// Validate a raw move and apply it to an owned board
pub fn play(board: &mut Board, row: i32, col: i32, player: i32) -> Result<Move, MoveError> {
    let mv = validate_move(board, row, col, player)?;
    board.place_stone(mv.pos, mv.stone);
    Ok(mv)
}
