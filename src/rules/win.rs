//! Win and draw detection
//!
//! A game ends when five equal stones line up on any axis, or when the board
//! fills up without such a line. Candidate lines are enumerated as fixed
//! 5-cell windows in a deterministic priority order:
//!
//! 1. Horizontal: row ascending, then start column ascending
//! 2. Vertical: column ascending, then start row ascending
//! 3. Diagonal ↘: start row ascending, then start column ascending
//! 4. Diagonal ↙: start row ascending, then start column descending
//!
//! The first winning window in that order is the one reported, so a run
//! longer than five is reported through its first matching window.

use serde::Serialize;

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Five collinear positions
pub type Line = [Pos; WIN_LENGTH];

/// Line axes, in scan priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Step `(drow, dcol)` along the axis
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }

    /// All windows on this axis for a `size` x `size` board, in scan order.
    ///
    /// Boards smaller than [`WIN_LENGTH`] have no windows.
    pub fn windows(self, size: usize) -> impl Iterator<Item = Line> + Clone {
        // Number of window starts along the axis direction
        let span = (size + 1).saturating_sub(WIN_LENGTH);
        let (outer, inner) = match self {
            Axis::Horizontal | Axis::Vertical => (if span == 0 { 0 } else { size }, span),
            Axis::DiagonalDown | Axis::DiagonalUp => (span, span),
        };
        (0..outer * inner).map(move |k| self.window_at(size, k / inner, k % inner))
    }

    fn window_at(self, size: usize, outer: usize, inner: usize) -> Line {
        let (row, col) = match self {
            Axis::Horizontal => (outer, inner),
            Axis::Vertical => (inner, outer),
            Axis::DiagonalDown => (outer, inner),
            Axis::DiagonalUp => (outer, size - 1 - inner),
        };
        let (dr, dc) = self.delta();
        std::array::from_fn(|k| {
            let k = k as i32;
            Pos::new(
                (row as i32 + dr * k) as u8,
                (col as i32 + dc * k) as u8,
            )
        })
    }
}

/// Every 5-cell window of a `size` x `size` board in scan priority order
pub fn windows(size: usize) -> impl Iterator<Item = Line> + Clone {
    Axis::ALL.into_iter().flat_map(move |axis| axis.windows(size))
}

/// Terminal-state classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win { winner: Stone, line: Line },
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_end(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    #[inline]
    pub fn line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Flat report: end flag, winner code (0 for none/draw), line coordinates
    pub fn report(&self) -> GameEndReport {
        GameEndReport {
            is_end: self.is_end(),
            winner: self.winner().map_or(0, Stone::code),
            win_line: self
                .line()
                .map(|line| line.iter().map(|p| (p.row, p.col)).collect())
                .unwrap_or_default(),
        }
    }
}

/// Plain-data form of an [`Outcome`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEndReport {
    pub is_end: bool,
    pub winner: u8,
    pub win_line: Vec<(u8, u8)>,
}

/// Color owning the window if all five cells hold the same stone
#[inline]
fn window_owner(board: &Board, line: &Line) -> Option<Stone> {
    let first = board.get(line[0]);
    if first == Stone::Empty {
        return None;
    }
    line[1..].iter().all(|&p| board.get(p) == first).then_some(first)
}

/// First winning window in scan priority order
pub fn find_five(board: &Board) -> Option<(Stone, Line)> {
    windows(board.size()).find_map(|line| window_owner(board, &line).map(|stone| (stone, line)))
}

/// All winning windows in scan priority order
pub fn winning_lines(board: &Board) -> Vec<(Stone, Line)> {
    windows(board.size())
        .filter_map(|line| window_owner(board, &line).map(|stone| (stone, line)))
        .collect()
}

/// Classify the board as won, drawn or still in progress.
///
/// O(N²); meant for on-demand calls after a placement.
pub fn check_game_end(board: &Board) -> Outcome {
    if let Some((winner, line)) = find_five(board) {
        return Outcome::Win { winner, line };
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
