//! Square game board of configurable size

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Game board snapshot
///
/// Serializes as rows of cell codes (`0` empty, `1` black, `2` white) so a
/// snapshot can be handed over as plain JSON or TOML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Panics if `size` is zero or exceeds [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside 1..={MAX_BOARD_SIZE}"
        );
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }

    /// Build a board from rows of cell codes, checking shape and values.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge { size });
        }

        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let stone =
                    Stone::from_code(value).ok_or(BoardError::InvalidCell { row: r, col: c, value })?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    /// Rows of cell codes, the inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|r| {
                (0..self.size)
                    .map(|c| self.get(Pos::new(r as u8, c as u8)).code())
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` lies on this board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col, self.size)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at `pos` shifted `k` steps along `(dr, dc)`, or `None` off the board
    #[inline]
    pub fn get_offset(&self, pos: Pos, dr: i32, dc: i32, k: i32) -> Option<Stone> {
        pos.offset(dr, dc, k, self.size).map(|p| self.get(p))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.size);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Set the cell at `pos`; placing `Stone::Empty` clears it.
    ///
    /// No rule checks are made; use [`crate::rules::validate_move`] first.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Copy of this board with `stone` at `pos`
    #[must_use]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = self.clone();
        next.place_stone(pos, stone);
        next
    }

    /// Number of stones of one color (`Stone::Empty` counts empty cells)
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => (self.size * self.size) as u32 - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size * self.size).map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.is_empty(pos))
    }

    /// Positions holding `stone` in row-major order
    pub fn stones(&self, stone: Stone) -> Box<dyn Iterator<Item = Pos> + '_> {
        let size = self.size;
        match stone {
            Stone::Black => Box::new(self.black.iter_ones().map(move |i| Pos::from_index(i, size))),
            Stone::White => Box::new(self.white.iter_ones().map(move |i| Pos::from_index(i, size))),
            Stone::Empty => Box::new(self.empty_positions()),
        }
    }

    /// Center cell (rounded toward the top-left on even sizes)
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }
}

impl TryFrom<Vec<Vec<i32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
