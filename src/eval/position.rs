//! Centre-weighted position values
//!
//! A cell's value falls off linearly with its Euclidean distance from the
//! centre, reaching zero half a board away, and is floored at
//! [`MIN_POSITION_WEIGHT`]. Star points are multiplied by [`STAR_BONUS`].

use crate::board::Pos;

/// Floor for cells far from the centre
pub const MIN_POSITION_WEIGHT: f32 = 0.3;

/// Multiplier applied to star points
pub const STAR_BONUS: f32 = 1.2;

/// Corner star points sit this many cells in from each edge
const STAR_INSET: usize = 3;

/// Precomputed position value per cell, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct PositionWeights {
    size: usize,
    values: Vec<f32>,
}

impl PositionWeights {
    /// Build the matrix for a `size` x `size` board
    pub fn new(size: usize) -> Self {
        let center = (size / 2) as f32;
        let half = size as f32 / 2.0;

        let mut values = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let dr = row as f32 - center;
                let dc = col as f32 - center;
                let dist = (dr * dr + dc * dc).sqrt();
                values.push((1.0 - dist / half).max(MIN_POSITION_WEIGHT));
            }
        }
        for pos in star_points(size) {
            values[pos.to_index(size)] *= STAR_BONUS;
        }

        Self { size, values }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value of `pos` (must be on the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> f32 {
        self.values[pos.to_index(self.size)]
    }
}

/// Centre point plus, on boards of 9 or more, the four corner star points.
///
/// Listed row-major. A 15x15 board gives (3,3), (3,11), (7,7), (11,3), (11,11).
pub fn star_points(size: usize) -> Vec<Pos> {
    if size == 0 {
        return Vec::new();
    }
    let mid = (size / 2) as u8;
    let center = Pos::new(mid, mid);
    if size < 2 * STAR_INSET + 3 {
        return vec![center];
    }

    let near = STAR_INSET as u8;
    let far = (size - 1 - STAR_INSET) as u8;
    vec![
        Pos::new(near, near),
        Pos::new(near, far),
        center,
        Pos::new(far, near),
        Pos::new(far, far),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_star_points_standard_board() {
        assert_eq!(
            star_points(15),
            vec![
                Pos::new(3, 3),
                Pos::new(3, 11),
                Pos::new(7, 7),
                Pos::new(11, 3),
                Pos::new(11, 11),
            ]
        );
    }

    #[test]
    fn test_star_points_small_boards() {
        assert_eq!(star_points(5), vec![Pos::new(2, 2)]);
        assert_eq!(star_points(9).len(), 5);
        assert_eq!(star_points(9)[0], Pos::new(3, 3));
        assert_eq!(star_points(9)[4], Pos::new(5, 5));
        assert!(star_points(0).is_empty());
    }

    #[test]
    fn test_center_is_highest() {
        let weights = PositionWeights::new(15);
        let center = weights.get(Pos::new(7, 7));
        assert!(close(center, 1.2));
        for row in 0..15 {
            for col in 0..15 {
                if (row, col) != (7, 7) {
                    assert!(weights.get(Pos::new(row, col)) < center);
                }
            }
        }
    }

    #[test]
    fn test_linear_falloff_and_floor() {
        let weights = PositionWeights::new(15);
        assert!(close(weights.get(Pos::new(7, 8)), 1.0 - 1.0 / 7.5));
        assert!(close(weights.get(Pos::new(4, 7)), 1.0 - 3.0 / 7.5));
        assert!(close(weights.get(Pos::new(0, 0)), MIN_POSITION_WEIGHT));
        assert!(close(weights.get(Pos::new(14, 0)), MIN_POSITION_WEIGHT));
        // Corner star point: floored first, then boosted
        assert!(close(weights.get(Pos::new(3, 3)), MIN_POSITION_WEIGHT * STAR_BONUS));
    }

    #[test]
    fn test_symmetry() {
        let weights = PositionWeights::new(15);
        assert_eq!(weights.size(), 15);
        for row in 0..15u8 {
            for col in 0..15u8 {
                let value = weights.get(Pos::new(row, col));
                assert_eq!(value, weights.get(Pos::new(col, row)));
                assert_eq!(value, weights.get(Pos::new(14 - row, 14 - col)));
            }
        }
    }
}
