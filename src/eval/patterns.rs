//! Line patterns and their scoring weights
//!
//! A placement is scored per axis by the length of the run through it and
//! whether an opponent stone caps either end of that run.

use serde::{Deserialize, Serialize};

/// Run shape along one axis through a scored position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinePattern {
    /// Five or more in a row
    Five,
    /// Four with both ends open: _OOOO_
    Four,
    /// Four capped by the opponent on one end: XOOOO_
    BlockedFour,
    Three,
    BlockedThree,
    Two,
    BlockedTwo,
    /// Lone stone; there is no blocked variant
    One,
}

impl LinePattern {
    /// Classify a run of `total` stones (including the scored one).
    ///
    /// `blocked` is true when the cell just past either end holds an
    /// opponent stone. An off-board end never blocks.
    #[inline]
    pub fn classify(total: usize, blocked: bool) -> LinePattern {
        match (total, blocked) {
            (5.., _) => LinePattern::Five,
            (4, false) => LinePattern::Four,
            (4, true) => LinePattern::BlockedFour,
            (3, false) => LinePattern::Three,
            (3, true) => LinePattern::BlockedThree,
            (2, false) => LinePattern::Two,
            (2, true) => LinePattern::BlockedTwo,
            _ => LinePattern::One,
        }
    }
}

/// Caller-supplied weight per pattern.
///
/// Fields left out of a config file default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Weights {
    pub five: f32,
    pub four: f32,
    pub blocked_four: f32,
    pub three: f32,
    pub blocked_three: f32,
    pub two: f32,
    pub blocked_two: f32,
    pub one: f32,
}

impl Weights {
    /// All-zero weights; every placement scores 0
    pub const ZERO: Weights = Weights {
        five: 0.0,
        four: 0.0,
        blocked_four: 0.0,
        three: 0.0,
        blocked_three: 0.0,
        two: 0.0,
        blocked_two: 0.0,
        one: 0.0,
    };

    /// Tuned weights used by the built-in players
    pub const fn standard() -> Weights {
        Weights {
            five: 100_000.0,
            four: 10_000.0,
            blocked_four: 5_000.0,
            three: 1_000.0,
            blocked_three: 500.0,
            two: 100.0,
            blocked_two: 50.0,
            one: 10.0,
        }
    }

    /// Weight for one pattern
    #[inline]
    pub fn value(&self, pattern: LinePattern) -> f32 {
        match pattern {
            LinePattern::Five => self.five,
            LinePattern::Four => self.four,
            LinePattern::BlockedFour => self.blocked_four,
            LinePattern::Three => self.three,
            LinePattern::BlockedThree => self.blocked_three,
            LinePattern::Two => self.two,
            LinePattern::BlockedTwo => self.blocked_two,
            LinePattern::One => self.one,
        }
    }

    /// The eight weights in declaration order
    pub fn as_array(&self) -> [f32; 8] {
        [
            self.five,
            self.four,
            self.blocked_four,
            self.three,
            self.blocked_three,
            self.two,
            self.blocked_two,
            self.one,
        ]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|&w| w == 0.0)
    }

    /// Strongest pattern whose weight `score` reaches.
    ///
    /// Thresholds are tried from `five` down to `blocked_two`; anything
    /// below them all is [`LinePattern::One`].
    pub fn pattern_for_score(&self, score: f32) -> LinePattern {
        const RANKED: [LinePattern; 7] = [
            LinePattern::Five,
            LinePattern::Four,
            LinePattern::BlockedFour,
            LinePattern::Three,
            LinePattern::BlockedThree,
            LinePattern::Two,
            LinePattern::BlockedTwo,
        ];
        RANKED
            .into_iter()
            .find(|&pattern| score >= self.value(pattern))
            .unwrap_or(LinePattern::One)
    }
}
