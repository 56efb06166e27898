//! Switch-aware scoring of a predicted haplotype pair against a truth pair.
//!
//! The truth sequences index the rows of every DP table and the predicted sequences index the columns.
//! A truth sequence is over `ACGT-X`, where `-` is a column that expects no predicted base
//! and `X` is a masked column that is never penalized.
use serde::{Deserialize, Serialize};
pub mod banded;
pub mod merge;
pub mod switch;

/// Score of a matching base.
pub const MATCH_SCORE: i32 = 1;
/// Score of a mismatch, an unexpected gap, or an inserted predicted base.
pub const PENALTY: i32 = -99;
/// Score of a synchronized phase switch.
pub const SWITCH_PENALTY: i32 = -750;
/// Slack added to the marker count when the band width is derived from the truth.
pub const BAND_FOR_PENALTY: usize = 300;

pub const GAP: u8 = b'-';
pub const MASK: u8 = b'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub step_penalty: i32,
    pub switch_penalty: i32,
    pub band_slack: usize,
}

impl std::default::Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: MATCH_SCORE,
            step_penalty: PENALTY,
            switch_penalty: SWITCH_PENALTY,
            band_slack: BAND_FOR_PENALTY,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, step_penalty: i32, switch_penalty: i32, band_slack: usize) -> Self {
        Self {
            match_score,
            step_penalty,
            switch_penalty,
            band_slack,
        }
    }
    /// Band width wide enough for `marker_count` gaps or masks plus the slack. Always odd.
    pub fn band_width(&self, marker_count: usize) -> usize {
        (marker_count + self.band_slack) * 2 + 1
    }
    /// Truth base `x` aligned to predicted base `y`.
    #[inline]
    pub fn diagonal(&self, x: u8, y: u8) -> i32 {
        if x == y {
            self.match_score
        } else if x == MASK {
            0
        } else {
            self.step_penalty
        }
    }
    /// Truth base `x` consumed without a predicted base.
    #[inline]
    pub fn truth_only(&self, x: u8) -> i32 {
        match x {
            GAP | MASK => 0,
            _ => self.step_penalty,
        }
    }
    /// A predicted base consumed without a truth base.
    #[inline]
    pub fn predicted_only(&self) -> i32 {
        self.step_penalty
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn default_scheme() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.band_width(0), 601);
        assert_eq!(scheme.band_width(7), 615);
        assert_eq!(scheme.diagonal(b'A', b'A'), 1);
        assert_eq!(scheme.diagonal(b'X', b'C'), 0);
        assert_eq!(scheme.diagonal(b'-', b'C'), -99);
        assert_eq!(scheme.diagonal(b'G', b'C'), -99);
        assert_eq!(scheme.truth_only(b'-'), 0);
        assert_eq!(scheme.truth_only(b'X'), 0);
        assert_eq!(scheme.truth_only(b'T'), -99);
        assert_eq!(scheme.predicted_only(), -99);
    }
}
