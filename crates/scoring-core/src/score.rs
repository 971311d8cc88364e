//! Validated score value types.
//!
//! `IndicatorScore` lives on a 0-100 scale and `TotalScore` on 0-1. Neither can
//! hold a value outside its range once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScoringError;

/// A single indicator sub-score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct IndicatorScore(f64);

impl IndicatorScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub const ZERO: IndicatorScore = IndicatorScore(0.0);
    pub const NEUTRAL: IndicatorScore = IndicatorScore(50.0);
    pub const FULL: IndicatorScore = IndicatorScore(100.0);

    /// Strict constructor. Out-of-range or non-finite values are rejected.
    pub fn new(value: f64) -> Result<Self, ScoringError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoringError::IndicatorScoreOutOfRange(value))
        }
    }

    /// Clamp into [0, 100]. NaN collapses to 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Clamp, then round to the nearest whole point.
    pub fn clamped_rounded(value: f64) -> Self {
        Self(Self::clamped(value).0.round())
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for IndicatorScore {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IndicatorScore> for f64 {
    fn from(score: IndicatorScore) -> Self {
        score.0
    }
}

impl fmt::Display for IndicatorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Composite score normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TotalScore(f64);

impl TotalScore {
    pub fn new(value: f64) -> Result<Self, ScoringError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoringError::TotalScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering for ranking. Values are always finite, so this never
    /// falls back to `Equal` for NaN.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for TotalScore {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TotalScore> for f64 {
    fn from(score: TotalScore) -> Self {
        score.0
    }
}

impl fmt::Display for TotalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_score_bounds() {
        assert!(IndicatorScore::new(0.0).is_ok());
        assert!(IndicatorScore::new(100.0).is_ok());
        assert_eq!(
            IndicatorScore::new(100.5),
            Err(ScoringError::IndicatorScoreOutOfRange(100.5))
        );
        assert!(IndicatorScore::new(-0.1).is_err());
        assert!(IndicatorScore::new(f64::NAN).is_err());
        assert!(IndicatorScore::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_indicator_score_clamping() {
        assert_eq!(IndicatorScore::clamped(130.0).value(), 100.0);
        assert_eq!(IndicatorScore::clamped(-4.0).value(), 0.0);
        assert_eq!(IndicatorScore::clamped(f64::NAN).value(), 0.0);
        assert_eq!(IndicatorScore::clamped_rounded(74.6).value(), 75.0);
    }

    #[test]
    fn test_total_score_bounds() {
        assert!(TotalScore::new(0.0).is_ok());
        assert!(TotalScore::new(1.0).is_ok());
        assert!(TotalScore::new(1.0001).is_err());
        assert!(TotalScore::new(-0.5).is_err());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: IndicatorScore = serde_json::from_str("42.5").unwrap();
        assert_eq!(ok.value(), 42.5);

        let bad: Result<IndicatorScore, _> = serde_json::from_str("142.5");
        assert!(bad.is_err());

        let bad_total: Result<TotalScore, _> = serde_json::from_str("2.0");
        assert!(bad_total.is_err());
    }
}
