//! Scoring configuration.
//!
//! One `ScoringConfig` exists per period type. Configs are plain values:
//! built from the defaults below or parsed from JSON, validated once, then
//! shared read-only by every scoring call.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScoringError;
use crate::score::{IndicatorScore, TotalScore};
use crate::segment::MarketSegment;
use crate::types::{PeriodType, SubScores};

/// Ratio above which PER/PBR relative to the sector average scores zero
pub const RATIO_CEILING: f64 = 150.0;
/// RSI above which the static RSI score is zero
pub const RSI_CEILING: f64 = 70.0;

/// Breakpoints for metric-to-sector-average ratios, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioThresholds {
    pub excellent: f64,
    pub good: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiThresholds {
    pub oversold: f64,
    pub neutral: f64,
}

/// Breakpoints for the price position inside its period range, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeThresholds {
    pub bottom: f64,
    pub low: f64,
}

/// ROE breakpoints, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoeThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Integer weight points for one market segment. A row must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentWeights {
    pub per: u32,
    pub pbr: u32,
    pub rsi: u32,
    pub price_range: u32,
    pub sector: u32,
    pub eps_growth: u32,
    pub rsi_momentum: u32,
    pub volume_surge: u32,
    pub tag: u32,
    pub roe: u32,
}

impl SegmentWeights {
    /// Total weight points. Widened so oversized rows cannot overflow.
    pub fn sum(&self) -> u64 {
        [
            self.per,
            self.pbr,
            self.rsi,
            self.price_range,
            self.sector,
            self.eps_growth,
            self.rsi_momentum,
            self.volume_surge,
            self.tag,
            self.roe,
        ]
        .iter()
        .map(|w| u64::from(*w))
        .sum()
    }

    /// Weighted sum of sub-scores normalized from 0-10,000 into [0, 1].
    ///
    /// Sub-scores that were not computed contribute nothing.
    pub fn weighted_total(&self, scores: &SubScores) -> Result<TotalScore, ScoringError> {
        let value = |s: Option<IndicatorScore>| s.map_or(0.0, |s| s.value());
        let terms = [
            (scores.per.value(), self.per),
            (scores.pbr.value(), self.pbr),
            (scores.rsi.value(), self.rsi),
            (scores.price_range.value(), self.price_range),
            (scores.sector.value(), self.sector),
            (value(scores.eps_growth), self.eps_growth),
            (value(scores.rsi_momentum), self.rsi_momentum),
            (value(scores.volume_surge), self.volume_surge),
            (value(scores.tag), self.tag),
            (value(scores.roe), self.roe),
        ];
        let raw: f64 = terms.iter().map(|(score, weight)| score * f64::from(*weight)).sum();
        TotalScore::new(raw / 10_000.0)
    }

    fn check(&self, segment: MarketSegment, period: PeriodType) -> Result<(), ScoringError> {
        let sum = self.sum();
        if sum != 100 {
            return Err(ScoringError::WeightSumMismatch { segment, sum });
        }
        // Weights on sub-scores the period variant never computes would cap
        // the reachable total below 1.
        let unused = match period {
            PeriodType::MidTerm => u64::from(self.roe),
            PeriodType::LongTerm => u64::from(self.rsi_momentum) + u64::from(self.volume_surge),
        };
        if unused != 0 {
            return Err(ScoringError::InvalidConfig(format!(
                "{} weights for {} assign {} points to sub-scores that are not computed",
                period, segment, unused
            )));
        }
        Ok(())
    }
}

/// One weight row per market segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentWeightTable {
    pub prime: SegmentWeights,
    pub standard: SegmentWeights,
    pub growth: SegmentWeights,
    pub other: SegmentWeights,
}

impl SegmentWeightTable {
    pub fn for_segment(&self, segment: MarketSegment) -> &SegmentWeights {
        match segment {
            MarketSegment::Prime => &self.prime,
            MarketSegment::Standard => &self.standard,
            MarketSegment::Growth => &self.growth,
            MarketSegment::Other => &self.other,
        }
    }
}

/// Post-hoc multipliers applied to valuation sub-scores for one segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMultipliers {
    pub per: f64,
    pub pbr: f64,
    pub price_range: f64,
}

impl Default for SegmentMultipliers {
    fn default() -> Self {
        Self {
            per: 1.0,
            pbr: 1.0,
            price_range: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMultiplierTable {
    #[serde(default)]
    pub prime: SegmentMultipliers,
    #[serde(default)]
    pub standard: SegmentMultipliers,
    #[serde(default)]
    pub growth: SegmentMultipliers,
    #[serde(default)]
    pub other: SegmentMultipliers,
}

impl Default for SegmentMultiplierTable {
    fn default() -> Self {
        Self {
            prime: SegmentMultipliers::default(),
            standard: SegmentMultipliers::default(),
            growth: SegmentMultipliers {
                per: 1.2,
                pbr: 0.8,
                price_range: 1.0,
            },
            other: SegmentMultipliers::default(),
        }
    }
}

impl SegmentMultiplierTable {
    pub fn for_segment(&self, segment: MarketSegment) -> &SegmentMultipliers {
        match segment {
            MarketSegment::Prime => &self.prime,
            MarketSegment::Standard => &self.standard,
            MarketSegment::Growth => &self.growth,
            MarketSegment::Other => &self.other,
        }
    }
}

/// How market segment sensitivity enters the composite score.
///
/// A config uses exactly one mode for every stock it scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SegmentWeighting {
    /// Each segment has its own weight row.
    SegmentTable { weights: SegmentWeightTable },
    /// One weight row for every segment; PER/PBR/price-range sub-scores are
    /// scaled by segment multipliers first.
    Adjusted {
        weights: SegmentWeights,
        #[serde(default)]
        multipliers: SegmentMultiplierTable,
    },
}

impl SegmentWeighting {
    pub fn weights_for(&self, segment: MarketSegment) -> &SegmentWeights {
        match self {
            SegmentWeighting::SegmentTable { weights } => weights.for_segment(segment),
            SegmentWeighting::Adjusted { weights, .. } => weights,
        }
    }

    /// Multipliers only exist in `Adjusted` mode.
    pub fn multipliers_for(&self, segment: MarketSegment) -> Option<&SegmentMultipliers> {
        match self {
            SegmentWeighting::SegmentTable { .. } => None,
            SegmentWeighting::Adjusted { multipliers, .. } => Some(multipliers.for_segment(segment)),
        }
    }
}

/// Disqualification thresholds of the trap-stock screen for one segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapThresholds {
    /// Short-window average daily volume at or below this is illiquid
    pub min_avg_volume: f64,
    /// Equity ratio (%) below this is undercapitalized
    pub min_equity_ratio: f64,
    /// ROE (%) below this disqualifies; `None` skips the check
    #[serde(default)]
    pub min_roe: Option<f64>,
    /// Consecutive years of operating income decline that disqualify
    pub operating_income_decline_years: u32,
    /// Consecutive years of negative operating cash flow that disqualify
    pub negative_cash_flow_years: u32,
    /// Consecutive years of revenue decline that disqualify; `None` skips
    #[serde(default)]
    pub revenue_decline_years: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapScreenConfig {
    pub prime: TrapThresholds,
    pub standard: TrapThresholds,
    pub growth: TrapThresholds,
    pub other: TrapThresholds,
}

impl Default for TrapScreenConfig {
    fn default() -> Self {
        let standard = TrapThresholds {
            min_avg_volume: 7_000.0,
            min_equity_ratio: 20.0,
            min_roe: None,
            operating_income_decline_years: 3,
            negative_cash_flow_years: 2,
            revenue_decline_years: None,
        };
        Self {
            prime: TrapThresholds {
                min_avg_volume: 30_000.0,
                min_equity_ratio: 25.0,
                min_roe: Some(3.0),
                ..standard
            },
            standard,
            growth: TrapThresholds {
                min_avg_volume: 5_000.0,
                min_equity_ratio: 10.0,
                revenue_decline_years: Some(2),
                ..standard
            },
            other: standard,
        }
    }
}

impl TrapScreenConfig {
    pub fn for_segment(&self, segment: MarketSegment) -> &TrapThresholds {
        match segment {
            MarketSegment::Prime => &self.prime,
            MarketSegment::Standard => &self.standard,
            MarketSegment::Growth => &self.growth,
            MarketSegment::Other => &self.other,
        }
    }
}

/// Complete configuration for one period type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub per: RatioThresholds,
    pub pbr: RatioThresholds,
    pub rsi: RsiThresholds,
    pub price_range: PriceRangeThresholds,
    pub roe: RoeThresholds,
    pub weighting: SegmentWeighting,
    #[serde(default)]
    pub trap: TrapScreenConfig,
}

impl ScoringConfig {
    /// Swing-horizon defaults: technical timing weighs heavily.
    pub fn mid_term() -> Self {
        let standard = SegmentWeights {
            per: 20,
            pbr: 15,
            rsi: 15,
            price_range: 15,
            sector: 10,
            rsi_momentum: 10,
            volume_surge: 15,
            ..Default::default()
        };
        Self {
            per: RatioThresholds { excellent: 70.0, good: 100.0 },
            pbr: RatioThresholds { excellent: 70.0, good: 100.0 },
            rsi: RsiThresholds { oversold: 30.0, neutral: 50.0 },
            price_range: PriceRangeThresholds { bottom: 20.0, low: 40.0 },
            roe: RoeThresholds { low: 5.0, medium: 10.0, high: 15.0 },
            weighting: SegmentWeighting::SegmentTable {
                weights: SegmentWeightTable {
                    prime: SegmentWeights {
                        per: 20,
                        pbr: 20,
                        rsi: 15,
                        price_range: 15,
                        sector: 10,
                        rsi_momentum: 10,
                        volume_surge: 10,
                        ..Default::default()
                    },
                    standard,
                    growth: SegmentWeights {
                        per: 10,
                        pbr: 5,
                        rsi: 15,
                        price_range: 10,
                        sector: 5,
                        eps_growth: 15,
                        rsi_momentum: 15,
                        volume_surge: 15,
                        tag: 10,
                        roe: 0,
                    },
                    other: standard,
                },
            },
            trap: TrapScreenConfig::default(),
        }
    }

    /// Holding-horizon defaults: valuation, growth and profitability dominate.
    pub fn long_term() -> Self {
        let standard = SegmentWeights {
            per: 20,
            pbr: 20,
            rsi: 5,
            price_range: 10,
            sector: 10,
            eps_growth: 15,
            tag: 5,
            roe: 15,
            ..Default::default()
        };
        Self {
            per: RatioThresholds { excellent: 60.0, good: 90.0 },
            pbr: RatioThresholds { excellent: 60.0, good: 90.0 },
            rsi: RsiThresholds { oversold: 30.0, neutral: 50.0 },
            price_range: PriceRangeThresholds { bottom: 25.0, low: 50.0 },
            roe: RoeThresholds { low: 5.0, medium: 8.0, high: 12.0 },
            weighting: SegmentWeighting::SegmentTable {
                weights: SegmentWeightTable {
                    prime: SegmentWeights {
                        per: 25,
                        pbr: 20,
                        rsi: 5,
                        price_range: 10,
                        sector: 10,
                        eps_growth: 10,
                        tag: 5,
                        roe: 15,
                        ..Default::default()
                    },
                    standard,
                    growth: SegmentWeights {
                        per: 10,
                        pbr: 5,
                        rsi: 5,
                        price_range: 10,
                        sector: 5,
                        eps_growth: 35,
                        tag: 15,
                        roe: 15,
                        ..Default::default()
                    },
                    other: standard,
                },
            },
            trap: TrapScreenConfig::default(),
        }
    }

    pub fn for_period(period: PeriodType) -> Self {
        match period {
            PeriodType::MidTerm => Self::mid_term(),
            PeriodType::LongTerm => Self::long_term(),
        }
    }

    /// Validate the config for the given period variant.
    pub fn validate(&self, period: PeriodType) -> Result<(), ScoringError> {
        check_ratio("per", &self.per)?;
        check_ratio("pbr", &self.pbr)?;
        check_ascending(
            "rsi",
            &[self.rsi.oversold, self.rsi.neutral, RSI_CEILING],
        )?;
        check_ascending(
            "price_range",
            &[self.price_range.bottom, self.price_range.low, 100.0],
        )?;
        check_ascending("roe", &[self.roe.low, self.roe.medium, self.roe.high])?;

        for segment in MarketSegment::ALL {
            self.weighting.weights_for(segment).check(segment, period)?;
            if let Some(m) = self.weighting.multipliers_for(segment) {
                for (name, factor) in [("per", m.per), ("pbr", m.pbr), ("price_range", m.price_range)] {
                    if !factor.is_finite() || factor <= 0.0 {
                        return Err(ScoringError::InvalidConfig(format!(
                            "{} multiplier for {} must be positive, got {}",
                            name, segment, factor
                        )));
                    }
                }
            }

            let trap = self.trap.for_segment(segment);
            check_trap_thresholds(segment, trap)?;
        }
        Ok(())
    }
}

fn check_trap_thresholds(segment: MarketSegment, trap: &TrapThresholds) -> Result<(), ScoringError> {
    let invalid = |msg: String| -> Result<(), ScoringError> { Err(ScoringError::InvalidConfig(msg)) };

    if !trap.min_avg_volume.is_finite() || trap.min_avg_volume < 0.0 {
        return invalid(format!(
            "trap volume floor for {} must be non-negative, got {}",
            segment, trap.min_avg_volume
        ));
    }
    if !trap.min_equity_ratio.is_finite() || trap.min_equity_ratio < 0.0 {
        return invalid(format!(
            "trap equity ratio floor for {} must be non-negative, got {}",
            segment, trap.min_equity_ratio
        ));
    }
    if let Some(min_roe) = trap.min_roe {
        if !min_roe.is_finite() || min_roe < 0.0 {
            return invalid(format!(
                "trap ROE floor for {} must be non-negative, got {}",
                segment, min_roe
            ));
        }
    }

    // A zero-year streak limit would flag every stock that reports its counters
    let streaks = [
        ("operating income decline", Some(trap.operating_income_decline_years)),
        ("negative cash flow", Some(trap.negative_cash_flow_years)),
        ("revenue decline", trap.revenue_decline_years),
    ];
    for (name, limit) in streaks {
        if limit == Some(0) {
            return invalid(format!(
                "trap {} limit for {} must be at least 1 year",
                name, segment
            ));
        }
    }
    Ok(())
}

fn check_ratio(name: &str, t: &RatioThresholds) -> Result<(), ScoringError> {
    check_ascending(name, &[t.excellent, t.good, RATIO_CEILING])?;
    if t.excellent <= 0.0 {
        return Err(ScoringError::InvalidConfig(format!(
            "{} excellent threshold must be positive",
            name
        )));
    }
    Ok(())
}

fn check_ascending(name: &str, values: &[f64]) -> Result<(), ScoringError> {
    let ordered = values.iter().all(|v| v.is_finite())
        && values.windows(2).all(|w| w[0] < w[1]);
    if ordered {
        Ok(())
    } else {
        Err(ScoringError::InvalidConfig(format!(
            "{} thresholds must be strictly ascending, got {:?}",
            name, values
        )))
    }
}

/// Mid-term and long-term configs loaded together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfigSet {
    pub mid_term: ScoringConfig,
    pub long_term: ScoringConfig,
}

impl Default for ScoringConfigSet {
    fn default() -> Self {
        Self {
            mid_term: ScoringConfig::mid_term(),
            long_term: ScoringConfig::long_term(),
        }
    }
}

impl ScoringConfigSet {
    pub fn for_period(&self, period: PeriodType) -> &ScoringConfig {
        match period {
            PeriodType::MidTerm => &self.mid_term,
            PeriodType::LongTerm => &self.long_term,
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        self.mid_term.validate(PeriodType::MidTerm)?;
        self.long_term.validate(PeriodType::LongTerm)
    }

    /// Parse and validate a JSON config set.
    pub fn from_json_str(json: &str) -> Result<Self, ScoringError> {
        let set: Self =
            serde_json::from_str(json).map_err(|e| ScoringError::ConfigParse(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ScoringError::ConfigParse(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_scores(value: f64) -> SubScores {
        let s = IndicatorScore::new(value).unwrap();
        SubScores {
            per: s,
            pbr: s,
            rsi: s,
            price_range: s,
            sector: s,
            eps_growth: Some(s),
            rsi_momentum: Some(s),
            volume_surge: Some(s),
            tag: Some(s),
            roe: Some(s),
        }
    }

    #[test]
    fn test_default_weight_rows_sum_to_100() {
        let set = ScoringConfigSet::default();
        for config in [&set.mid_term, &set.long_term] {
            for segment in MarketSegment::ALL {
                assert_eq!(config.weighting.weights_for(segment).sum(), 100, "{}", segment);
            }
        }
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_weight_sum_mismatch_rejected() {
        let mut config = ScoringConfig::mid_term();
        if let SegmentWeighting::SegmentTable { weights } = &mut config.weighting {
            weights.growth.per += 1;
        }
        assert_eq!(
            config.validate(PeriodType::MidTerm),
            Err(ScoringError::WeightSumMismatch {
                segment: MarketSegment::Growth,
                sum: 101
            })
        );
    }

    #[test]
    fn test_uncomputed_weights_rejected() {
        // ROE is not computed for mid-term scoring
        let mut config = ScoringConfig::mid_term();
        if let SegmentWeighting::SegmentTable { weights } = &mut config.weighting {
            weights.prime.per -= 5;
            weights.prime.roe += 5;
        }
        assert!(matches!(
            config.validate(PeriodType::MidTerm),
            Err(ScoringError::InvalidConfig(_))
        ));
        assert!(ScoringConfig::mid_term().validate(PeriodType::LongTerm).is_err());
    }

    #[test]
    fn test_oversized_weights_rejected_without_overflow() {
        let mut set = ScoringConfigSet::default();
        if let SegmentWeighting::SegmentTable { weights } = &mut set.mid_term.weighting {
            weights.prime.per = u32::MAX;
            weights.prime.pbr = 41;
        }
        let json = serde_json::to_string(&set).unwrap();

        let expected = u64::from(u32::MAX) + 41 + 15 + 15 + 10 + 10 + 10;
        assert_eq!(
            ScoringConfigSet::from_json_str(&json),
            Err(ScoringError::WeightSumMismatch {
                segment: MarketSegment::Prime,
                sum: expected
            })
        );
    }

    #[test]
    fn test_oversized_long_term_unused_weights_rejected() {
        let mut config = ScoringConfig::long_term();
        if let SegmentWeighting::SegmentTable { weights } = &mut config.weighting {
            weights.standard.rsi_momentum = u32::MAX;
            weights.standard.volume_surge = u32::MAX;
        }
        assert!(config.validate(PeriodType::LongTerm).is_err());
    }

    #[test]
    fn test_zero_streak_limits_rejected() {
        let mut config = ScoringConfig::mid_term();
        config.trap.prime.operating_income_decline_years = 0;
        assert!(matches!(
            config.validate(PeriodType::MidTerm),
            Err(ScoringError::InvalidConfig(_))
        ));

        let mut config = ScoringConfig::mid_term();
        config.trap.standard.negative_cash_flow_years = 0;
        assert!(config.validate(PeriodType::MidTerm).is_err());

        let mut config = ScoringConfig::long_term();
        config.trap.growth.revenue_decline_years = Some(0);
        assert!(config.validate(PeriodType::LongTerm).is_err());

        // Disabling the revenue rule stays valid
        let mut config = ScoringConfig::long_term();
        config.trap.growth.revenue_decline_years = None;
        assert!(config.validate(PeriodType::LongTerm).is_ok());
    }

    #[test]
    fn test_negative_trap_floors_rejected() {
        let mut config = ScoringConfig::mid_term();
        config.trap.prime.min_equity_ratio = -5.0;
        assert!(config.validate(PeriodType::MidTerm).is_err());

        let mut config = ScoringConfig::mid_term();
        config.trap.other.min_equity_ratio = f64::NAN;
        assert!(config.validate(PeriodType::MidTerm).is_err());

        let mut config = ScoringConfig::mid_term();
        config.trap.prime.min_roe = Some(-1.0);
        assert!(config.validate(PeriodType::MidTerm).is_err());

        let mut config = ScoringConfig::mid_term();
        config.trap.growth.min_avg_volume = -1.0;
        assert!(config.validate(PeriodType::MidTerm).is_err());
    }

    #[test]
    fn test_malformed_trap_config_rejected_at_load() {
        let mut set = ScoringConfigSet::default();
        set.mid_term.trap.prime.operating_income_decline_years = 0;
        set.mid_term.trap.prime.min_equity_ratio = -5.0;
        let json = serde_json::to_string(&set).unwrap();
        assert!(matches!(
            ScoringConfigSet::from_json_str(&json),
            Err(ScoringError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.json");
        std::fs::write(&path, serde_json::to_string_pretty(&ScoringConfigSet::default()).unwrap()).unwrap();

        let loaded = ScoringConfigSet::from_path(&path).unwrap();
        assert_eq!(loaded, ScoringConfigSet::default());

        assert!(matches!(
            ScoringConfigSet::from_path(dir.path().join("missing.json")),
            Err(ScoringError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_threshold_order_rejected() {
        let mut config = ScoringConfig::long_term();
        config.rsi = RsiThresholds { oversold: 50.0, neutral: 40.0 };
        assert!(config.validate(PeriodType::LongTerm).is_err());

        let mut config = ScoringConfig::long_term();
        config.per = RatioThresholds { excellent: 120.0, good: 160.0 };
        assert!(config.validate(PeriodType::LongTerm).is_err());
    }

    #[test]
    fn test_weighted_total_bounds() {
        let weights = *ScoringConfig::mid_term()
            .weighting
            .weights_for(MarketSegment::Growth);
        assert_relative_eq!(weights.weighted_total(&all_scores(100.0)).unwrap().value(), 1.0);
        assert_relative_eq!(weights.weighted_total(&all_scores(0.0)).unwrap().value(), 0.0);
        assert_relative_eq!(weights.weighted_total(&all_scores(50.0)).unwrap().value(), 0.5);
    }

    #[test]
    fn test_adjusted_mode_uses_single_row() {
        let weights = SegmentWeights {
            per: 30,
            pbr: 30,
            rsi: 20,
            price_range: 10,
            sector: 10,
            ..Default::default()
        };
        let mode = SegmentWeighting::Adjusted {
            weights,
            multipliers: SegmentMultiplierTable::default(),
        };
        assert_eq!(mode.weights_for(MarketSegment::Prime), &weights);
        assert_eq!(mode.weights_for(MarketSegment::Growth), &weights);
        assert_relative_eq!(mode.multipliers_for(MarketSegment::Growth).unwrap().per, 1.2);
        assert_relative_eq!(mode.multipliers_for(MarketSegment::Growth).unwrap().pbr, 0.8);

        let table = ScoringConfig::mid_term().weighting;
        assert!(table.multipliers_for(MarketSegment::Growth).is_none());
    }

    #[test]
    fn test_trap_defaults_per_segment() {
        let trap = TrapScreenConfig::default();
        assert_relative_eq!(trap.for_segment(MarketSegment::Prime).min_avg_volume, 30_000.0);
        assert_relative_eq!(trap.for_segment(MarketSegment::Standard).min_avg_volume, 7_000.0);
        assert_relative_eq!(trap.for_segment(MarketSegment::Other).min_avg_volume, 7_000.0);
        assert_relative_eq!(trap.for_segment(MarketSegment::Growth).min_avg_volume, 5_000.0);
        assert_eq!(trap.for_segment(MarketSegment::Prime).min_roe, Some(3.0));
        assert_eq!(trap.for_segment(MarketSegment::Standard).min_roe, None);
        assert_eq!(trap.for_segment(MarketSegment::Growth).revenue_decline_years, Some(2));
    }

    #[test]
    fn test_config_set_json_round_trip_validates() {
        let json = serde_json::to_string(&ScoringConfigSet::default()).unwrap();
        let parsed = ScoringConfigSet::from_json_str(&json).unwrap();
        assert_eq!(parsed, ScoringConfigSet::default());

        let broken = json.replacen("\"per\":20", "\"per\":21", 1);
        assert!(ScoringConfigSet::from_json_str(&broken).is_err());

        assert!(matches!(
            ScoringConfigSet::from_json_str("{ not json"),
            Err(ScoringError::ConfigParse(_))
        ));
    }
}
