use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::ScoringError;
use crate::score::{IndicatorScore, TotalScore};
use crate::segment::MarketSegment;

/// Holding horizon a ranking is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    MidTerm,
    LongTerm,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::MidTerm => "mid_term",
            PeriodType::LongTerm => "long_term",
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mid_term" | "mid" => Ok(PeriodType::MidTerm),
            "long_term" | "long" => Ok(PeriodType::LongTerm),
            other => Err(ScoringError::InvalidConfig(format!(
                "unknown period type '{}'",
                other
            ))),
        }
    }
}

/// Tags attached to a stock together with the tags the current market
/// environment favors or penalizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagExposure {
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub favorable: BTreeSet<String>,
    #[serde(default)]
    pub unfavorable: BTreeSet<String>,
}

impl TagExposure {
    pub fn favorable_matches(&self) -> usize {
        self.tags.intersection(&self.favorable).count()
    }

    pub fn unfavorable_matches(&self) -> usize {
        self.tags.intersection(&self.unfavorable).count()
    }
}

/// Raw per-stock indicator snapshot for one evaluation period.
///
/// Everything except the ticker and current price may be missing. Missing
/// values are resolved by each calculator, never treated as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringIndicator {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text listing market label, e.g. "東証プライム"
    #[serde(default)]
    pub market: Option<String>,
    pub current_price: f64,

    // Valuation
    #[serde(default)]
    pub per: Option<f64>,
    #[serde(default)]
    pub pbr: Option<f64>,
    #[serde(default)]
    pub sector_avg_per: Option<f64>,
    #[serde(default)]
    pub sector_avg_pbr: Option<f64>,

    // Technical
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub rsi_short: Option<f64>,
    #[serde(default)]
    pub period_high: Option<f64>,
    #[serde(default)]
    pub period_low: Option<f64>,
    #[serde(default)]
    pub avg_volume_short: Option<f64>,
    #[serde(default)]
    pub avg_volume_long: Option<f64>,

    // Financial health
    /// Equity ratio in percent
    #[serde(default)]
    pub equity_ratio: Option<f64>,
    /// Return on equity in percent
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub operating_income_decline_years: Option<u32>,
    #[serde(default)]
    pub operating_cash_flow_negative_years: Option<u32>,
    #[serde(default)]
    pub revenue_decline_years: Option<u32>,

    // Growth
    #[serde(default)]
    pub eps_latest: Option<f64>,
    #[serde(default)]
    pub eps_three_years_ago: Option<f64>,

    // Themes and macro environment
    #[serde(default)]
    pub theme: TagExposure,
    #[serde(default)]
    pub macro_env: TagExposure,
}

impl ScoringIndicator {
    pub fn new(ticker: impl Into<String>, current_price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            current_price,
            ..Default::default()
        }
    }

    pub fn segment(&self) -> MarketSegment {
        MarketSegment::classify(self.market.as_deref())
    }

    /// Reject records whose shape cannot be scored.
    ///
    /// Missing metrics pass; present metrics must be finite and volumes
    /// non-negative.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.ticker.trim().is_empty() {
            return Err(ScoringError::invalid_indicator(&self.ticker, "empty ticker"));
        }
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(ScoringError::invalid_indicator(
                &self.ticker,
                format!("current price must be positive, got {}", self.current_price),
            ));
        }

        let optional_fields = [
            ("per", self.per),
            ("pbr", self.pbr),
            ("sector_avg_per", self.sector_avg_per),
            ("sector_avg_pbr", self.sector_avg_pbr),
            ("rsi", self.rsi),
            ("rsi_short", self.rsi_short),
            ("period_high", self.period_high),
            ("period_low", self.period_low),
            ("avg_volume_short", self.avg_volume_short),
            ("avg_volume_long", self.avg_volume_long),
            ("equity_ratio", self.equity_ratio),
            ("roe", self.roe),
            ("eps_latest", self.eps_latest),
            ("eps_three_years_ago", self.eps_three_years_ago),
        ];
        for (field, value) in optional_fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ScoringError::invalid_indicator(
                        &self.ticker,
                        format!("{} is not a finite number", field),
                    ));
                }
            }
        }

        for (field, value) in [
            ("avg_volume_short", self.avg_volume_short),
            ("avg_volume_long", self.avg_volume_long),
        ] {
            if value.is_some_and(|v| v < 0.0) {
                return Err(ScoringError::invalid_indicator(
                    &self.ticker,
                    format!("{} must not be negative", field),
                ));
            }
        }

        Ok(())
    }
}

/// Sub-scores of one evaluation. Extended scores are `None` when the period
/// variant does not compute them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub per: IndicatorScore,
    pub pbr: IndicatorScore,
    pub rsi: IndicatorScore,
    pub price_range: IndicatorScore,
    pub sector: IndicatorScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eps_growth: Option<IndicatorScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi_momentum: Option<IndicatorScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_surge: Option<IndicatorScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<IndicatorScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roe: Option<IndicatorScore>,
}

/// Final scoring output for one stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueStockScore {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    pub segment: MarketSegment,
    pub period: PeriodType,
    #[serde(flatten)]
    pub scores: SubScores,
    pub total_score: TotalScore,
}
