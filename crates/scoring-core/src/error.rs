use thiserror::Error;

use crate::segment::MarketSegment;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Invalid indicator for {ticker}: {reason}")]
    InvalidIndicator { ticker: String, reason: String },

    #[error("Indicator score {0} is outside [0, 100]")]
    IndicatorScoreOutOfRange(f64),

    #[error("Total score {0} is outside [0, 1]")]
    TotalScoreOutOfRange(f64),

    #[error("Weights for {segment} sum to {sum}, expected 100")]
    WeightSumMismatch { segment: MarketSegment, sum: u64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl ScoringError {
    pub fn invalid_indicator(ticker: &str, reason: impl Into<String>) -> Self {
        ScoringError::InvalidIndicator {
            ticker: ticker.to_string(),
            reason: reason.into(),
        }
    }
}
