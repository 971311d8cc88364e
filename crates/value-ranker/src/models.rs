//! Ranking Data Models

use scoring_core::{PeriodType, ValueStockScore};
use serde::{Deserialize, Serialize};
use trap_screen::TrapStockCheckResult;

/// A record that could not be scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringFailure {
    pub ticker: String,
    pub error: String,
}

/// Result of ranking one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    pub period: PeriodType,
    /// Top stocks, best first
    pub ranked: Vec<ValueStockScore>,
    /// Number of stocks that received a score before the top-N cut
    pub scored_count: usize,
    /// Tickers listed on institutional-only markets
    pub institutional_excluded: Vec<String>,
    /// Stocks removed by the trap screen, with their reasons
    pub traps: Vec<TrapStockCheckResult>,
    /// Malformed records, isolated from the rest of the batch
    pub failures: Vec<ScoringFailure>,
}

impl RankingOutcome {
    pub fn new(period: PeriodType) -> Self {
        Self {
            period,
            ranked: Vec::new(),
            scored_count: 0,
            institutional_excluded: Vec::new(),
            traps: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn excluded_count(&self) -> usize {
        self.institutional_excluded.len() + self.traps.len() + self.failures.len()
    }
}
