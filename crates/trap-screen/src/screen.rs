//! Trap Screen Rules
//!
//! Rules, evaluated in this order:
//! 1. Short-window average volume at or below the segment floor
//! 2. Equity ratio below the segment floor
//! 3. ROE below the segment minimum (only where configured)
//! 4. Operating income decline streak
//! 5. Negative operating cash flow streak
//! 6. Revenue decline streak (only where configured)

use scoring_core::{MarketSegment, ScoringIndicator, TrapScreenConfig, TrapThresholds};

use crate::models::{TrapReason, TrapStockCheckResult};

/// Evaluate every rule against one stock.
pub fn check_trap_stock(
    indicator: &ScoringIndicator,
    segment: MarketSegment,
    thresholds: &TrapThresholds,
) -> TrapStockCheckResult {
    let mut reasons = Vec::new();

    if let Some(avg_volume) = indicator.avg_volume_short {
        if avg_volume <= thresholds.min_avg_volume {
            reasons.push(TrapReason::LowVolume {
                avg_volume,
                floor: thresholds.min_avg_volume,
            });
        }
    }

    if let Some(equity_ratio) = indicator.equity_ratio {
        if equity_ratio < thresholds.min_equity_ratio {
            reasons.push(TrapReason::LowEquityRatio {
                equity_ratio,
                floor: thresholds.min_equity_ratio,
            });
        }
    }

    if let (Some(roe), Some(floor)) = (indicator.roe, thresholds.min_roe) {
        if roe < floor {
            reasons.push(TrapReason::LowRoe { roe, floor });
        }
    }

    if let Some(years) = indicator.operating_income_decline_years {
        let limit = thresholds.operating_income_decline_years;
        if years >= limit {
            reasons.push(TrapReason::OperatingIncomeDecline { years, limit });
        }
    }

    if let Some(years) = indicator.operating_cash_flow_negative_years {
        let limit = thresholds.negative_cash_flow_years;
        if years >= limit {
            reasons.push(TrapReason::NegativeOperatingCashFlow { years, limit });
        }
    }

    if let (Some(years), Some(limit)) = (
        indicator.revenue_decline_years,
        thresholds.revenue_decline_years,
    ) {
        if years >= limit {
            reasons.push(TrapReason::RevenueDecline { years, limit });
        }
    }

    TrapStockCheckResult::new(indicator.ticker.clone(), segment, reasons)
}

/// Screens stocks against per-segment thresholds
#[derive(Debug, Clone, Default)]
pub struct TrapStockScreen {
    config: TrapScreenConfig,
}

impl TrapStockScreen {
    pub fn new(config: TrapScreenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrapScreenConfig {
        &self.config
    }

    /// Check one stock whose segment is already known.
    pub fn check(&self, indicator: &ScoringIndicator, segment: MarketSegment) -> TrapStockCheckResult {
        let result = check_trap_stock(indicator, segment, self.config.for_segment(segment));
        if result.is_trap {
            tracing::debug!(
                "{} flagged as trap stock ({}): {}",
                result.ticker,
                segment,
                result.reason_messages().join("; ")
            );
        }
        result
    }

    /// Screen a batch and return only the flagged stocks.
    pub fn screen_batch(&self, indicators: &[ScoringIndicator]) -> Vec<TrapStockCheckResult> {
        indicators
            .iter()
            .map(|i| self.check(i, i.segment()))
            .filter(|r| r.is_trap)
            .collect()
    }
}
