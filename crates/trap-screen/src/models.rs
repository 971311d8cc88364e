//! Trap Screen Data Models

use scoring_core::MarketSegment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single disqualifying condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TrapReason {
    LowVolume { avg_volume: f64, floor: f64 },
    LowEquityRatio { equity_ratio: f64, floor: f64 },
    LowRoe { roe: f64, floor: f64 },
    OperatingIncomeDecline { years: u32, limit: u32 },
    NegativeOperatingCashFlow { years: u32, limit: u32 },
    RevenueDecline { years: u32, limit: u32 },
}

impl fmt::Display for TrapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrapReason::LowVolume { avg_volume, floor } => write!(
                f,
                "Average daily volume {} shares is at or below the {} share floor",
                format_thousands(*avg_volume),
                format_thousands(*floor)
            ),
            TrapReason::LowEquityRatio { equity_ratio, floor } => write!(
                f,
                "Equity ratio {:.1}% is below the {:.1}% floor",
                equity_ratio, floor
            ),
            TrapReason::LowRoe { roe, floor } => {
                write!(f, "ROE {:.1}% is below the {:.1}% minimum", roe, floor)
            }
            TrapReason::OperatingIncomeDecline { years, limit } => write!(
                f,
                "Operating income declined {} consecutive years (limit {})",
                years, limit
            ),
            TrapReason::NegativeOperatingCashFlow { years, limit } => write!(
                f,
                "Operating cash flow negative {} consecutive years (limit {})",
                years, limit
            ),
            TrapReason::RevenueDecline { years, limit } => write!(
                f,
                "Revenue declined {} consecutive years (limit {})",
                years, limit
            ),
        }
    }
}

/// Outcome of screening one stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapStockCheckResult {
    pub ticker: String,
    pub segment: MarketSegment,
    pub is_trap: bool,
    /// Every triggered rule, in evaluation order
    pub reasons: Vec<TrapReason>,
    /// Human-readable text of `reasons`, same order
    #[serde(default)]
    pub messages: Vec<String>,
}

impl TrapStockCheckResult {
    pub fn new(ticker: impl Into<String>, segment: MarketSegment, reasons: Vec<TrapReason>) -> Self {
        let messages = reasons.iter().map(|r| r.to_string()).collect();
        Self {
            ticker: ticker.into(),
            segment,
            is_trap: !reasons.is_empty(),
            reasons,
            messages,
        }
    }

    /// Human-readable reason lines for reporting
    pub fn reason_messages(&self) -> &[String] {
        &self.messages
    }
}

/// Format a number rounded to whole units with comma thousands separators.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
