//! Market segment classification.
//!
//! Listing labels arrive as free text from the data layer. They are classified
//! once per stock and the resulting `MarketSegment` is passed to every
//! calculator and screen that depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing tier of a stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSegment {
    Prime,
    Standard,
    Growth,
    Other,
}

const PRIME_TOKENS: &[&str] = &["プライム", "Prime"];
const STANDARD_TOKENS: &[&str] = &["スタンダード", "Standard"];
const GROWTH_TOKENS: &[&str] = &["グロース", "Growth"];

/// Markets open to professional investors only. These never enter a ranking.
const INSTITUTIONAL_TOKENS: &[&str] = &["PRO", "プロ"];

impl MarketSegment {
    pub const ALL: [MarketSegment; 4] = [
        MarketSegment::Prime,
        MarketSegment::Standard,
        MarketSegment::Growth,
        MarketSegment::Other,
    ];

    /// Classify a market label by case-sensitive substring match.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return MarketSegment::Other;
        };

        if PRIME_TOKENS.iter().any(|t| label.contains(t)) {
            MarketSegment::Prime
        } else if STANDARD_TOKENS.iter().any(|t| label.contains(t)) {
            MarketSegment::Standard
        } else if GROWTH_TOKENS.iter().any(|t| label.contains(t)) {
            MarketSegment::Growth
        } else {
            MarketSegment::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSegment::Prime => "prime",
            MarketSegment::Standard => "standard",
            MarketSegment::Growth => "growth",
            MarketSegment::Other => "other",
        }
    }
}

impl fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label names an institutional-only market.
pub fn is_institutional_market(label: Option<&str>) -> bool {
    label.is_some_and(|l| INSTITUTIONAL_TOKENS.iter().any(|t| l.contains(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_japanese_labels() {
        assert_eq!(MarketSegment::classify(Some("東証プライム")), MarketSegment::Prime);
        assert_eq!(MarketSegment::classify(Some("東証スタンダード")), MarketSegment::Standard);
        assert_eq!(MarketSegment::classify(Some("東証グロース")), MarketSegment::Growth);
    }

    #[test]
    fn test_classify_english_labels() {
        assert_eq!(MarketSegment::classify(Some("TSE Prime")), MarketSegment::Prime);
        assert_eq!(MarketSegment::classify(Some("TSE Growth")), MarketSegment::Growth);
        // Case-sensitive
        assert_eq!(MarketSegment::classify(Some("tse prime")), MarketSegment::Other);
    }

    #[test]
    fn test_classify_unknown_or_missing() {
        assert_eq!(MarketSegment::classify(None), MarketSegment::Other);
        assert_eq!(MarketSegment::classify(Some("名証メイン")), MarketSegment::Other);
        assert_eq!(MarketSegment::classify(Some("")), MarketSegment::Other);
    }

    #[test]
    fn test_institutional_market() {
        assert!(is_institutional_market(Some("TOKYO PRO Market")));
        assert!(is_institutional_market(Some("東証プロマーケット")));
        assert!(!is_institutional_market(Some("東証プライム")));
        assert!(!is_institutional_market(Some("TSE Prime")));
        assert!(!is_institutional_market(None));
    }
}
