use crate::{MarketSegment, PeriodType, ScoringConfig, ScoringError, ScoringIndicator, ValueStockScore};

/// Trait for composite scoring variants
///
/// Implementations are pure: the same indicator, segment and config always
/// produce the same score, so a batch can be scored from any number of
/// threads at once.
pub trait CompositeScorer: Send + Sync {
    fn period(&self) -> PeriodType;

    /// Score an already validated indicator whose segment was classified by
    /// the caller.
    fn score(
        &self,
        indicator: &ScoringIndicator,
        segment: MarketSegment,
        config: &ScoringConfig,
    ) -> Result<ValueStockScore, ScoringError>;
}
