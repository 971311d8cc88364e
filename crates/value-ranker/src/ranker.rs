//! Value Stock Ranking Module
//!
//! Runs the selection pipeline over a batch of indicator snapshots. Each
//! stock is evaluated independently, so evaluation fans out across the rayon
//! thread pool; the immutable config is shared by reference.

use rayon::prelude::*;
use scoring_core::segment::is_institutional_market;
use scoring_core::{PeriodType, ScoringConfig, ScoringIndicator, ValueStockScore};
use std::sync::Arc;
use trap_screen::{TrapStockCheckResult, TrapStockScreen};

use crate::composite::scorer_for;
use crate::models::{RankingOutcome, ScoringFailure};

/// Per-stock result of the parallel stage
enum Evaluation {
    Scored(ValueStockScore),
    Trap(TrapStockCheckResult),
    Invalid(ScoringFailure),
}

/// Ranks stocks for one period type
#[derive(Debug, Clone)]
pub struct ValueStockRanker {
    config: Arc<ScoringConfig>,
    period: PeriodType,
    trap_screen: TrapStockScreen,
}

impl ValueStockRanker {
    /// `config` must already be validated for `period`.
    pub fn new(config: Arc<ScoringConfig>, period: PeriodType) -> Self {
        let trap_screen = TrapStockScreen::new(config.trap);
        Self {
            config,
            period,
            trap_screen,
        }
    }

    pub fn period(&self) -> PeriodType {
        self.period
    }

    /// Rank a batch and keep the best `limit` stocks.
    pub fn rank(&self, indicators: &[ScoringIndicator], limit: usize) -> RankingOutcome {
        let mut outcome = RankingOutcome::new(self.period);

        let candidates: Vec<&ScoringIndicator> = indicators
            .iter()
            .filter(|indicator| {
                if is_institutional_market(indicator.market.as_deref()) {
                    tracing::debug!("Skipping {}: institutional-only market", indicator.ticker);
                    outcome.institutional_excluded.push(indicator.ticker.clone());
                    false
                } else {
                    true
                }
            })
            .collect();

        let evaluations: Vec<Evaluation> = candidates
            .par_iter()
            .map(|indicator| self.evaluate(indicator))
            .collect();

        let mut scored = Vec::with_capacity(evaluations.len());
        for evaluation in evaluations {
            match evaluation {
                Evaluation::Scored(score) => scored.push(score),
                Evaluation::Trap(result) => outcome.traps.push(result),
                Evaluation::Invalid(failure) => outcome.failures.push(failure),
            }
        }

        outcome.scored_count = scored.len();
        outcome.ranked = select_top(scored, limit);

        tracing::info!(
            "Ranked {} {} stocks: {} scored, {} institutional, {} traps, {} invalid, kept top {}",
            indicators.len(),
            self.period,
            outcome.scored_count,
            outcome.institutional_excluded.len(),
            outcome.traps.len(),
            outcome.failures.len(),
            outcome.ranked.len()
        );

        outcome
    }

    fn evaluate(&self, indicator: &ScoringIndicator) -> Evaluation {
        if let Err(e) = indicator.validate() {
            tracing::warn!("Failed to score {}: {}", indicator.ticker, e);
            return Evaluation::Invalid(ScoringFailure {
                ticker: indicator.ticker.clone(),
                error: e.to_string(),
            });
        }

        let segment = indicator.segment();

        let check = self.trap_screen.check(indicator, segment);
        if check.is_trap {
            return Evaluation::Trap(check);
        }

        match scorer_for(self.period).score(indicator, segment, &self.config) {
            Ok(score) => Evaluation::Scored(score),
            Err(e) => {
                tracing::warn!("Failed to score {}: {}", indicator.ticker, e);
                Evaluation::Invalid(ScoringFailure {
                    ticker: indicator.ticker.clone(),
                    error: e.to_string(),
                })
            }
        }
    }
}

/// Sort by total score descending, ties by ticker ascending, and keep `limit`.
pub fn select_top(mut scores: Vec<ValueStockScore>, limit: usize) -> Vec<ValueStockScore> {
    scores.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });
    scores.truncate(limit);
    scores
}

/// Rank a batch with a validated config and return only the top stocks.
pub fn rank_top_stocks(
    indicators: &[ScoringIndicator],
    config: &ScoringConfig,
    period: PeriodType,
    limit: usize,
) -> Vec<ValueStockScore> {
    ValueStockRanker::new(Arc::new(config.clone()), period)
        .rank(indicators, limit)
        .ranked
}
