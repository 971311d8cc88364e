//! Value Stock Ranker
//!
//! Combines indicator sub-scores into a composite value score and ranks a
//! batch of stocks: institutional-market exclusion, trap screening, scoring,
//! then a descending sort cut to the top N.

pub mod composite;
pub mod models;
pub mod ranker;

pub use composite::{score_stock, scorer_for, LongTermScorer, MidTermScorer};
pub use models::{RankingOutcome, ScoringFailure};
pub use ranker::{rank_top_stocks, select_top, ValueStockRanker};
