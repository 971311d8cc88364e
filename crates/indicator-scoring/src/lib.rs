//! Indicator score calculators.
//!
//! Each calculator turns one raw metric into a 0-100 `IndicatorScore`. They
//! are total functions: any combination of missing or odd inputs yields a
//! defined score, never an error.

pub mod adjustment;
pub mod growth;
pub mod tags;
pub mod technical;
pub mod valuation;


pub use adjustment::apply_segment_multiplier;
pub use growth::{calculate_eps_cagr, calculate_eps_growth_score, calculate_roe_score};
pub use tags::{calculate_blended_tag_score, calculate_tag_score, tag_match_points};
pub use technical::{
    calculate_price_position, calculate_price_range_score, calculate_rsi_momentum_score,
    calculate_rsi_score, calculate_volume_surge_score,
};
pub use valuation::{
    calculate_pbr_score, calculate_per_score, calculate_ratio_score, calculate_sector_score,
};
