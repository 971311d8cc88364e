use scoring_core::interpolate::{mean, piecewise};
use scoring_core::{IndicatorScore, RatioThresholds, RATIO_CEILING};

/// Score a valuation multiple relative to its sector average.
///
/// `ratio = metric / sector_avg * 100`. At or below `excellent` the stock is
/// cheap (100), at `good` it is fairly priced (50), at 150% it scores 0.
/// A missing or non-positive operand scores 0.
pub fn calculate_ratio_score(
    metric: Option<f64>,
    sector_avg: Option<f64>,
    thresholds: &RatioThresholds,
) -> IndicatorScore {
    let (Some(metric), Some(avg)) = (metric, sector_avg) else {
        return IndicatorScore::ZERO;
    };
    if metric <= 0.0 || avg <= 0.0 {
        return IndicatorScore::ZERO;
    }

    let ratio = metric / avg * 100.0;
    let raw = piecewise(
        ratio,
        &[
            (thresholds.excellent, 100.0),
            (thresholds.good, 50.0),
            (RATIO_CEILING, 0.0),
        ],
    );
    IndicatorScore::clamped_rounded(raw)
}

pub fn calculate_per_score(
    per: Option<f64>,
    sector_avg_per: Option<f64>,
    thresholds: &RatioThresholds,
) -> IndicatorScore {
    calculate_ratio_score(per, sector_avg_per, thresholds)
}

pub fn calculate_pbr_score(
    pbr: Option<f64>,
    sector_avg_pbr: Option<f64>,
    thresholds: &RatioThresholds,
) -> IndicatorScore {
    calculate_ratio_score(pbr, sector_avg_pbr, thresholds)
}

/// Valuation relative to the sector: mean of the PER and PBR sub-scores.
pub fn calculate_sector_score(per_score: IndicatorScore, pbr_score: IndicatorScore) -> IndicatorScore {
    IndicatorScore::clamped(mean(&[per_score.value(), pbr_score.value()]))
}
