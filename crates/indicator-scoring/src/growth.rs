use scoring_core::interpolate::piecewise;
use scoring_core::{IndicatorScore, RoeThresholds};

/// ROE score. Missing ROE is neutral rather than penalized.
pub fn calculate_roe_score(roe: Option<f64>, thresholds: &RoeThresholds) -> IndicatorScore {
    let Some(roe) = roe else {
        return IndicatorScore::NEUTRAL;
    };
    let raw = piecewise(
        roe,
        &[
            (thresholds.low, 0.0),
            (thresholds.medium, 50.0),
            (thresholds.high, 100.0),
        ],
    );
    IndicatorScore::clamped(raw)
}

/// Three-period compound annual EPS growth in percent.
///
/// Undefined for a non-positive base or a negative latest EPS: a swing into
/// losses has no growth rate.
pub fn calculate_eps_cagr(eps_latest: Option<f64>, eps_three_years_ago: Option<f64>) -> Option<f64> {
    let (latest, base) = (eps_latest?, eps_three_years_ago?);
    if base <= 0.0 || latest < 0.0 {
        return None;
    }
    Some(((latest / base).powf(1.0 / 3.0) - 1.0) * 100.0)
}

pub fn calculate_eps_growth_score(eps_latest: Option<f64>, eps_three_years_ago: Option<f64>) -> IndicatorScore {
    match calculate_eps_cagr(eps_latest, eps_three_years_ago) {
        None => IndicatorScore::NEUTRAL,
        Some(cagr) if cagr < 0.0 => IndicatorScore::ZERO,
        Some(cagr) => IndicatorScore::clamped(piecewise(cagr, &[(0.0, 0.0), (10.0, 50.0), (20.0, 100.0)])),
    }
}
