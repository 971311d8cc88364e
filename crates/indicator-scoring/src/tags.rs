use scoring_core::{IndicatorScore, TagExposure};

const THEME_BLEND: f64 = 0.6;
const MACRO_BLEND: f64 = 0.4;

/// Points for a number of distinct tag matches
pub fn tag_match_points(matches: usize) -> f64 {
    match matches {
        0 => 0.0,
        1 => 15.0,
        2 => 30.0,
        _ => 50.0,
    }
}

/// Affinity of a stock's tags to the current environment, centered on 50.
pub fn calculate_tag_score(exposure: &TagExposure) -> IndicatorScore {
    let favorable = tag_match_points(exposure.favorable_matches());
    let unfavorable = tag_match_points(exposure.unfavorable_matches());
    IndicatorScore::clamped(50.0 + favorable - unfavorable)
}

/// Theme and macro affinity blended 60/40.
pub fn calculate_blended_tag_score(theme: &TagExposure, macro_env: &TagExposure) -> IndicatorScore {
    let theme_score = calculate_tag_score(theme).value();
    let macro_score = calculate_tag_score(macro_env).value();
    IndicatorScore::clamped(theme_score * THEME_BLEND + macro_score * MACRO_BLEND)
}
