use scoring_core::interpolate::{piecewise, scale_to_percent};
use scoring_core::{IndicatorScore, PriceRangeThresholds, RsiThresholds, RSI_CEILING};

/// Momentum spread (short RSI minus long RSI) mapped onto the full 0-100 scale
const MOMENTUM_SPAN: f64 = 30.0;

/// Static RSI score. Oversold stocks score high, missing RSI scores 0.
pub fn calculate_rsi_score(rsi: Option<f64>, thresholds: &RsiThresholds) -> IndicatorScore {
    let Some(rsi) = rsi else {
        return IndicatorScore::ZERO;
    };
    let raw = piecewise(
        rsi,
        &[
            (thresholds.oversold, 100.0),
            (thresholds.neutral, 50.0),
            (RSI_CEILING, 0.0),
        ],
    );
    IndicatorScore::clamped(raw)
}

/// Position of `price` inside `[low, high]` in percent.
///
/// `None` when any input is missing, the range is empty, or the price lies
/// outside the range.
pub fn calculate_price_position(price: Option<f64>, high: Option<f64>, low: Option<f64>) -> Option<f64> {
    let (price, high, low) = (price?, high?, low?);
    if (high - low).abs() < f64::EPSILON || price < low || price > high {
        return None;
    }
    Some((price - low) / (high - low) * 100.0)
}

/// Score how close the price sits to the bottom of its period range.
pub fn calculate_price_range_score(
    price: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    thresholds: &PriceRangeThresholds,
) -> IndicatorScore {
    let Some(position) = calculate_price_position(price, high, low) else {
        return IndicatorScore::ZERO;
    };
    let raw = piecewise(
        position,
        &[(thresholds.bottom, 100.0), (thresholds.low, 50.0), (100.0, 0.0)],
    );
    IndicatorScore::clamped(raw)
}

/// Short-window RSI against long-window RSI. Missing either side is neutral.
pub fn calculate_rsi_momentum_score(short_rsi: Option<f64>, long_rsi: Option<f64>) -> IndicatorScore {
    match (short_rsi, long_rsi) {
        (Some(short), Some(long)) => {
            IndicatorScore::clamped(scale_to_percent(short - long, -MOMENTUM_SPAN, MOMENTUM_SPAN))
        }
        _ => IndicatorScore::NEUTRAL,
    }
}

/// Short-window average volume against long-window average volume.
///
/// Twice the usual volume or more scores 100, half or less scores 0.
pub fn calculate_volume_surge_score(avg_volume_short: Option<f64>, avg_volume_long: Option<f64>) -> IndicatorScore {
    match (avg_volume_short, avg_volume_long) {
        (Some(short), Some(long)) if long > 0.0 => {
            let ratio = short / long;
            IndicatorScore::clamped(piecewise(ratio, &[(0.5, 0.0), (1.0, 50.0), (2.0, 100.0)]))
        }
        _ => IndicatorScore::NEUTRAL,
    }
}
