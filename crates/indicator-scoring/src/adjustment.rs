use scoring_core::IndicatorScore;

/// Scale a sub-score by a market segment multiplier and clamp back into range.
pub fn apply_segment_multiplier(score: IndicatorScore, factor: f64) -> IndicatorScore {
    IndicatorScore::clamped(score.value() * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_reclamps() {
        let score = IndicatorScore::new(90.0).unwrap();
        assert_eq!(apply_segment_multiplier(score, 1.2).value(), 100.0);
        assert_eq!(apply_segment_multiplier(score, 0.8).value(), 72.0);
        assert_eq!(apply_segment_multiplier(IndicatorScore::ZERO, 1.2).value(), 0.0);
    }
}
