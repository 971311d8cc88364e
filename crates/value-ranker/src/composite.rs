//! Composite Scoring
//!
//! Two variants share the same skeleton:
//! 1. PER, PBR, static RSI and price-range scores for every stock
//! 2. Variant-specific extended scores
//! 3. Sector score as the mean of PER and PBR
//! 4. Weighted sum over the segment's weight row, normalized to [0, 1]

use indicator_scoring::{
    apply_segment_multiplier, calculate_blended_tag_score, calculate_eps_growth_score,
    calculate_pbr_score, calculate_per_score, calculate_price_range_score, calculate_roe_score,
    calculate_rsi_momentum_score, calculate_rsi_score, calculate_sector_score,
    calculate_tag_score, calculate_volume_surge_score,
};
use scoring_core::{
    CompositeScorer, IndicatorScore, MarketSegment, PeriodType, ScoringConfig, ScoringError,
    ScoringIndicator, SubScores, ValueStockScore,
};

/// Sub-scores every variant computes
struct CoreScores {
    per: IndicatorScore,
    pbr: IndicatorScore,
    rsi: IndicatorScore,
    price_range: IndicatorScore,
    sector: IndicatorScore,
}

fn core_scores(indicator: &ScoringIndicator, segment: MarketSegment, config: &ScoringConfig) -> CoreScores {
    let mut per = calculate_per_score(indicator.per, indicator.sector_avg_per, &config.per);
    let mut pbr = calculate_pbr_score(indicator.pbr, indicator.sector_avg_pbr, &config.pbr);
    let rsi = calculate_rsi_score(indicator.rsi, &config.rsi);
    let mut price_range = calculate_price_range_score(
        Some(indicator.current_price),
        indicator.period_high,
        indicator.period_low,
        &config.price_range,
    );

    // Only present in adjusted-weighting configs
    if let Some(m) = config.weighting.multipliers_for(segment) {
        per = apply_segment_multiplier(per, m.per);
        pbr = apply_segment_multiplier(pbr, m.pbr);
        price_range = apply_segment_multiplier(price_range, m.price_range);
    }

    CoreScores {
        per,
        pbr,
        rsi,
        price_range,
        sector: calculate_sector_score(per, pbr),
    }
}

fn finish(
    indicator: &ScoringIndicator,
    segment: MarketSegment,
    period: PeriodType,
    config: &ScoringConfig,
    scores: SubScores,
) -> Result<ValueStockScore, ScoringError> {
    let total_score = config.weighting.weights_for(segment).weighted_total(&scores)?;
    Ok(ValueStockScore {
        ticker: indicator.ticker.clone(),
        name: indicator.name.clone(),
        segment,
        period,
        scores,
        total_score,
    })
}

/// Swing-horizon scorer.
///
/// Adds RSI momentum and volume surge for every stock. EPS growth and theme
/// affinity only apply to the growth segment and are 0 elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidTermScorer;

impl CompositeScorer for MidTermScorer {
    fn period(&self) -> PeriodType {
        PeriodType::MidTerm
    }

    fn score(
        &self,
        indicator: &ScoringIndicator,
        segment: MarketSegment,
        config: &ScoringConfig,
    ) -> Result<ValueStockScore, ScoringError> {
        let core = core_scores(indicator, segment, config);
        let is_growth = segment == MarketSegment::Growth;

        let eps_growth = if is_growth {
            calculate_eps_growth_score(indicator.eps_latest, indicator.eps_three_years_ago)
        } else {
            IndicatorScore::ZERO
        };
        let tag = if is_growth {
            calculate_tag_score(&indicator.theme)
        } else {
            IndicatorScore::ZERO
        };

        let scores = SubScores {
            per: core.per,
            pbr: core.pbr,
            rsi: core.rsi,
            price_range: core.price_range,
            sector: core.sector,
            eps_growth: Some(eps_growth),
            rsi_momentum: Some(calculate_rsi_momentum_score(indicator.rsi_short, indicator.rsi)),
            volume_surge: Some(calculate_volume_surge_score(
                indicator.avg_volume_short,
                indicator.avg_volume_long,
            )),
            tag: Some(tag),
            roe: None,
        };
        finish(indicator, segment, self.period(), config, scores)
    }
}

/// Holding-horizon scorer. EPS growth, blended theme/macro affinity and ROE
/// apply to every segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongTermScorer;

impl CompositeScorer for LongTermScorer {
    fn period(&self) -> PeriodType {
        PeriodType::LongTerm
    }

    fn score(
        &self,
        indicator: &ScoringIndicator,
        segment: MarketSegment,
        config: &ScoringConfig,
    ) -> Result<ValueStockScore, ScoringError> {
        let core = core_scores(indicator, segment, config);

        let scores = SubScores {
            per: core.per,
            pbr: core.pbr,
            rsi: core.rsi,
            price_range: core.price_range,
            sector: core.sector,
            eps_growth: Some(calculate_eps_growth_score(
                indicator.eps_latest,
                indicator.eps_three_years_ago,
            )),
            rsi_momentum: None,
            volume_surge: None,
            tag: Some(calculate_blended_tag_score(&indicator.theme, &indicator.macro_env)),
            roe: Some(calculate_roe_score(indicator.roe, &config.roe)),
        };
        finish(indicator, segment, self.period(), config, scores)
    }
}

static MID_TERM: MidTermScorer = MidTermScorer;
static LONG_TERM: LongTermScorer = LongTermScorer;

pub fn scorer_for(period: PeriodType) -> &'static dyn CompositeScorer {
    match period {
        PeriodType::MidTerm => &MID_TERM,
        PeriodType::LongTerm => &LONG_TERM,
    }
}

/// Score a single stock.
///
/// Fails only when the indicator record is malformed; missing metrics are
/// resolved by the calculators.
pub fn score_stock(
    indicator: &ScoringIndicator,
    config: &ScoringConfig,
    period: PeriodType,
) -> Result<ValueStockScore, ScoringError> {
    indicator.validate()?;
    let segment = indicator.segment();
    scorer_for(period).score(indicator, segment, config)
}
