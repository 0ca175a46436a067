use sprig_core::models::comparison::{NormativeComparison, PercentileBand, PopulationStats};
use sprig_norms::ReferenceTable;

use crate::interpolate::interpolate;

/// Place a score against the age-expected reference population and,
/// optionally, against an externally supplied population. The external
/// z-score is only computed when that population's SD is positive.
pub fn compare_to_norms(
    score: f64,
    age_months: f64,
    reference: &ReferenceTable,
    population: Option<&PopulationStats>,
) -> NormativeComparison {
    let expected_score = interpolate(age_months, reference.score_curve());
    let expected_sd = interpolate(age_months, reference.sd_curve());

    let difference = score - expected_score;
    let z_score = difference / expected_sd;

    let population_z_score =
        population.and_then(|p| (p.sd > 0.0).then(|| (score - p.mean) / p.sd));

    let percentile = (normal_cdf(z_score).clamp(0.0, 1.0) * 100.0).round() as u8;

    NormativeComparison {
        expected_score,
        difference,
        z_score,
        population_z_score,
        percentile,
        band: band_for(percentile),
    }
}

/// Standard normal CDF via the Abramowitz–Stegun 26.2.17 rational
/// polynomial. Absolute error stays below ~1e-5 across the real line.
pub fn normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.2316419 * z.abs());
    let poly = t * (0.319381530
        + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));
    let tail = (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt() * poly;

    if z >= 0.0 { 1.0 - tail } else { tail }
}

fn band_for(percentile: u8) -> PercentileBand {
    match percentile {
        98..=100 => PercentileBand::Top2,
        90..=97 => PercentileBand::Top10,
        75..=89 => PercentileBand::UpperQuartile,
        25..=74 => PercentileBand::MiddleHalf,
        10..=24 => PercentileBand::LowerQuartile,
        2..=9 => PercentileBand::Bottom10,
        _ => PercentileBand::Bottom2,
    }
}
