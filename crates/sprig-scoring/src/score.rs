use sprig_core::models::assessment::Assessment;
use sprig_core::models::score::ScoreResult;
use sprig_norms::{ItemDifficultyModel, ReferenceTable};

use crate::difficulty::estimate_difficulty;
use crate::interpolate::interpolate;
use crate::interpret;

/// Tunable constants of the scoring model.
///
/// The published score is the age-expected value nudged by how far the
/// observed pass rate sits from the chance midpoint (0.5). This is a
/// deliberate simplification standing in for a full item-response ability
/// fit; downstream consumers depend on these numbers staying as they are.
#[derive(Debug, Clone)]
pub struct ScoringParams {
    /// Ability level item difficulties are compared against.
    pub baseline: f64,
    /// Score points per unit of pass-rate deviation from the midpoint.
    pub gain: f64,
    pub score_min: f64,
    pub score_max: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            gain: 20.0,
            score_min: 15.0,
            score_max: 85.0,
        }
    }
}

/// Score one assessment against the reference curves.
///
/// Observations without a defined achieved flag are skipped. An assessment
/// with no scoreable observations yields a result with every numeric field
/// `None` and an insufficient-data interpretation — a signaled degenerate
/// case, not an error.
pub fn score_assessment(
    assessment: &Assessment,
    reference: &ReferenceTable,
    difficulty: &ItemDifficultyModel,
    params: &ScoringParams,
) -> ScoreResult {
    let scoreable: Vec<_> = assessment
        .observations
        .iter()
        .filter(|o| o.achieved.is_some())
        .collect();
    let n = scoreable.len();

    if n == 0 {
        return ScoreResult {
            score: None,
            z_score: None,
            sem: None,
            valid_observations: 0,
            achieved_proportion: None,
            interpretation: interpret::insufficient_data(),
        };
    }

    let achieved = scoreable
        .iter()
        .filter(|o| o.achieved == Some(true))
        .count();
    let p = achieved as f64 / n as f64;

    // Per-item ability residuals. Not folded into the published score yet;
    // a future item-response fit will consume these.
    let _residual_ability: f64 = scoreable
        .iter()
        .filter(|o| o.achieved == Some(true))
        .map(|o| params.baseline - estimate_difficulty(&o.milestone, difficulty))
        .sum();

    let expected_score = interpolate(assessment.age_months, reference.score_curve());
    let expected_sd = interpolate(assessment.age_months, reference.sd_curve());
    debug_assert!(expected_sd > 0.0, "reference SDs are strictly positive");

    let score =
        (expected_score + (p - 0.5) * params.gain).clamp(params.score_min, params.score_max);
    let z_score = (score - expected_score) / expected_sd;
    let sem = expected_sd * (p * (1.0 - p) / n as f64).sqrt();

    ScoreResult {
        score: Some(score),
        z_score: Some(z_score),
        sem: Some(sem),
        valid_observations: n,
        achieved_proportion: Some(p),
        interpretation: interpret::classify(z_score, assessment.age_months),
    }
}
