use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for an age-normalized z-score, plus a marker for
/// assessments with no scoreable observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterpretationLevel {
    /// z ≥ 1.0
    Advanced,
    /// z ≥ 0.5
    AboveTypical,
    /// z ≥ −0.5
    Typical,
    /// z ≥ −1.0
    Monitor,
    /// z ≥ −2.0
    Delayed,
    /// z < −2.0
    SignificantDelay,
    /// No scoreable observations.
    InsufficientData,
}

/// Human-readable reading of a score, produced alongside every ScoreResult.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: InterpretationLevel,
    pub description: String,
    pub recommendation: String,
}

/// Output of the score calculator for one assessment.
///
/// All numeric fields are `None` when the assessment had no scoreable
/// observations; that is a signaled degenerate case, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Developmental score, clamped to the configured plausible range.
    pub score: Option<f64>,
    /// Age-normalized z-score against the reference table.
    pub z_score: Option<f64>,
    /// Standard error of measurement for this score.
    pub sem: Option<f64>,
    /// Count of observations with a defined achieved flag.
    pub valid_observations: usize,
    /// Fraction of valid observations that were achieved.
    pub achieved_proportion: Option<f64>,
    pub interpretation: Interpretation,
}
