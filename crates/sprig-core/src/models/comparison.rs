use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mean and standard deviation of an external comparison population.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PopulationStats {
    pub mean: f64,
    pub sd: f64,
}

/// Qualitative percentile band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PercentileBand {
    /// ≥ 98th percentile
    Top2,
    /// ≥ 90th percentile
    Top10,
    /// 75th–90th percentile
    UpperQuartile,
    /// 25th–75th percentile
    MiddleHalf,
    /// 10th–25th percentile
    LowerQuartile,
    /// 2nd–10th percentile
    Bottom10,
    /// < 2nd percentile
    Bottom2,
}

/// How a score sits against the age-expected reference population, and
/// optionally against an externally supplied population.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeComparison {
    /// Expected score at the child's age from the reference table.
    pub expected_score: f64,
    /// Raw difference: score − expected.
    pub difference: f64,
    /// Z-score against the age-expected reference.
    pub z_score: f64,
    /// Z-score against the external population, when one was supplied with
    /// a positive SD.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub population_z_score: Option<f64>,
    /// Normal-CDF percentile of the reference z-score, rounded to 0–100.
    pub percentile: u8,
    pub band: PercentileBand,
}
