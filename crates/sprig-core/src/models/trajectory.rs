use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scored assessment reduced to the fields the trajectory analyzer
/// needs, ordered by age within a TrajectoryResult.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryPoint {
    pub age_months: f64,
    pub score: f64,
    pub z_score: f64,
    pub observations: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<jiff::civil::Date>,
}

/// Qualitative band for trajectory velocity (score points per month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VelocityTrend {
    /// velocity > 0.5
    Accelerated,
    /// velocity > 0.1
    Normal,
    /// velocity > −0.1
    Stable,
    /// velocity ≤ −0.1
    Decelerated,
}

/// Development-over-time summary across repeated assessments.
///
/// `velocity` is `None` when fewer than two scored points were available;
/// `acceleration` additionally requires three.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryResult {
    pub points: Vec<TrajectoryPoint>,
    /// Score points per month, averaged over consecutive pairs.
    pub velocity: Option<f64>,
    /// Change in velocity per month, averaged; requires ≥3 points.
    pub acceleration: Option<f64>,
    pub trend: Option<VelocityTrend>,
    pub interpretation: String,
}
