use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of a growth chart: the expected score at an age with ±1 and ±2
/// SD bounds, ready for band rendering by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrowthChartPoint {
    pub age_months: f64,
    pub mean: f64,
    pub minus_two_sd: f64,
    pub minus_one_sd: f64,
    pub plus_one_sd: f64,
    pub plus_two_sd: f64,
}
