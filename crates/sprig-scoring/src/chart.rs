use sprig_core::models::chart::GrowthChartPoint;
use sprig_norms::ReferenceTable;

use crate::interpolate::interpolate;

/// Expected-score band series over an age range, one row per `step` months
/// (non-positive steps fall back to 1.0), inclusive of `max_age` when the
/// step lands on it. Each row carries the mean and ±1/±2 SD bounds for band
/// rendering.
pub fn growth_chart(
    reference: &ReferenceTable,
    min_age: f64,
    max_age: f64,
    step: f64,
) -> Vec<GrowthChartPoint> {
    if !(min_age.is_finite() && max_age.is_finite()) {
        return Vec::new();
    }
    let step = if step > 0.0 && step.is_finite() { step } else { 1.0 };

    let mut points = Vec::new();
    let mut index = 0u32;
    loop {
        let age_months = min_age + f64::from(index) * step;
        if age_months > max_age + 1e-9 {
            break;
        }
        let mean = interpolate(age_months, reference.score_curve());
        let sd = interpolate(age_months, reference.sd_curve());
        points.push(GrowthChartPoint {
            age_months,
            mean,
            minus_two_sd: mean - 2.0 * sd,
            minus_one_sd: mean - sd,
            plus_one_sd: mean + sd,
            plus_two_sd: mean + 2.0 * sd,
        });
        index += 1;
    }
    points
}
