use sprig_core::models::assessment::Assessment;
use sprig_core::models::trajectory::{TrajectoryPoint, TrajectoryResult, VelocityTrend};
use sprig_norms::{ItemDifficultyModel, ReferenceTable};

use crate::score::{ScoringParams, score_assessment};

/// |acceleration| above this earns a pace remark in the narrative.
const ACCELERATION_REMARK_THRESHOLD: f64 = 0.1;

/// Score each assessment, then analyze the resulting points. Assessments
/// with no scoreable observations are dropped before analysis.
pub fn analyze_assessments(
    assessments: &[Assessment],
    reference: &ReferenceTable,
    difficulty: &ItemDifficultyModel,
    params: &ScoringParams,
) -> TrajectoryResult {
    let points = assessments
        .iter()
        .filter_map(|assessment| {
            let result = score_assessment(assessment, reference, difficulty, params);
            match (result.score, result.z_score) {
                (Some(score), Some(z_score)) => Some(TrajectoryPoint {
                    age_months: assessment.age_months,
                    score,
                    z_score,
                    observations: result.valid_observations,
                    date: assessment.date_administered,
                }),
                _ => None,
            }
        })
        .collect();

    analyze_points(points)
}

/// Velocity and acceleration of development across scored points.
///
/// Points are sorted by age; velocity is the mean of Δscore/Δage over
/// consecutive pairs, acceleration (three or more points) the mean of
/// Δvelocity divided by the later pair's age gap. Spacing between ages may
/// be arbitrary. Fewer than two usable points yields an explicit
/// insufficient-data result.
pub fn analyze_points(mut points: Vec<TrajectoryPoint>) -> TrajectoryResult {
    points.sort_by(|a, b| a.age_months.total_cmp(&b.age_months));

    if points.len() < 2 {
        return TrajectoryResult {
            points,
            velocity: None,
            acceleration: None,
            trend: None,
            interpretation: "At least two scored assessments are needed to analyze a trajectory."
                .to_string(),
        };
    }

    // Pairs at the same age carry no rate information and are skipped.
    let mut velocities = Vec::new();
    let mut age_gaps = Vec::new();
    for pair in points.windows(2) {
        let delta_age = pair[1].age_months - pair[0].age_months;
        if delta_age <= 0.0 {
            continue;
        }
        velocities.push((pair[1].score - pair[0].score) / delta_age);
        age_gaps.push(delta_age);
    }

    if velocities.is_empty() {
        return TrajectoryResult {
            points,
            velocity: None,
            acceleration: None,
            trend: None,
            interpretation: "All assessments share one age; no trajectory can be computed."
                .to_string(),
        };
    }

    let velocity = velocities.iter().sum::<f64>() / velocities.len() as f64;

    let acceleration = if points.len() >= 3 && velocities.len() >= 2 {
        let changes: Vec<f64> = (0..velocities.len() - 1)
            .map(|i| (velocities[i + 1] - velocities[i]) / age_gaps[i + 1])
            .collect();
        Some(changes.iter().sum::<f64>() / changes.len() as f64)
    } else {
        None
    };

    let trend = classify_velocity(velocity);
    let interpretation = describe(velocity, trend, acceleration);

    TrajectoryResult {
        points,
        velocity: Some(velocity),
        acceleration,
        trend: Some(trend),
        interpretation,
    }
}

fn classify_velocity(velocity: f64) -> VelocityTrend {
    if velocity > 0.5 {
        VelocityTrend::Accelerated
    } else if velocity > 0.1 {
        VelocityTrend::Normal
    } else if velocity > -0.1 {
        VelocityTrend::Stable
    } else {
        VelocityTrend::Decelerated
    }
}

fn describe(velocity: f64, trend: VelocityTrend, acceleration: Option<f64>) -> String {
    let mut text = match trend {
        VelocityTrend::Accelerated => format!(
            "Development is progressing faster than typical ({velocity:.2} points/month)."
        ),
        VelocityTrend::Normal => {
            format!("Development is progressing at a typical rate ({velocity:.2} points/month).")
        }
        VelocityTrend::Stable => {
            format!("The score is holding steady ({velocity:.2} points/month).")
        }
        VelocityTrend::Decelerated => format!(
            "The score is declining relative to age expectations ({velocity:.2} points/month)."
        ),
    };

    if let Some(acceleration) = acceleration
        && acceleration.abs() > ACCELERATION_REMARK_THRESHOLD
    {
        if acceleration > 0.0 {
            text.push_str(" The pace is picking up.");
        } else {
            text.push_str(" The pace is slowing.");
        }
    }

    text
}
