use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::NormsError;

/// One tabulated point on the normative curve: the expected developmental
/// score and its standard deviation at an age.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormPoint {
    pub age_months: f64,
    pub expected_score: f64,
    pub expected_sd: f64,
}

/// Sparse age-referenced normative table.
///
/// Invariants, enforced at construction: at least one point, strictly
/// increasing ages, non-decreasing expected scores, strictly positive SDs.
/// The score and SD curves are materialized once so the interpolator can
/// work over plain `(age, value)` slices.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    points: Vec<NormPoint>,
    score_curve: Vec<(f64, f64)>,
    sd_curve: Vec<(f64, f64)>,
}

impl ReferenceTable {
    pub fn new(mut points: Vec<NormPoint>) -> Result<Self, NormsError> {
        if points.is_empty() {
            return Err(NormsError::EmptyTable);
        }
        points.sort_by(|a, b| a.age_months.total_cmp(&b.age_months));

        for point in &points {
            let finite = point.age_months.is_finite()
                && point.expected_score.is_finite()
                && point.expected_sd.is_finite();
            if !finite {
                return Err(NormsError::NonFiniteValue {
                    age_months: point.age_months,
                });
            }
            if point.expected_sd <= 0.0 {
                return Err(NormsError::NonPositiveSd {
                    age_months: point.age_months,
                });
            }
        }
        for pair in points.windows(2) {
            if pair[1].age_months == pair[0].age_months {
                return Err(NormsError::DuplicateAge {
                    age_months: pair[1].age_months,
                });
            }
            if pair[1].expected_score < pair[0].expected_score {
                return Err(NormsError::DecreasingScore {
                    age_months: pair[1].age_months,
                });
            }
        }

        let score_curve = points
            .iter()
            .map(|p| (p.age_months, p.expected_score))
            .collect();
        let sd_curve = points.iter().map(|p| (p.age_months, p.expected_sd)).collect();

        Ok(Self {
            points,
            score_curve,
            sd_curve,
        })
    }

    pub fn points(&self) -> &[NormPoint] {
        &self.points
    }

    /// Age → expected score, sorted by age.
    pub fn score_curve(&self) -> &[(f64, f64)] {
        &self.score_curve
    }

    /// Age → expected SD, sorted by age.
    pub fn sd_curve(&self) -> &[(f64, f64)] {
        &self.sd_curve
    }

    /// The default table shipped with Sprig, derived from pooled normative
    /// milestone studies covering 1–60 months.
    pub fn bundled() -> &'static ReferenceTable {
        static TABLE: std::sync::LazyLock<ReferenceTable> = std::sync::LazyLock::new(|| {
            let points = [
                (1.0, 20.0, 3.5),
                (2.0, 23.0, 3.6),
                (3.0, 26.0, 3.8),
                (4.0, 29.0, 4.0),
                (6.0, 34.0, 4.2),
                (9.0, 39.0, 4.5),
                (12.0, 43.0, 4.8),
                (18.0, 50.0, 5.2),
                (24.0, 56.0, 5.6),
                (30.0, 60.0, 6.0),
                (36.0, 64.0, 6.3),
                (42.0, 67.0, 6.6),
                (48.0, 70.0, 6.8),
                (54.0, 72.0, 7.0),
                (60.0, 74.0, 7.2),
            ]
            .iter()
            .map(|&(age_months, expected_score, expected_sd)| NormPoint {
                age_months,
                expected_score,
                expected_sd,
            })
            .collect();

            ReferenceTable::new(points).expect("bundled reference table is valid")
        });
        &TABLE
    }
}
