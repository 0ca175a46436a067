use sprig_norms::ReferenceTable;

/// Score-points-per-month slope assumed below the youngest tabulated age.
/// Heuristic, not fitted to data.
const SLOPE_BELOW: f64 = 0.5;
/// Slope assumed above the oldest tabulated age. Heuristic, not fitted.
const SLOPE_ABOVE: f64 = 0.3;

/// Invert the reference curve: the age at which the population-expected
/// score equals `score`.
///
/// Scores outside the tabulated range extend the curve with the fixed
/// heuristic slopes above; a known limitation of the model. Results never
/// go below age 0.
pub fn developmental_age(score: f64, reference: &ReferenceTable) -> f64 {
    let curve = reference.score_curve();
    let (Some(&(min_age, min_score)), Some(&(max_age, max_score))) =
        (curve.first(), curve.last())
    else {
        return 0.0;
    };

    if score <= min_score {
        return (min_age - (min_score - score) / SLOPE_BELOW).max(0.0);
    }
    if score >= max_score {
        return max_age + (score - max_score) / SLOPE_ABOVE;
    }

    for pair in curve.windows(2) {
        let (age_lo, score_lo) = pair[0];
        let (age_hi, score_hi) = pair[1];
        if score >= score_lo && score <= score_hi {
            if score_hi == score_lo {
                // Flat stretch: report the earliest age attaining the score.
                return age_lo;
            }
            let t = (score - score_lo) / (score_hi - score_lo);
            return age_lo + t * (age_hi - age_lo);
        }
    }

    max_age
}
