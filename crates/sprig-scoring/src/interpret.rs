use sprig_core::models::score::{Interpretation, InterpretationLevel};

/// Map an age-normalized z-score to its qualitative band. Bands are
/// evaluated top-down; the first match wins.
pub fn classify(z_score: f64, age_months: f64) -> Interpretation {
    let age = format_age(age_months);

    if z_score >= 1.0 {
        Interpretation {
            level: InterpretationLevel::Advanced,
            description: format!("Development is well ahead of what is typical at {age}."),
            recommendation: "Continue current activities and offer more challenging play."
                .to_string(),
        }
    } else if z_score >= 0.5 {
        Interpretation {
            level: InterpretationLevel::AboveTypical,
            description: format!("Development is somewhat ahead of what is typical at {age}."),
            recommendation: "Continue current activities.".to_string(),
        }
    } else if z_score >= -0.5 {
        Interpretation {
            level: InterpretationLevel::Typical,
            description: format!("Development is in the typical range for {age}."),
            recommendation: "No action needed; keep observing at routine intervals.".to_string(),
        }
    } else if z_score >= -1.0 {
        Interpretation {
            level: InterpretationLevel::Monitor,
            description: format!("Development is slightly behind what is typical at {age}."),
            recommendation: "Re-assess in two to three months and enrich play in the weaker domains."
                .to_string(),
        }
    } else if z_score >= -2.0 {
        Interpretation {
            level: InterpretationLevel::Delayed,
            description: format!("Development is behind what is typical at {age}."),
            recommendation: "Discuss these results with a pediatric provider.".to_string(),
        }
    } else {
        Interpretation {
            level: InterpretationLevel::SignificantDelay,
            description: format!("Development is well behind what is typical at {age}."),
            recommendation: "Refer for a formal developmental evaluation.".to_string(),
        }
    }
}

/// Interpretation attached to a result with no scoreable observations.
pub fn insufficient_data() -> Interpretation {
    Interpretation {
        level: InterpretationLevel::InsufficientData,
        description: "Not enough observations to compute a score.".to_string(),
        recommendation: "Record more milestone observations and score again.".to_string(),
    }
}

/// Format a fractional age in months as "2 years 3 months" / "9 months".
pub fn format_age(age_months: f64) -> String {
    let whole_months = age_months.max(0.0).round() as i64;
    let years = whole_months / 12;
    let months = whole_months % 12;

    match (years, months) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
