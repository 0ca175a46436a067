use std::collections::BTreeSet;

use serde_json::Value;

use sprig_core::models::milestone::Milestone;
use sprig_core::models::validation::ValidationReport;

/// Below this many valid observations a score is flagged as unreliable.
const MIN_RELIABLE_OBSERVATIONS: usize = 5;
/// Fewer distinct domains than this draws a coverage warning.
const MIN_DOMAIN_COVERAGE: usize = 2;

/// Structural validation of a raw observation collection, in the shape the
/// persistence layer stores it.
///
/// Hard errors (input is not a list; an achieved flag that is not a
/// boolean) mark the report invalid; soft issues (missing milestone or
/// flag, low sample size, low domain coverage) become warnings and the
/// element is simply skipped. Never panics — the caller renders the report
/// regardless of partial failure.
pub fn validate_responses(input: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut valid_observations = 0usize;
    let mut domains = BTreeSet::new();

    let Some(items) = input.as_array() else {
        errors.push("observations must be a list".to_string());
        return ValidationReport {
            valid: false,
            errors,
            warnings,
            valid_observations: 0,
            domains_observed: Vec::new(),
        };
    };

    for (index, item) in items.iter().enumerate() {
        let Some(milestone_value) = item.get("milestone") else {
            warnings.push(format!(
                "observation {index} has no milestone reference and was skipped"
            ));
            continue;
        };
        let milestone: Milestone = match serde_json::from_value(milestone_value.clone()) {
            Ok(milestone) => milestone,
            Err(err) => {
                warnings.push(format!(
                    "observation {index} has an unreadable milestone ({err}) and was skipped"
                ));
                continue;
            }
        };

        match item.get("achieved") {
            None | Some(Value::Null) => {
                warnings.push(format!(
                    "observation {index} has no achieved flag and was skipped"
                ));
            }
            Some(Value::Bool(_)) => {
                valid_observations += 1;
                domains.insert(milestone.domain);
            }
            Some(other) => {
                errors.push(format!(
                    "observation {index}: achieved must be a boolean, got {other}"
                ));
            }
        }
    }

    if valid_observations < MIN_RELIABLE_OBSERVATIONS {
        warnings.push(format!(
            "only {valid_observations} valid observations; scores from fewer than \
             {MIN_RELIABLE_OBSERVATIONS} items are unreliable"
        ));
    }
    if domains.len() < MIN_DOMAIN_COVERAGE {
        warnings.push(format!(
            "observations cover fewer than {MIN_DOMAIN_COVERAGE} developmental domains"
        ));
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        valid_observations,
        domains_observed: domains.into_iter().collect(),
    }
}
