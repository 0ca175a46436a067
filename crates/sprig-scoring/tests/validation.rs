use serde_json::json;

use sprig_core::models::milestone::DevelopmentalDomain;
use sprig_scoring::validate_responses;

fn observation_json(domain: &str, achieved: serde_json::Value) -> serde_json::Value {
    json!({
        "milestone": {
            "domain": domain,
            "description": "a milestone",
            "typical_age_months": 12.0,
        },
        "achieved": achieved,
    })
}

#[test]
fn non_list_input_is_a_hard_error() {
    let report = validate_responses(&json!({"observations": []}));
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("list"));
    assert_eq!(report.valid_observations, 0);
}

#[test]
fn empty_list_is_valid_but_warned() {
    let report = validate_responses(&json!([]));
    assert!(report.valid);
    assert!(report.errors.is_empty());
    // Too few observations and too few domains.
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn well_formed_observations_pass_without_warnings() {
    let items: Vec<_> = (0..5)
        .map(|i| {
            let domain = if i % 2 == 0 { "language" } else { "gross_motor" };
            observation_json(domain, json!(i % 2 == 0))
        })
        .collect();
    let report = validate_responses(&json!(items));

    assert!(report.valid);
    assert!(report.warnings.is_empty());
    assert_eq!(report.valid_observations, 5);
    assert_eq!(
        report.domains_observed,
        vec![
            DevelopmentalDomain::GrossMotor,
            DevelopmentalDomain::Language
        ]
    );
}

#[test]
fn missing_milestone_is_a_warning_not_an_error() {
    let report = validate_responses(&json!([{"achieved": true}]));
    assert!(report.valid);
    assert!(report.warnings.iter().any(|w| w.contains("milestone")));
    assert_eq!(report.valid_observations, 0);
}

#[test]
fn unreadable_milestone_is_a_warning() {
    let report = validate_responses(&json!([
        {"milestone": {"domain": "not_a_domain"}, "achieved": true}
    ]));
    assert!(report.valid);
    assert!(report.warnings.iter().any(|w| w.contains("unreadable")));
    assert_eq!(report.valid_observations, 0);
}

#[test]
fn missing_achieved_flag_is_a_warning() {
    let report = validate_responses(&json!([
        observation_json("language", serde_json::Value::Null)
    ]));
    assert!(report.valid);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("achieved flag")));
    assert_eq!(report.valid_observations, 0);
}

#[test]
fn non_boolean_achieved_flag_is_a_hard_error() {
    let report = validate_responses(&json!([observation_json("language", json!(1))]));
    assert!(!report.valid);
    assert!(report.errors[0].contains("boolean"));
    assert_eq!(report.valid_observations, 0);
}

#[test]
fn bad_elements_do_not_stop_the_rest() {
    let report = validate_responses(&json!([
        observation_json("language", json!("yes")),
        observation_json("social", json!(true)),
        observation_json("cognitive", json!(false)),
    ]));

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.valid_observations, 2);
    assert_eq!(
        report.domains_observed,
        vec![DevelopmentalDomain::Social, DevelopmentalDomain::Cognitive]
    );
}

#[test]
fn single_domain_coverage_is_warned() {
    let items: Vec<_> = (0..6)
        .map(|_| observation_json("language", json!(true)))
        .collect();
    let report = validate_responses(&json!(items));

    assert!(report.valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("domains"));
}
