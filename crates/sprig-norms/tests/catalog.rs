use std::collections::BTreeSet;

use sprig_core::models::milestone::DevelopmentalDomain;
use sprig_norms::catalog;

#[test]
fn bundled_catalog_spans_every_domain() {
    let domains: BTreeSet<_> = catalog::bundled().iter().map(|m| m.domain).collect();
    assert_eq!(domains.len(), DevelopmentalDomain::ALL.len());
}

#[test]
fn catalog_ages_are_plausible() {
    for milestone in catalog::bundled() {
        assert!(
            milestone.typical_age_months > 0.0 && milestone.typical_age_months <= 60.0,
            "{} has typical age {}",
            milestone.description,
            milestone.typical_age_months
        );
        assert!(!milestone.description.is_empty());
    }
}

#[test]
fn domain_filter_returns_only_that_domain() {
    let gross_motor = catalog::for_domain(DevelopmentalDomain::GrossMotor);
    assert!(!gross_motor.is_empty());
    assert!(
        gross_motor
            .iter()
            .all(|m| m.domain == DevelopmentalDomain::GrossMotor)
    );
}
