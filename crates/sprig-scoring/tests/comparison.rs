use sprig_core::models::comparison::{PercentileBand, PopulationStats};
use sprig_norms::ReferenceTable;
use sprig_scoring::compare::normal_cdf;
use sprig_scoring::compare_to_norms;

#[test]
fn normal_cdf_matches_known_values() {
    assert!((normal_cdf(0.0) - 0.5).abs() < 1e-5);
    assert!((normal_cdf(1.0) - 0.841_34).abs() < 1e-4);
    assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
    assert!((normal_cdf(-1.96) - 0.025).abs() < 1e-4);
    assert!(normal_cdf(6.0) > 0.999_99);
    assert!(normal_cdf(-6.0) < 1e-5);
}

#[test]
fn expected_score_at_age_lands_on_the_median() {
    // Expected at 24 months is 56.
    let comparison = compare_to_norms(56.0, 24.0, ReferenceTable::bundled(), None);
    assert_eq!(comparison.expected_score, 56.0);
    assert_eq!(comparison.difference, 0.0);
    assert_eq!(comparison.z_score, 0.0);
    assert_eq!(comparison.percentile, 50);
    assert_eq!(comparison.band, PercentileBand::MiddleHalf);
    assert!(comparison.population_z_score.is_none());
}

#[test]
fn two_sds_above_expected_lands_near_the_98th_percentile() {
    // 56 + 2 * 5.6.
    let comparison = compare_to_norms(67.2, 24.0, ReferenceTable::bundled(), None);
    assert!((comparison.z_score - 2.0).abs() < 1e-9);
    assert!(comparison.percentile >= 97 && comparison.percentile <= 98);
    assert_eq!(comparison.band, PercentileBand::Top2);
}

#[test]
fn two_sds_below_expected_lands_near_the_2nd_percentile() {
    let comparison = compare_to_norms(44.8, 24.0, ReferenceTable::bundled(), None);
    assert!((comparison.z_score + 2.0).abs() < 1e-9);
    assert!(comparison.percentile <= 3);
}

#[test]
fn external_population_yields_a_secondary_z_score() {
    let population = PopulationStats { mean: 60.0, sd: 10.0 };
    let comparison = compare_to_norms(66.0, 24.0, ReferenceTable::bundled(), Some(&population));
    let population_z = comparison.population_z_score.unwrap();
    assert!((population_z - 0.6).abs() < 1e-9);
}

#[test]
fn non_positive_external_sd_is_ignored() {
    let population = PopulationStats { mean: 60.0, sd: 0.0 };
    let comparison = compare_to_norms(66.0, 24.0, ReferenceTable::bundled(), Some(&population));
    assert!(comparison.population_z_score.is_none());
}

#[test]
fn percentile_bands_cover_the_whole_range() {
    let table = ReferenceTable::bundled();
    let cases = [
        (2.5, PercentileBand::Top2),
        (1.5, PercentileBand::Top10),
        (0.8, PercentileBand::UpperQuartile),
        (0.0, PercentileBand::MiddleHalf),
        (-0.8, PercentileBand::LowerQuartile),
        (-1.5, PercentileBand::Bottom10),
        (-2.5, PercentileBand::Bottom2),
    ];
    for (z, band) in cases {
        let score = 56.0 + z * 5.6;
        let comparison = compare_to_norms(score, 24.0, table, None);
        assert_eq!(comparison.band, band, "z = {z}");
    }
}
