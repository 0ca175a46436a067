use sprig_norms::ReferenceTable;
use sprig_scoring::{developmental_age, growth_chart, interpolate};

#[test]
fn tabulated_scores_invert_to_their_ages() {
    let table = ReferenceTable::bundled();
    for point in table.points() {
        let age = developmental_age(point.expected_score, table);
        assert!(
            (age - point.age_months).abs() < 1e-9,
            "score {} inverted to {age}, expected {}",
            point.expected_score,
            point.age_months
        );
    }
}

#[test]
fn intermediate_scores_invert_linearly() {
    let table = ReferenceTable::bundled();
    // Halfway between (18, 50) and (24, 56).
    assert!((developmental_age(53.0, table) - 21.0).abs() < 1e-9);
}

#[test]
fn inversion_round_trips_through_the_curve() {
    let table = ReferenceTable::bundled();
    for age in [3.0, 10.5, 27.0, 45.0] {
        let score = interpolate(age, table.score_curve());
        assert!((developmental_age(score, table) - age).abs() < 1e-9);
    }
}

#[test]
fn scores_below_the_table_extrapolate_at_half_rate() {
    let table = ReferenceTable::bundled();
    // Youngest point is (1, 20); 0.2 points below at 0.5 points/month.
    let age = developmental_age(19.8, table);
    assert!((age - 0.6).abs() < 1e-9);
}

#[test]
fn below_table_extrapolation_never_goes_negative() {
    let table = ReferenceTable::bundled();
    assert_eq!(developmental_age(0.0, table), 0.0);
}

#[test]
fn scores_above_the_table_extrapolate_at_the_slow_rate() {
    let table = ReferenceTable::bundled();
    // Oldest point is (60, 74); 3 points above at 0.3 points/month.
    let age = developmental_age(77.0, table);
    assert!((age - 70.0).abs() < 1e-9);
}

#[test]
fn growth_chart_emits_one_row_per_step() {
    let table = ReferenceTable::bundled();
    let rows = growth_chart(table, 12.0, 18.0, 1.0);
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].age_months, 12.0);
    assert_eq!(rows[6].age_months, 18.0);
}

#[test]
fn growth_chart_rows_match_the_curves() {
    let table = ReferenceTable::bundled();
    for row in growth_chart(table, 0.0, 60.0, 3.0) {
        let mean = interpolate(row.age_months, table.score_curve());
        let sd = interpolate(row.age_months, table.sd_curve());
        assert!((row.mean - mean).abs() < 1e-9);
        assert!((row.plus_one_sd - (mean + sd)).abs() < 1e-9);
        assert!((row.minus_one_sd - (mean - sd)).abs() < 1e-9);
        assert!((row.plus_two_sd - (mean + 2.0 * sd)).abs() < 1e-9);
        assert!((row.minus_two_sd - (mean - 2.0 * sd)).abs() < 1e-9);
    }
}

#[test]
fn growth_chart_with_a_step_that_overshoots_stops_before_the_end() {
    let table = ReferenceTable::bundled();
    let rows = growth_chart(table, 12.0, 17.0, 2.0);
    let ages: Vec<f64> = rows.iter().map(|r| r.age_months).collect();
    assert_eq!(ages, vec![12.0, 14.0, 16.0]);
}

#[test]
fn growth_chart_treats_non_positive_steps_as_one_month() {
    let table = ReferenceTable::bundled();
    let rows = growth_chart(table, 12.0, 15.0, 0.0);
    assert_eq!(rows.len(), 4);
}
