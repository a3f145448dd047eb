use wardscore_core::models::observation::{ConsciousnessLevel, Observation, SupplementalO2};
use wardscore_engine::aggregate::aggregate;
use wardscore_engine::band::{select_band, suppressed};
use wardscore_engine::score_observation;
use wardscore_engine::scoring::{AggregateResult, ScoreResult, Zone};

fn agg_for(obs: &Observation) -> AggregateResult {
    aggregate(score_observation(obs))
}

/// Synthetic aggregate with zoneless parts, for exercising the additive
/// threshold ladder directly.
fn flat_aggregate(total: u8) -> AggregateResult {
    AggregateResult {
        total,
        any_escalation: false,
        any_missing: false,
        all_missing: false,
        parts: std::array::from_fn(|_| ScoreResult::in_range()),
    }
}

#[test]
fn total_sums_non_null_points() {
    // RR 30 (+3), SpO₂ 94 (+1), HR 95 (+1), rest absent
    let obs = Observation {
        respiratory_rate: Some(30.0),
        oxygen_saturation: Some(94.0),
        heart_rate: Some(95.0),
        ..Default::default()
    };
    let agg = agg_for(&obs);
    assert_eq!(agg.total, 5);
    assert!(agg.any_missing);
    assert!(!agg.all_missing);
    assert!(!agg.any_escalation);
}

#[test]
fn escalated_parts_contribute_nothing_to_total() {
    let obs = Observation {
        heart_rate: Some(35.0),
        oxygen_saturation: Some(94.0),
        ..Default::default()
    };
    let agg = agg_for(&obs);
    assert!(agg.any_escalation);
    assert_eq!(agg.total, 1);
    // Escalated parts are not "missing"
    assert_eq!(
        agg.parts.iter().filter(|p| p.is_missing()).count(),
        5
    );
}

#[test]
fn all_missing_only_when_every_part_is_absent() {
    let empty = Observation::default();
    assert!(agg_for(&empty).all_missing);

    let one_field = Observation {
        temperature: Some(37.0),
        ..Default::default()
    };
    let agg = agg_for(&one_field);
    assert!(!agg.all_missing);
    assert!(agg.any_missing);
}

#[test]
fn escalation_forces_blue_regardless_of_total() {
    let obs = Observation {
        heart_rate: Some(35.0),
        ..Default::default()
    };
    let agg = agg_for(&obs);
    assert_eq!(select_band(&agg, false), Zone::Blue);
    // Strict mode cannot gate an escalated record
    assert_eq!(select_band(&agg, true), Zone::Blue);
}

#[test]
fn total_of_ten_is_blue_without_any_blue_part() {
    // SpO₂ 91 (+3), Sup O₂ yes (+2), HR 45 (+3), Temp 34 (+2) = 10, worst zone Red
    let obs = Observation {
        respiratory_rate: Some(15.0),
        oxygen_saturation: Some(91.0),
        supplemental_o2: SupplementalO2::Yes,
        heart_rate: Some(45.0),
        systolic_bp: Some(120.0),
        temperature: Some(34.0),
        consciousness: ConsciousnessLevel::Alert,
    };
    let agg = agg_for(&obs);
    assert_eq!(agg.total, 10);
    assert!(!agg.any_escalation);
    assert!(agg.parts.iter().all(|p| p.zone < Zone::Blue));
    assert_eq!(select_band(&agg, false), Zone::Blue);
}

#[test]
fn worst_part_zone_beats_additive_thresholds_below_ten() {
    // RR 30 is Red on its own; total stays at 5
    let obs = Observation {
        respiratory_rate: Some(30.0),
        oxygen_saturation: Some(94.0),
        supplemental_o2: SupplementalO2::No,
        heart_rate: Some(95.0),
        systolic_bp: Some(150.0),
        temperature: Some(37.0),
        consciousness: ConsciousnessLevel::Alert,
    };
    let agg = agg_for(&obs);
    assert_eq!(agg.total, 5);
    assert_eq!(select_band(&agg, false), Zone::Red);
}

#[test]
fn additive_threshold_ladder() {
    assert_eq!(select_band(&flat_aggregate(0), false), Zone::None);
    assert_eq!(select_band(&flat_aggregate(1), false), Zone::Yellow);
    assert_eq!(select_band(&flat_aggregate(5), false), Zone::Yellow);
    assert_eq!(select_band(&flat_aggregate(6), false), Zone::Orange);
    assert_eq!(select_band(&flat_aggregate(7), false), Zone::Orange);
    assert_eq!(select_band(&flat_aggregate(8), false), Zone::Red);
    assert_eq!(select_band(&flat_aggregate(9), false), Zone::Red);
    assert_eq!(select_band(&flat_aggregate(10), false), Zone::Blue);
    assert_eq!(select_band(&flat_aggregate(15), false), Zone::Blue);
}

#[test]
fn strict_gate_suppresses_incomplete_records() {
    let partial = Observation {
        respiratory_rate: Some(30.0),
        ..Default::default()
    };
    let agg = agg_for(&partial);
    assert!(suppressed(&agg, true));
    assert_eq!(select_band(&agg, true), Zone::None);
    // Off strict, the same record bands normally
    assert!(!suppressed(&agg, false));
    assert_eq!(select_band(&agg, false), Zone::Red);
}

#[test]
fn empty_record_is_suppressed_in_both_modes() {
    let agg = agg_for(&Observation::default());
    assert!(suppressed(&agg, false));
    assert!(suppressed(&agg, true));
    assert_eq!(select_band(&agg, false), Zone::None);
}

#[test]
fn partial_data_can_still_reach_blue_without_strict() {
    // Only four fields present, but they sum to 10
    let obs = Observation {
        oxygen_saturation: Some(91.0),
        supplemental_o2: SupplementalO2::Yes,
        heart_rate: Some(45.0),
        temperature: Some(34.0),
        ..Default::default()
    };
    let agg = agg_for(&obs);
    assert!(agg.any_missing);
    assert_eq!(agg.total, 10);
    assert_eq!(select_band(&agg, false), Zone::Blue);
    assert_eq!(select_band(&agg, true), Zone::None);
}
