use wardscore_core::models::observation::{
    ConsciousnessLevel, Observation, SupplementalO2, fmt_value, parse_numeric,
};
use wardscore_core::models::parameter::ParameterKind;

#[test]
fn empty_and_whitespace_parse_to_absent() {
    assert_eq!(parse_numeric(""), None);
    assert_eq!(parse_numeric("   "), None);
    assert_eq!(parse_numeric("\t"), None);
}

#[test]
fn garbage_parses_to_absent_not_error() {
    assert_eq!(parse_numeric("abc"), None);
    assert_eq!(parse_numeric("12abc"), None);
    assert_eq!(parse_numeric("--"), None);
    assert_eq!(parse_numeric("NaN"), None);
}

#[test]
fn numbers_parse_with_surrounding_whitespace() {
    assert_eq!(parse_numeric("12"), Some(12.0));
    assert_eq!(parse_numeric(" 37.5 "), Some(37.5));
    assert_eq!(parse_numeric("-2"), Some(-2.0));
}

#[test]
fn integral_values_format_without_fraction() {
    assert_eq!(fmt_value(94.0), "94");
    assert_eq!(fmt_value(37.5), "37.5");
    assert_eq!(fmt_value(0.0), "0");
}

#[test]
fn supplemental_o2_tokens() {
    assert_eq!(SupplementalO2::from_str(""), Some(SupplementalO2::Unset));
    assert_eq!(SupplementalO2::from_str("no"), Some(SupplementalO2::No));
    assert_eq!(SupplementalO2::from_str("Yes"), Some(SupplementalO2::Yes));
    assert_eq!(SupplementalO2::from_str("maybe"), None);
}

#[test]
fn consciousness_accepts_letters_and_words() {
    assert_eq!(
        ConsciousnessLevel::from_str("a"),
        Some(ConsciousnessLevel::Alert)
    );
    assert_eq!(
        ConsciousnessLevel::from_str("V"),
        Some(ConsciousnessLevel::Voice)
    );
    assert_eq!(
        ConsciousnessLevel::from_str("fitting"),
        Some(ConsciousnessLevel::Fitting)
    );
    assert_eq!(
        ConsciousnessLevel::from_str(""),
        Some(ConsciousnessLevel::Unset)
    );
    assert_eq!(ConsciousnessLevel::from_str("x"), None);
}

#[test]
fn set_numeric_field_is_lenient() {
    let mut obs = Observation::default();
    obs.set(ParameterKind::RespiratoryRate, "30").unwrap();
    assert_eq!(obs.respiratory_rate, Some(30.0));

    obs.set(ParameterKind::RespiratoryRate, "garbage").unwrap();
    assert_eq!(obs.respiratory_rate, None);

    obs.set(ParameterKind::Temperature, "37.5").unwrap();
    assert_eq!(obs.temperature, Some(37.5));

    obs.set(ParameterKind::Temperature, "").unwrap();
    assert_eq!(obs.temperature, None);
}

#[test]
fn set_enum_field_rejects_unknown_tokens() {
    let mut obs = Observation::default();
    obs.set(ParameterKind::Consciousness, "u").unwrap();
    assert_eq!(obs.consciousness, ConsciousnessLevel::Unresponsive);

    assert!(obs.set(ParameterKind::Consciousness, "zzz").is_err());
    assert!(obs.set(ParameterKind::SupplementalO2, "maybe").is_err());

    obs.set(ParameterKind::SupplementalO2, "yes").unwrap();
    assert_eq!(obs.supplemental_o2, SupplementalO2::Yes);
}

#[test]
fn parameter_order_and_ids_are_fixed() {
    let ids: Vec<&str> = ParameterKind::ALL.iter().map(|k| k.id()).collect();
    assert_eq!(ids, ["rr", "spo2", "o2", "hr", "sbp", "temp", "avpu"]);

    for (i, kind) in ParameterKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
        assert_eq!(ParameterKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(ParameterKind::from_id("nope"), None);
}

#[test]
fn field_text_round_trips_display_values() {
    let mut obs = Observation::default();
    assert_eq!(obs.field_text(ParameterKind::HeartRate), "");
    assert_eq!(obs.field_text(ParameterKind::Consciousness), "");

    obs.set(ParameterKind::HeartRate, "95").unwrap();
    obs.set(ParameterKind::Consciousness, "p").unwrap();
    obs.set(ParameterKind::SupplementalO2, "no").unwrap();
    assert_eq!(obs.field_text(ParameterKind::HeartRate), "95");
    assert_eq!(obs.field_text(ParameterKind::Consciousness), "P");
    assert_eq!(obs.field_text(ParameterKind::SupplementalO2), "No");
}
