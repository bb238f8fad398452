//! Integration tests for Value and Key
//!
//! Tests value kinds, numeric readings, and key normalization.

use cardfrp_foundation::{Key, Value, ValueKind};

// =============================================================================
// Value
// =============================================================================

#[test]
fn value_kinds() {
    assert_eq!(Value::from(3).kind(), ValueKind::Int);
    assert_eq!(Value::from("2D6").kind(), ValueKind::Formula);
    assert_eq!(Value::from(true).kind(), ValueKind::Flag);
}

#[test]
fn numeric_formula_text_reads_as_int() {
    assert_eq!(Value::from("666").as_int(), Some(666));
    assert_eq!(Value::from("-3").as_int(), Some(-3));
    assert_eq!(Value::from("D6").as_int(), None);
    assert_eq!(Value::from(false).as_int(), None);
}

#[test]
fn formula_reading() {
    assert_eq!(Value::from(47).as_formula().as_deref(), Some("47"));
    assert_eq!(Value::from("3-9").as_formula().as_deref(), Some("3-9"));
    assert!(Value::from(true).as_formula().is_none());
}

#[test]
fn flag_reading() {
    assert_eq!(Value::from(true).as_flag(), Some(true));
    assert_eq!(Value::from(1).as_flag(), None);
}

#[test]
fn value_display() {
    assert_eq!(Value::from(-12).to_string(), "-12");
    assert_eq!(Value::from("1D20").to_string(), "\"1D20\"");
}

// =============================================================================
// Key
// =============================================================================

#[test]
fn keys_are_normalized() {
    assert_eq!(Key::new("  resistance.verbal.bribe "), Key::new("RESISTANCE.VERBAL.BRIBE"));
    assert_eq!(Key::new("accuracy").as_str(), "ACCURACY");
}

#[test]
fn key_segments() {
    let key = Key::new("Resistance.Verbal.Bribe");
    assert_eq!(key.head(), "RESISTANCE");
    assert_eq!(key.segments().collect::<Vec<_>>(), ["RESISTANCE", "VERBAL", "BRIBE"]);
    assert_eq!(Key::new("EVASION").join("slash"), Key::new("EVASION.SLASH"));
}
