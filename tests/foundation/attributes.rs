//! Integration tests for AttributeStore
//!
//! Tests defaults, numeric arithmetic, and bonus-path sums.

use cardfrp_foundation::{AttributeStore, ErrorKind, Value, Verb, sum_base_verb_subtype};

#[test]
fn defaults_when_absent() {
    let store = AttributeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.int("ACCURACY", 0).unwrap(), 0);
    assert_eq!(store.int("STACKS", 1).unwrap(), 1);
    assert_eq!(store.get_or("DAMAGE", 0), Value::Int(0));
}

#[test]
fn set_returns_previous() {
    let mut store = AttributeStore::new();
    assert_eq!(store.set("LIFE", 10), None);
    assert_eq!(store.set("life", 8), Some(Value::Int(10)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.remove("LIFE"), Some(Value::Int(8)));
    assert!(!store.contains("LIFE"));
}

#[test]
fn flags_are_not_numbers() {
    let store = AttributeStore::new().with("EVASION", true);
    let err = store.int("EVASION", 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn evasion_sums_for_attack_subtype() {
    let store = AttributeStore::new()
        .with("EVASION", 5)
        .with("EVASION.ATTACK", 1)
        .with("EVASION.ATTACK.SLASH", 2)
        .with("EVASION.SLASH", 3)
        .with("EVASION.STAB", 100);
    let verb = Verb::parse("ATTACK.slash").unwrap();
    assert_eq!(sum_base_verb_subtype(&store, "EVASION", &verb).unwrap(), 11);
}

#[test]
fn snapshot_survives_mutation() {
    let mut store = AttributeStore::new().with("POWER", 4);
    let snapshot = store.clone();
    store.add("POWER", 6).unwrap();
    assert_eq!(snapshot.int("POWER", 0).unwrap(), 4);
    assert_eq!(store.int("POWER", 0).unwrap(), 10);
}
