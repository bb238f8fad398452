//! Integration tests for verbs and compound verbs
//!
//! Tests splitting, normalization, and bonus-path derivation.

use cardfrp_foundation::{CompoundVerb, ErrorKind, Key, Verb};

#[test]
fn attack_detection_uses_base() {
    assert!(Verb::parse("ATTACK").unwrap().is_attack());
    assert!(Verb::parse("attack.bite").unwrap().is_attack());
    assert!(!Verb::parse("ATTACKER").unwrap().is_attack());
    assert!(!Verb::parse("MENTAL.ATTACK").unwrap().is_attack());
}

#[test]
fn keys_of_a_verb() {
    let verb = Verb::parse("Mental.Fear").unwrap();
    assert_eq!(verb.key(), Key::new("MENTAL.FEAR"));
    assert_eq!(verb.base_key(), Key::new("MENTAL"));
}

#[test]
fn bonus_paths_without_subtype() {
    let verb = Verb::parse("SEARCH").unwrap();
    assert_eq!(
        verb.bonus_keys("RESISTANCE"),
        [Key::new("RESISTANCE"), Key::new("RESISTANCE.SEARCH")]
    );
}

#[test]
fn attack_shorthand_only_for_attacks() {
    let attack = Verb::parse("ATTACK.twenty").unwrap();
    assert!(attack.bonus_keys("ACCURACY").contains(&Key::new("ACCURACY.TWENTY")));

    let effect = Verb::parse("MENTAL.FEAR").unwrap();
    assert!(!effect.bonus_keys("POWER").contains(&Key::new("POWER.FEAR")));
}

#[test]
fn compound_kinds() {
    let attack_only = CompoundVerb::parse("ATTACK.STAB+ATTACK.POISON").unwrap();
    assert!(attack_only.has_attack());
    assert!(!attack_only.has_effect());

    let effect_only = CompoundVerb::parse("VERBAL.BRIBE").unwrap();
    assert!(!effect_only.has_attack());
    assert!(effect_only.has_effect());
    assert_eq!(effect_only.len(), 1);
}

#[test]
fn legacy_list_separator_rejected() {
    let err = CompoundVerb::parse("ACTION,SECOND ACTION").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCompound { .. }));
}

#[test]
fn single_verb_converts_to_compound() {
    let compound = CompoundVerb::from(Verb::parse("PRAY").unwrap());
    assert_eq!(compound.components().len(), 1);
    assert_eq!(compound.to_string(), "PRAY");
}
