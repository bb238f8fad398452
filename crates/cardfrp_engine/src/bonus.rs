//! Attribute families and bonus-path lookups.

use cardfrp_dice::{DiceSum, Formula};
use cardfrp_foundation::{AttributeStore, ErrorContext, Result, Verb, sum_base_verb_subtype};

/// To-hit bonus for attack verbs.
pub const ACCURACY: &str = "ACCURACY";
/// Damage formula for attack verbs.
pub const DAMAGE: &str = "DAMAGE";
/// To-hit bonus for non-attack verbs.
pub const POWER: &str = "POWER";
/// Stack formula for non-attack verbs.
pub const STACKS: &str = "STACKS";
/// Per-stack defence against non-attack verbs.
pub const RESISTANCE: &str = "RESISTANCE";
/// Defence against an attack landing.
pub const EVASION: &str = "EVASION";
/// Damage absorbed from a landed attack.
pub const PROTECTION: &str = "PROTECTION";

/// Current life points.
pub const LIFE: &str = "LIFE";
/// Maximum life points.
pub const HP: &str = "HP";
/// Search progress on a concealed object, and the verb that raises it.
pub const SEARCH: &str = "SEARCH";

/// Families that only ever modify resolution; no verb may change them.
pub const BONUS_FAMILIES: [&str; 7] = [
    ACCURACY, DAMAGE, POWER, STACKS, RESISTANCE, EVASION, PROTECTION,
];

/// Returns true if `name` is one of [`BONUS_FAMILIES`].
#[must_use]
pub fn is_bonus_family(name: &str) -> bool {
    BONUS_FAMILIES.iter().any(|family| family.eq_ignore_ascii_case(name))
}

/// Sums a numeric family over the verb's bonus paths.
///
/// # Errors
/// Returns `TypeMismatch` if a contributing value is not numeric.
pub fn bonus_sum(store: &AttributeStore, family: &str, verb: &Verb) -> Result<i64> {
    sum_base_verb_subtype(store, family, verb)
}

/// Collects the formulas a family declares over the verb's bonus paths.
///
/// # Errors
/// Returns a formula error naming the offending key.
pub fn bonus_dice(store: &AttributeStore, family: &str, verb: &Verb) -> Result<DiceSum> {
    let mut sum = DiceSum::new();
    for key in verb.bonus_keys(family) {
        if let Some(value) = store.get(&key) {
            let formula = Formula::try_from(value)
                .map_err(|err| err.with_context(ErrorContext::new().with_frame(key.as_str())))?;
            sum.push(formula);
        }
    }
    Ok(sum)
}
