//! Integration tests for rolling
//!
//! Tests bounds, coverage, and reproducibility of the seeded roller.

use std::collections::BTreeSet;

use cardfrp_dice::{DiceRoller, DiceSum, Formula};

fn seen(formula: &str, rolls: usize, seed: u64) -> BTreeSet<i64> {
    let formula = Formula::parse(formula).unwrap();
    let mut roller = DiceRoller::seeded(seed);
    (0..rolls).map(|_| roller.roll(&formula)).collect()
}

#[test]
fn three_d4_covers_three_to_twelve() {
    let values = seen("3D4", 5_000, 1);
    assert_eq!(values, (3..=12).collect());
}

#[test]
fn range_covers_endpoints() {
    let values = seen("3-9", 2_000, 2);
    assert_eq!(values, (3..=9).collect());
}

#[test]
fn constants_never_vary() {
    assert_eq!(seen("-3", 100, 3), BTreeSet::from([-3]));
    assert_eq!(seen("47", 100, 4), BTreeSet::from([47]));
}

#[test]
fn seeded_rollers_are_reproducible() {
    let sum = DiceSum::parse_all(["2D6+1", "3-9", "D%"]).unwrap();
    let mut a = DiceRoller::seeded(2024);
    let mut b = DiceRoller::seeded(2024);
    for _ in 0..100 {
        assert_eq!(a.roll_sum(&sum), b.roll_sum(&sum));
    }
}

#[test]
fn entropy_rollers_stay_in_bounds() {
    let formula = Formula::parse("4D6").unwrap();
    let mut roller = DiceRoller::from_entropy();
    assert_eq!(roller.seed(), None);
    for _ in 0..200 {
        let rolled = roller.roll(&formula);
        assert!((4..=24).contains(&rolled));
    }
}

mod properties {
    use cardfrp_dice::{DiceRoller, Formula};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dice_rolls_within_bounds(count in 1u32..20, faces in 1u32..100, modifier in 0i64..50, seed: u64) {
            let formula = Formula::parse(&format!("{count}D{faces}+{modifier}")).unwrap();
            let (low, high) = formula.bounds();
            let rolled = DiceRoller::seeded(seed).roll(&formula);
            prop_assert!((low..=high).contains(&rolled));
        }

        #[test]
        fn ranges_roll_within_bounds(low in 0u32..1000, span in 0u32..1000, seed: u64) {
            let high = low + span;
            let formula = Formula::parse(&format!("{low}-{high}")).unwrap();
            let rolled = DiceRoller::seeded(seed).roll(&formula);
            prop_assert!((i64::from(low)..=i64::from(high)).contains(&rolled));
        }
    }
}
