//! Seeded resolutions replay exactly

use cardfrp::engine::{Actor, Entity, Initiator, Resolution, Resolver};

fn skirmish(seed: u64) -> (Vec<Resolution>, i64) {
    let axe = Entity::new("axe")
        .with_verb("ATTACK.chop+MENTAL.FEAR")
        .unwrap()
        .with_attribute("DAMAGE", "2D6+1")
        .with_attribute("STACKS.MENTAL", "1-4");
    let action = axe.possible_actions().unwrap().remove(0);
    let hero = Actor::new("hero").with_attribute("ACCURACY", 15);
    let mut troll = Actor::new("troll")
        .with_life(60)
        .with_hp(60)
        .with_attribute("EVASION", 20)
        .with_attribute("RESISTANCE", 30);

    let mut resolver = Resolver::seeded(seed);
    let resolutions = (0..10)
        .map(|_| action.act(&mut resolver, &Initiator::of(&hero), &mut troll).unwrap())
        .collect();
    (resolutions, troll.life().unwrap())
}

#[test]
fn same_seed_same_story() {
    let (a, life_a) = skirmish(42);
    let (b, life_b) = skirmish(42);
    assert_eq!(a, b);
    assert_eq!(life_a, life_b);
}

#[test]
fn totals_stay_within_formula_bounds() {
    let (resolutions, _) = skirmish(7);
    for record in resolutions.iter().flat_map(|r| &r.deliveries) {
        if record.verb.is_attack() {
            assert!((3..=13).contains(&record.total), "{}", record.total);
            assert_eq!(record.to_hit, 115);
        } else {
            assert!((1..=4).contains(&record.total), "{}", record.total);
        }
    }
}
