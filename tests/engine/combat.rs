//! Integration tests for attacks against actors

use cardfrp_dice::Formula;
use cardfrp_engine::{Actor, Entity, Initiator, ResolutionConfig, Resolver};

fn fixed_check(value: i64) -> Resolver {
    Resolver::seeded(0).with_config(ResolutionConfig::default().with_check_die(Formula::Constant(value)))
}

fn sword(damage: &str) -> Entity {
    Entity::new("sword")
        .with_verb("ATTACK")
        .unwrap()
        .with_attribute("DAMAGE", damage)
}

#[test]
fn hit_reports_damage_and_life() {
    let hero = Actor::new("hero");
    let mut troll = Actor::new("troll")
        .with_life(12)
        .with_hp(12)
        .with_attribute("PROTECTION", 1);
    let action = sword("5").possible_actions().unwrap().remove(0);

    let resolution = action
        .act(&mut fixed_check(1), &Initiator::of(&hero), &mut troll)
        .unwrap();

    assert!(resolution.succeeded);
    assert_eq!(troll.life().unwrap(), 8);
    assert_eq!(
        resolution.deliveries[0].message,
        "troll hit by ATTACK from hero using sword for 5-1 life-points\n    troll life: 12 - 4 = 8"
    );
}

#[test]
fn evasion_leaves_life_untouched() {
    let hero = Actor::new("hero");
    let mut rogue = Actor::new("rogue").with_life(6).with_attribute("EVASION", 50);
    let action = sword("5").possible_actions().unwrap().remove(0);

    let resolution = action
        .act(&mut fixed_check(50), &Initiator::of(&hero), &mut rogue)
        .unwrap();

    assert!(!resolution.succeeded);
    assert_eq!(resolution.deliveries[0].message, "rogue evades sword ATTACK");
    assert_eq!(rogue.life().unwrap(), 6);
}

#[test]
fn protection_absorbing_everything_still_lands() {
    let hero = Actor::new("hero");
    let mut golem = Actor::new("golem").with_life(30).with_attribute("PROTECTION", 20);
    let action = sword("5").possible_actions().unwrap().remove(0);

    let resolution = action
        .act(&mut fixed_check(1), &Initiator::of(&hero), &mut golem)
        .unwrap();

    assert!(resolution.succeeded);
    assert_eq!(golem.life().unwrap(), 30);
}

#[test]
fn death_is_reported_once() {
    let hero = Actor::new("hero");
    let mut rat = Actor::new("rat").with_life(3);
    let action = sword("10").possible_actions().unwrap().remove(0);
    let mut resolver = fixed_check(1);

    let first = action.act(&mut resolver, &Initiator::of(&hero), &mut rat).unwrap();
    assert!(first.deliveries[0].message.ends_with("rat life: 3 - 10 = -7, and is killed"));
    assert!(!rat.is_alive());
    assert!(rat.is_incapacitated());

    let second = action.act(&mut resolver, &Initiator::of(&hero), &mut rat).unwrap();
    assert!(!second.deliveries[0].message.contains("killed"));
    assert!(!rat.is_alive());
}

#[test]
fn initiator_damage_paths_add_to_the_weapon() {
    let hero = Actor::new("hero")
        .with_attribute("DAMAGE", 2)
        .with_attribute("DAMAGE.ATTACK", 3);
    let mut dummy = Actor::new("dummy").with_life(100);
    let action = sword("4").possible_actions().unwrap().remove(0);

    let resolution = action
        .act(&mut fixed_check(1), &Initiator::of(&hero), &mut dummy)
        .unwrap();

    assert_eq!(resolution.deliveries[0].total, 9);
    assert_eq!(dummy.life().unwrap(), 91);
}

#[test]
fn interactions_offer_verbal_verbs() {
    let innkeeper = Actor::new("innkeeper")
        .with_interaction("GREET")
        .with_interaction("BARTER");
    let offer = innkeeper.interactions().unwrap();

    assert_eq!(offer.name(), "interactions with innkeeper");
    let verbs: Vec<_> = offer
        .possible_actions()
        .unwrap()
        .iter()
        .map(|action| action.verb().to_string())
        .collect();
    assert_eq!(verbs, ["VERBAL.GREET", "VERBAL.BARTER"]);
}
