//! Integration tests for nested contexts and the world arena

use cardfrp_dice::Formula;
use cardfrp_engine::{Actor, Context, Entity, ResolutionConfig, Resolver, Target, World};
use cardfrp_foundation::{ContextId, ErrorKind, Value};

fn fixed_check(value: i64) -> Resolver {
    Resolver::seeded(0).with_config(ResolutionConfig::default().with_check_die(Formula::Constant(value)))
}

/// realm > village > tavern
fn kingdom() -> (World, ContextId, ContextId, ContextId) {
    let mut world = World::new();
    let realm = world.add_context(
        Context::new("realm")
            .with_attribute("CURRENCY", "gold")
            .with_attribute("LAW", 5)
            .with_verb("PRAY")
            .unwrap(),
    );
    let village = world
        .add_context_within(
            Context::new("village")
                .with_attribute("LAW", 2)
                .with_verb("TRADE")
                .unwrap()
                .with_verb("PRAY")
                .unwrap(),
            realm,
        )
        .unwrap();
    let tavern = world
        .add_context_within(Context::new("tavern").with_verb("DRINK").unwrap(), village)
        .unwrap();
    (world, realm, village, tavern)
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn attributes_inherit_from_the_nearest_ancestor() {
    let (world, realm, _, tavern) = kingdom();
    assert_eq!(world.int(tavern, "LAW", 0).unwrap(), 2);
    assert_eq!(world.int(realm, "LAW", 0).unwrap(), 5);
    assert_eq!(world.get(tavern, "CURRENCY", 0).unwrap(), Value::from("gold"));
    assert_eq!(world.get(tavern, "MAGIC", 7).unwrap(), Value::Int(7));
    assert!(world.lookup(tavern, "MAGIC").unwrap().is_none());
}

#[test]
fn actions_collect_up_the_chain_once() {
    let (world, _, _, tavern) = kingdom();
    let verbs: Vec<_> = world
        .possible_actions(tavern)
        .unwrap()
        .iter()
        .map(|action| (action.verb().to_string(), action.source().to_string()))
        .collect();
    assert_eq!(
        verbs,
        [
            ("DRINK".to_string(), "tavern".to_string()),
            ("TRADE".to_string(), "village".to_string()),
            ("PRAY".to_string(), "village".to_string()),
        ]
    );
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn reparenting_cannot_form_a_cycle() {
    let (mut world, realm, _, tavern) = kingdom();
    let err = world.set_parent(realm, Some(tavern)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContextCycle { .. }));
    assert_eq!(world.context(realm).unwrap().parent(), None);

    let err = world.set_parent(realm, Some(realm)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContextCycle { .. }));
}

#[test]
fn detaching_stops_inheritance() {
    let (mut world, _, _, tavern) = kingdom();
    world.set_parent(tavern, None).unwrap();
    assert_eq!(world.ancestors(tavern).unwrap(), [tavern]);
    assert_eq!(world.int(tavern, "LAW", 0).unwrap(), 0);
}

#[test]
fn dangling_handles_are_errors() {
    let (world, ..) = kingdom();
    let mut bigger = World::new();
    for _ in 0..10 {
        bigger.add_context(Context::new("filler"));
    }
    let dangling = bigger.add_context(Context::new("far away"));
    let err = world.int(dangling, "LAW", 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContextNotFound(_)));
}

// =============================================================================
// Membership and search
// =============================================================================

#[test]
fn placing_actors_updates_both_sides() {
    let (mut world, _, village, tavern) = kingdom();
    let hero = world.add_actor(Actor::new("hero"));
    let barkeep = world.add_actor(Actor::new("barkeep"));

    world.place_member(hero, village).unwrap();
    world.place_npc(barkeep, tavern).unwrap();

    assert_eq!(world.context(village).unwrap().party(), &[hero]);
    assert_eq!(world.context(tavern).unwrap().npcs(), &[barkeep]);
    assert_eq!(world.actor(hero).unwrap().context(), Some(village));
    assert_eq!(world.actor(barkeep).unwrap().context(), Some(tavern));
}

#[test]
fn searching_a_context_reveals_what_it_hides() {
    let (mut world, _, _, tavern) = kingdom();
    world
        .context_mut(tavern)
        .unwrap()
        .entity_mut()
        .add_object(Entity::new("loose floorboard").with_attribute("RESISTANCE.SEARCH", 10));
    let hero = world.add_actor(Actor::new("hero"));
    let search = Entity::new("eyes")
        .with_verb("SEARCH")
        .unwrap()
        .possible_actions()
        .unwrap()
        .remove(0);

    let resolution = world
        .take_action(hero, &search, Target::Context(tavern), &mut fixed_check(1))
        .unwrap();

    assert!(resolution.succeeded);
    let tavern = world.context(tavern).unwrap();
    assert!(!tavern.entity().object("floorboard").unwrap().is_hidden(1).unwrap());
}
