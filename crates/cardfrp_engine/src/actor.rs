//! Actors: entities that can be attacked, hurt and killed.

use tracing::debug;

use cardfrp_foundation::{AttributeStore, ContextId, Key, Result, Value, Verb};

use crate::action::Delivery;
use crate::bonus::{EVASION, HP, LIFE, PROTECTION, bonus_sum};
use crate::config::ResolutionConfig;
use crate::entity::Entity;
use crate::participant::{Participant, Reception};
use crate::resolver::Resolver;

/// Base verb of the social interactions an actor offers.
pub const VERBAL: &str = "VERBAL";

/// A character: an entity with life, status flags and a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    entity: Entity,
    alive: bool,
    incapacitated: bool,
    context: Option<ContextId>,
    interactions: Vec<String>,
}

impl Actor {
    /// Creates a living, able actor with no location.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_entity(Entity::new(name))
    }

    /// Wraps an existing entity.
    #[must_use]
    pub fn from_entity(entity: Entity) -> Self {
        Self {
            entity,
            alive: true,
            incapacitated: false,
            context: None,
            interactions: Vec::new(),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.entity.set(key, value);
        self
    }

    /// Builder method to set `LIFE`.
    #[must_use]
    pub fn with_life(self, life: i64) -> Self {
        self.with_attribute(LIFE, life)
    }

    /// Builder method to set `HP`, the ceiling on `LIFE`.
    #[must_use]
    pub fn with_hp(self, hp: i64) -> Self {
        self.with_attribute(HP, hp)
    }

    /// Builder method to carry an object.
    #[must_use]
    pub fn with_object(mut self, object: Entity) -> Self {
        self.entity.add_object(object);
        self
    }

    /// Builder method to offer a social interaction (`BRIBE`, `FLATTER`).
    #[must_use]
    pub fn with_interaction(mut self, interaction: impl Into<String>) -> Self {
        self.interactions.push(interaction.into());
        self
    }

    /// Returns the underlying entity.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the underlying entity for modification.
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// False once `LIFE` has dropped to zero or below.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True once `LIFE` has dropped to zero or below.
    #[must_use]
    pub fn is_incapacitated(&self) -> bool {
        self.incapacitated
    }

    /// Current `LIFE` (zero when undeclared).
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `LIFE` is not numeric.
    pub fn life(&self) -> Result<i64> {
        self.entity.attributes().int(LIFE, 0)
    }

    /// Maximum `LIFE`, if declared.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `HP` is not numeric.
    pub fn hp(&self) -> Result<Option<i64>> {
        self.entity.attributes().int_opt(HP)
    }

    /// The context this actor is in.
    #[must_use]
    pub fn context(&self) -> Option<ContextId> {
        self.context
    }

    /// Moves this actor. Membership lists are kept by the context.
    pub fn set_context(&mut self, context: Option<ContextId>) {
        self.context = context;
    }

    /// Declared social interactions.
    #[must_use]
    pub fn interaction_names(&self) -> &[String] {
        &self.interactions
    }

    /// Builds the entity through which another actor interacts with this
    /// one: it offers `VERBAL.<X>` for each declared interaction.
    ///
    /// # Errors
    /// Returns `InvalidCompound` if an interaction name is not a valid
    /// sub-type.
    pub fn interactions(&self) -> Result<Entity> {
        self.interactions.iter().try_fold(
            Entity::new(format!("interactions with {}", self.entity.name())),
            |offer, interaction| offer.with_verb(&format!("{VERBAL}.{interaction}")),
        )
    }

    fn receive_attack(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver) -> Result<Reception> {
        let verb = delivery.verb;
        let name = self.entity.name().to_string();

        let evasion = bonus_sum(self.entity.attributes(), EVASION, verb)?;
        let roll = resolver.check();
        if roll + evasion >= delivery.to_hit {
            debug!(recipient = %name, verb = %verb, roll, evasion, to_hit = delivery.to_hit, "evaded");
            return Ok(Reception::failure(format!(
                "{name} evades {} {verb}",
                delivery.source
            )));
        }

        let protection = bonus_sum(self.entity.attributes(), PROTECTION, verb)?;
        let damage = (delivery.total - protection).max(0);
        let mut message = format!(
            "{name} hit by {verb} from {} using {} for {}-{protection} life-points",
            delivery.initiator, delivery.source, delivery.total
        );

        // An actor without LIFE has nothing to lose.
        let Some(old) = self.entity.attributes().int_opt(LIFE)? else {
            debug!(recipient = %name, verb = %verb, damage, "hit, no life points");
            return Ok(Reception::success(message));
        };

        let was_alive = self.alive;
        let mut new = old;
        if damage > 0 {
            new = old - damage;
            if let Some(hp) = self.hp()? {
                new = new.min(hp);
            }
            self.entity.set(LIFE, new);
            self.refresh_status(new);
        }
        debug!(recipient = %name, verb = %verb, damage, life = new, alive = self.alive, "hit");

        message.push_str(&format!("\n    {name} life: {old} - {damage} = {new}"));
        if was_alive && !self.alive {
            message.push_str(", and is killed");
        }
        Ok(Reception::success(message))
    }

    fn refresh_status(&mut self, life: i64) {
        if life <= 0 {
            self.alive = false;
            self.incapacitated = true;
        }
    }
}

impl Participant for Actor {
    fn name(&self) -> &str {
        self.entity.name()
    }

    fn attributes(&self) -> &AttributeStore {
        self.entity.attributes()
    }

    fn check_verb(&self, verb: &Verb, config: &ResolutionConfig) -> Result<()> {
        if verb.is_attack() {
            return Ok(());
        }
        self.entity.check_verb(verb, config)
    }

    fn accept_action(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver) -> Result<Reception> {
        if delivery.verb.is_attack() {
            return self.receive_attack(delivery, resolver);
        }
        let reception = self.entity.receive_effect(delivery, resolver)?;
        if let Some(life) = self.entity.attributes().int_opt(LIFE)? {
            self.refresh_status(life);
        }
        Ok(reception)
    }
}
