//! Entities: anything with attributes that can offer or receive actions.
//!
//! An entity declares compound verbs (the actions it enables), owns the
//! entities it contains, and handles every verb that is not an attack by
//! adjusting one attribute stack by stack:
//!
//! ```text
//! RESISTANCE = Σ RESISTANCE bonus paths
//! min(check) + RESISTANCE >= to_hit       -> fully resisted, nothing rolled
//! for each of min(|total|, stack_limit) stacks:
//!     check + RESISTANCE >= to_hit        -> blocked
//!     otherwise                           -> delivered
//! affected attribute += sign(total) * delivered
//! ```

use tracing::{debug, trace, warn};

use cardfrp_foundation::{
    AttributeStore, CompoundVerb, Error, Key, Result, Value, Verb,
};

use crate::action::{Action, Delivery, Slot};
use crate::bonus::{
    ACCURACY, DAMAGE, HP, LIFE, POWER, RESISTANCE, SEARCH, STACKS, bonus_dice, bonus_sum,
    is_bonus_family,
};
use crate::config::{AffectedAttribute, ResolutionConfig};
use crate::participant::{Participant, Reception};
use crate::resolver::Resolver;

/// Which contained entities to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Not concealed, or concealed but already found.
    Visible,
    /// Concealed and not yet found.
    Hidden,
}

/// A named bag of attributes that offers and receives actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    name: String,
    description: Option<String>,
    attributes: AttributeStore,
    verbs: Vec<CompoundVerb>,
    objects: Vec<Entity>,
}

impl Entity {
    /// Creates an entity with no attributes, verbs or contents.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Builder method to set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Builder method to declare a compound verb.
    ///
    /// # Errors
    /// Returns `InvalidCompound` if the verb is malformed.
    pub fn with_verb(mut self, verb: &str) -> Result<Self> {
        self.add_verb(CompoundVerb::parse(verb)?);
        Ok(self)
    }

    /// Builder method to add a contained entity.
    #[must_use]
    pub fn with_object(mut self, object: Entity) -> Self {
        self.add_object(object);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the attributes.
    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Returns the attributes for modification.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Looks up one attribute.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Sets one attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.set(key, value)
    }

    /// Returns the declared compound verbs in order.
    #[must_use]
    pub fn verbs(&self) -> &[CompoundVerb] {
        &self.verbs
    }

    /// Declares another compound verb.
    pub fn add_verb(&mut self, verb: CompoundVerb) {
        self.verbs.push(verb);
    }

    // -------------------------------------------------------------------------
    // Contents
    // -------------------------------------------------------------------------

    /// Returns every contained entity in order.
    #[must_use]
    pub fn contents(&self) -> &[Entity] {
        &self.objects
    }

    /// Returns every contained entity for modification.
    pub fn contents_mut(&mut self) -> &mut [Entity] {
        &mut self.objects
    }

    /// Adds a contained entity.
    pub fn add_object(&mut self, object: Entity) {
        self.objects.push(object);
    }

    /// Returns the first contained entity whose name contains `name`.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&Entity> {
        self.objects.iter().find(|object| object.name.contains(name))
    }

    /// Mutable form of [`object`](Self::object).
    pub fn object_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.objects.iter_mut().find(|object| object.name.contains(name))
    }

    /// Lists contained entities using the default reveal threshold.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if a contained entity's `RESISTANCE.SEARCH` or
    /// `SEARCH` is not numeric.
    pub fn objects(&self, visibility: Visibility) -> Result<Vec<&Entity>> {
        self.objects_at(visibility, ResolutionConfig::default().reveal_threshold)
    }

    /// Lists contained entities, treating `SEARCH >= threshold` as found.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if a contained entity's `RESISTANCE.SEARCH` or
    /// `SEARCH` is not numeric.
    pub fn objects_at(&self, visibility: Visibility, threshold: i64) -> Result<Vec<&Entity>> {
        let mut listed = Vec::new();
        for object in &self.objects {
            let hidden = object.is_hidden(threshold)?;
            if hidden == (visibility == Visibility::Hidden) {
                listed.push(object);
            }
        }
        Ok(listed)
    }

    /// True if `RESISTANCE.SEARCH > 0`.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the attribute is not numeric.
    pub fn is_concealed(&self) -> Result<bool> {
        Ok(self.attributes.int(Key::new(RESISTANCE).join(SEARCH), 0)? > 0)
    }

    /// True if `SEARCH >= threshold`.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the attribute is not numeric.
    pub fn is_found(&self, threshold: i64) -> Result<bool> {
        Ok(self.attributes.int(SEARCH, 0)? >= threshold)
    }

    /// True if concealed and not yet found.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if either attribute is not numeric.
    pub fn is_hidden(&self, threshold: i64) -> Result<bool> {
        Ok(self.is_concealed()? && !self.is_found(threshold)?)
    }

    // -------------------------------------------------------------------------
    // Offering actions
    // -------------------------------------------------------------------------

    /// Builds one action per declared verb using the standard rules.
    ///
    /// # Errors
    /// See [`possible_actions_with`](Self::possible_actions_with).
    pub fn possible_actions(&self) -> Result<Vec<Action>> {
        self.possible_actions_with(&ResolutionConfig::default())
    }

    /// Builds one action per declared verb, in declaration order.
    ///
    /// Attack components take their bonus from ACCURACY and their amount from
    /// DAMAGE; other components take POWER and STACKS, falling back to
    /// `config.default_stacks` when no STACKS path is declared.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for non-numeric ACCURACY/POWER, or a formula
    /// error for malformed DAMAGE/STACKS.
    pub fn possible_actions_with(&self, config: &ResolutionConfig) -> Result<Vec<Action>> {
        self.verbs
            .iter()
            .map(|compound| {
                let slots = compound
                    .components()
                    .iter()
                    .map(|verb| self.slot_for(verb, config))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Action::from_slots(compound.clone(), self.name.as_str(), slots))
            })
            .collect()
    }

    fn slot_for(&self, verb: &Verb, config: &ResolutionConfig) -> Result<Slot> {
        if verb.is_attack() {
            Ok(Slot::new(
                bonus_sum(&self.attributes, ACCURACY, verb)?,
                bonus_dice(&self.attributes, DAMAGE, verb)?,
            ))
        } else {
            let mut stacks = bonus_dice(&self.attributes, STACKS, verb)?;
            if stacks.is_empty() {
                stacks.push(config.default_stacks);
            }
            Ok(Slot::new(bonus_sum(&self.attributes, POWER, verb)?, stacks))
        }
    }

    // -------------------------------------------------------------------------
    // Receiving actions
    // -------------------------------------------------------------------------

    /// The attribute a non-attack verb changes under `config`.
    ///
    /// # Errors
    /// Returns `UnsupportedVerb` for attack verbs and for verbs that would
    /// change a bonus family.
    pub fn affected_key(&self, verb: &Verb, config: &ResolutionConfig) -> Result<Key> {
        let affected = match config.affected_attribute {
            AffectedAttribute::Base => verb.base_key(),
            AffectedAttribute::FullVerb => verb.key(),
        };
        if verb.is_attack() || is_bonus_family(affected.head()) {
            return Err(Error::unsupported_verb(verb.as_str(), self.name.as_str()));
        }
        Ok(affected)
    }

    /// Applies a non-attack component stack by stack.
    ///
    /// One check is rolled per stack, up to the configured `stack_limit`.
    ///
    /// # Errors
    /// Returns `UnsupportedVerb` for attack verbs and for verbs that would
    /// change a bonus family, or `TypeMismatch` for non-numeric attributes.
    pub fn receive_effect(
        &mut self,
        delivery: &Delivery<'_>,
        resolver: &mut Resolver,
    ) -> Result<Reception> {
        let verb = delivery.verb;
        let affected = self.affected_key(verb, resolver.config())?;

        let resistance = bonus_sum(&self.attributes, RESISTANCE, verb)?;
        if resolver.check_min() + resistance >= delivery.to_hit {
            debug!(
                recipient = %self.name,
                verb = %verb,
                resistance,
                to_hit = delivery.to_hit,
                "fully resisted"
            );
            return Ok(Reception::failure(format!(
                "{} fully resists {} {}",
                self.name, delivery.source, verb
            )));
        }

        let limit = resolver.config().stack_limit.max(0);
        let incoming = delivery.total.saturating_abs();
        if incoming > limit {
            warn!(
                recipient = %self.name,
                verb = %verb,
                incoming,
                limit,
                "stack count clipped"
            );
        }
        let incoming = incoming.min(limit);
        let mut delivered = 0;
        for _ in 0..incoming {
            let roll = resolver.check();
            let blocked = roll + resistance >= delivery.to_hit;
            trace!(roll, resistance, to_hit = delivery.to_hit, blocked, "stack");
            if !blocked {
                delivered += 1;
            }
        }

        let sign = if delivery.total < 0 { -1 } else { 1 };
        if delivered > 0 {
            let mut updated = self.attributes.int(&affected, 0)? + sign * delivered;
            if affected.as_str() == LIFE {
                if let Some(hp) = self.attributes.int_opt(HP)? {
                    updated = updated.min(hp);
                }
            }
            self.attributes.set(affected, updated);
        }

        debug!(
            recipient = %self.name,
            verb = %verb,
            delivered,
            incoming,
            "stacks resolved"
        );

        let label = if sign < 0 {
            format!("(negative) {verb}")
        } else {
            verb.to_string()
        };
        let message = format!(
            "{} resists {}/{} stacks of {} from {}",
            self.name,
            incoming - delivered,
            incoming,
            label,
            delivery.source
        );
        Ok(if delivered > 0 {
            Reception::success(message)
        } else {
            Reception::failure(message)
        })
    }
}

impl Participant for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn check_verb(&self, verb: &Verb, config: &ResolutionConfig) -> Result<()> {
        self.affected_key(verb, config).map(|_| ())
    }

    fn accept_action(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver) -> Result<Reception> {
        self.receive_effect(delivery, resolver)
    }
}
