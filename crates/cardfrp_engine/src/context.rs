//! Contexts: locations that nest, hold actors and hide things.
//!
//! A context's parent link and its membership lists are plain handles into
//! the [`World`](crate::world::World); lookups that follow them live there.

use tracing::debug;

use cardfrp_foundation::{ActorId, AttributeStore, ContextId, Key, Result, Value, Verb};

use crate::action::Delivery;
use crate::bonus::SEARCH;
use crate::config::ResolutionConfig;
use crate::entity::Entity;
use crate::participant::{Participant, Reception};
use crate::resolver::Resolver;

/// A location: kingdom, village, building, room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    entity: Entity,
    parent: Option<ContextId>,
    party: Vec<ActorId>,
    npcs: Vec<ActorId>,
}

impl Context {
    /// Creates an empty top-level context.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_entity(Entity::new(name))
    }

    /// Wraps an existing entity.
    #[must_use]
    pub fn from_entity(entity: Entity) -> Self {
        Self {
            entity,
            parent: None,
            party: Vec::new(),
            npcs: Vec::new(),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.entity.set(key, value);
        self
    }

    /// Builder method to declare a compound verb.
    ///
    /// # Errors
    /// Returns `InvalidCompound` if the verb is malformed.
    pub fn with_verb(mut self, verb: &str) -> Result<Self> {
        self.entity = self.entity.with_verb(verb)?;
        Ok(self)
    }

    /// Builder method to place an object here.
    #[must_use]
    pub fn with_object(mut self, object: Entity) -> Self {
        self.entity.add_object(object);
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

    /// Looks up a local attribute only.
    #[must_use]
    pub fn get_local(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entity.get(key)
    }

    /// Returns the enclosing context.
    #[must_use]
    pub fn parent(&self) -> Option<ContextId> {
        self.parent
    }

    pub(crate) fn set_parent_unchecked(&mut self, parent: Option<ContextId>) {
        self.parent = parent;
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Player characters here, in arrival order.
    #[must_use]
    pub fn party(&self) -> &[ActorId] {
        &self.party
    }

    /// Adds a party member; adding twice has no effect.
    pub fn add_member(&mut self, actor: ActorId) {
        if !self.party.contains(&actor) {
            self.party.push(actor);
        }
    }

    /// Removes a party member, returning whether it was present.
    pub fn remove_member(&mut self, actor: ActorId) -> bool {
        remove_id(&mut self.party, actor)
    }

    /// Non-player characters here, in arrival order.
    #[must_use]
    pub fn npcs(&self) -> &[ActorId] {
        &self.npcs
    }

    /// Adds an NPC; adding twice has no effect.
    pub fn add_npc(&mut self, actor: ActorId) {
        if !self.npcs.contains(&actor) {
            self.npcs.push(actor);
        }
    }

    /// Removes an NPC, returning whether it was present.
    pub fn remove_npc(&mut self, actor: ActorId) -> bool {
        remove_id(&mut self.npcs, actor)
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    fn receive_search(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver) -> Result<Reception> {
        let threshold = resolver.config().reveal_threshold;
        let name = self.entity.name().to_string();
        let mut found_any = false;
        let mut messages = Vec::new();

        for object in self.entity.contents_mut() {
            if !object.is_hidden(threshold)? {
                continue;
            }
            let reception = object.receive_effect(delivery, resolver)?;
            if object.is_found(threshold)? {
                debug!(context = %name, object = object.name(), "found");
                found_any = true;
            }
            messages.push(reception.message);
        }

        if messages.is_empty() {
            return Ok(Reception::failure(format!("{name} has nothing hidden to find")));
        }
        let message = messages.join("\n    ");
        Ok(if found_any {
            Reception::success(message)
        } else {
            Reception::failure(message)
        })
    }
}

fn remove_id(ids: &mut Vec<ActorId>, actor: ActorId) -> bool {
    let before = ids.len();
    ids.retain(|id| *id != actor);
    ids.len() != before
}

fn is_search(verb: &Verb) -> bool {
    verb.base() == SEARCH && verb.subtype().is_none()
}

impl Participant for Context {
    fn name(&self) -> &str {
        self.entity.name()
    }

    fn attributes(&self) -> &AttributeStore {
        self.entity.attributes()
    }

    fn check_verb(&self, verb: &Verb, config: &ResolutionConfig) -> Result<()> {
        if is_search(verb) {
            return Ok(());
        }
        self.entity.check_verb(verb, config)
    }

    fn accept_action(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver) -> Result<Reception> {
        let verb = delivery.verb;
        if is_search(verb) {
            return self.receive_search(delivery, resolver);
        }
        self.entity.receive_effect(delivery, resolver)
    }
}
