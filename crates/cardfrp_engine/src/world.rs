//! The arena that owns every context and actor.
//!
//! Contexts point at their parent and at their members through handles, so
//! anything that follows those handles (inherited attributes, inherited
//! actions, actor-initiated actions) goes through the [`World`].

use std::collections::HashSet;

use tracing::{debug, warn};

use cardfrp_foundation::{ActorId, ContextId, Error, Key, Result, Value, ValueKind};

use crate::action::{Action, Initiator, Resolution};
use crate::actor::Actor;
use crate::config::ResolutionConfig;
use crate::context::Context;
use crate::resolver::Resolver;

/// Recipient of an actor-initiated action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// An actor, possibly the initiator itself.
    Actor(ActorId),
    /// A context, e.g. to SEARCH it.
    Context(ContextId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Member,
    Npc,
}

/// Owns all contexts and actors.
#[derive(Clone, Debug, Default)]
pub struct World {
    contexts: Vec<Context>,
    actors: Vec<Actor>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Arena
    // =========================================================================

    /// Adds a top-level context.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_context(&mut self, context: Context) -> ContextId {
        let id = ContextId::new(self.contexts.len() as u32);
        self.contexts.push(context);
        id
    }

    /// Adds a context nested inside `parent`.
    ///
    /// # Errors
    /// Returns `ContextNotFound` if `parent` is not in this world.
    pub fn add_context_within(&mut self, mut context: Context, parent: ContextId) -> Result<ContextId> {
        self.context(parent)?;
        context.set_parent_unchecked(Some(parent));
        Ok(self.add_context(context))
    }

    /// Adds an actor.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = ActorId::new(self.actors.len() as u32);
        self.actors.push(actor);
        id
    }

    /// Returns a context.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle.
    pub fn context(&self, id: ContextId) -> Result<&Context> {
        self.contexts
            .get(id.index())
            .ok_or_else(|| Error::context_not_found(id))
    }

    /// Returns a context for modification.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle.
    pub fn context_mut(&mut self, id: ContextId) -> Result<&mut Context> {
        self.contexts
            .get_mut(id.index())
            .ok_or_else(|| Error::context_not_found(id))
    }

    /// Returns an actor.
    ///
    /// # Errors
    /// Returns `ActorNotFound` for a dangling handle.
    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.actors
            .get(id.index())
            .ok_or_else(|| Error::actor_not_found(id))
    }

    /// Returns an actor for modification.
    ///
    /// # Errors
    /// Returns `ActorNotFound` for a dangling handle.
    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor> {
        self.actors
            .get_mut(id.index())
            .ok_or_else(|| Error::actor_not_found(id))
    }

    /// Number of contexts.
    #[must_use]
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Links `child` under `parent`, or makes it top-level with `None`.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle, or `ContextCycle` if
    /// `parent` is `child` or one of its descendants.
    pub fn set_parent(&mut self, child: ContextId, parent: Option<ContextId>) -> Result<()> {
        self.context(child)?;
        if let Some(parent) = parent {
            if self.ancestors(parent)?.contains(&child) {
                warn!(%child, %parent, "rejected parent link: would create a cycle");
                return Err(Error::context_cycle(child, parent));
            }
        }
        self.context_mut(child)?.set_parent_unchecked(parent);
        Ok(())
    }

    /// Returns `id` followed by its ancestors, nearest first.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle, or `ContextCycle` if
    /// the chain is longer than the number of contexts.
    pub fn ancestors(&self, id: ContextId) -> Result<Vec<ContextId>> {
        let mut chain = vec![id];
        let mut current = self.context(id)?.parent();
        while let Some(next) = current {
            if chain.len() >= self.contexts.len() {
                return Err(Error::context_cycle(id, next));
            }
            chain.push(next);
            current = self.context(next)?.parent();
        }
        Ok(chain)
    }

    /// Looks up `key` locally, then in each ancestor.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle.
    pub fn lookup(&self, id: ContextId, key: impl Into<Key>) -> Result<Option<&Value>> {
        let key = key.into();
        for ancestor in self.ancestors(id)? {
            if let Some(value) = self.context(ancestor)?.get_local(&key) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Looks up `key` locally, then in each ancestor, else `default`.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle.
    pub fn get(&self, id: ContextId, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        Ok(self
            .lookup(id, key)?
            .cloned()
            .unwrap_or_else(|| default.into()))
    }

    /// Numeric form of [`get`](Self::get).
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle, or `TypeMismatch` if
    /// the inherited value is not numeric.
    pub fn int(&self, id: ContextId, key: impl Into<Key>, default: i64) -> Result<i64> {
        let key = key.into();
        match self.lookup(id, &key)? {
            None => Ok(default),
            Some(value) => value.as_int().ok_or_else(|| {
                Error::type_mismatch(key.as_str(), ValueKind::Int, value.kind())
            }),
        }
    }

    /// Actions offered by a context and its ancestors, using the standard
    /// rules.
    ///
    /// # Errors
    /// See [`possible_actions_with`](Self::possible_actions_with).
    pub fn possible_actions(&self, id: ContextId) -> Result<Vec<Action>> {
        self.possible_actions_with(id, &ResolutionConfig::default())
    }

    /// Actions offered by a context, then by each ancestor. A verb offered
    /// at several levels is kept once, from the nearest context.
    ///
    /// # Errors
    /// Returns `ContextNotFound` for a dangling handle, or any error from
    /// building a context's actions.
    pub fn possible_actions_with(&self, id: ContextId, config: &ResolutionConfig) -> Result<Vec<Action>> {
        let mut seen = HashSet::new();
        let mut actions = Vec::new();
        for ancestor in self.ancestors(id)? {
            for action in self.context(ancestor)?.entity().possible_actions_with(config)? {
                if seen.insert(action.verb().clone()) {
                    actions.push(action);
                }
            }
        }
        Ok(actions)
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Moves an actor into a context's party, leaving wherever it was.
    ///
    /// # Errors
    /// Returns `ActorNotFound` or `ContextNotFound` for a dangling handle.
    pub fn place_member(&mut self, actor: ActorId, context: ContextId) -> Result<()> {
        self.place(actor, context, Role::Member)
    }

    /// Moves an actor into a context as an NPC, leaving wherever it was.
    ///
    /// # Errors
    /// Returns `ActorNotFound` or `ContextNotFound` for a dangling handle.
    pub fn place_npc(&mut self, actor: ActorId, context: ContextId) -> Result<()> {
        self.place(actor, context, Role::Npc)
    }

    fn place(&mut self, actor: ActorId, context: ContextId, role: Role) -> Result<()> {
        let previous = self.actor(actor)?.context();
        self.context(context)?;

        if let Some(old) = previous {
            let old_context = self.context_mut(old)?;
            if old != context || role == Role::Npc {
                old_context.remove_member(actor);
            }
            if old != context || role == Role::Member {
                old_context.remove_npc(actor);
            }
        }

        let target = self.context_mut(context)?;
        match role {
            Role::Member => target.add_member(actor),
            Role::Npc => target.add_npc(actor),
        }
        self.actor_mut(actor)?.set_context(Some(context));
        debug!(%actor, ?previous, %context, ?role, "placed");
        Ok(())
    }

    // =========================================================================
    // Acting
    // =========================================================================

    /// Has an actor perform `action` against `target`.
    ///
    /// The initiator's attributes are snapshotted first, so an actor can
    /// target itself (drinking a potion, reading a scroll of courage).
    ///
    /// # Errors
    /// Returns a not-found error for a dangling handle, or any error from
    /// [`Action::act`].
    pub fn take_action(
        &mut self,
        actor: ActorId,
        action: &Action,
        target: Target,
        resolver: &mut Resolver,
    ) -> Result<Resolution> {
        let initiator = self.actor(actor)?;
        let name = initiator.entity().name().to_string();
        let attributes = initiator.entity().attributes().clone();
        let initiator = Initiator::new(&name, &attributes);
        debug!(initiator = %name, %action, ?target, "taking action");

        match target {
            Target::Actor(id) => action.act(resolver, &initiator, self.actor_mut(id)?),
            Target::Context(id) => action.act(resolver, &initiator, self.context_mut(id)?),
        }
    }
}
