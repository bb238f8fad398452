//! Actions and the resolution protocol.
//!
//! An [`Action`] is what an enabling object (a sword, a scroll, a room)
//! offers: a compound verb plus one [`Slot`] per component. Acting splits
//! nothing at run time; the verb was split when the action was built.
//!
//! Resolution of each component:
//! 1. `to_hit = to_hit_base + slot.bonus + initiator ACCURACY|POWER paths`
//! 2. `total = roll(slot.amount) + roll(initiator DAMAGE|STACKS paths)`
//! 3. deliver `(verb, to_hit, total)` to the recipient
//! 4. stop at the first component the recipient rejects

use std::fmt;

use tracing::debug;

use cardfrp_dice::DiceSum;
use cardfrp_foundation::{AttributeStore, CompoundVerb, Error, Result, Verb};

use crate::bonus::{ACCURACY, DAMAGE, POWER, STACKS, bonus_dice, bonus_sum};
use crate::participant::Participant;
use crate::resolver::Resolver;

// =============================================================================
// Slot
// =============================================================================

/// The enabling object's contribution to one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// ACCURACY (attack) or POWER (other) added to the to-hit.
    pub bonus: i64,
    /// DAMAGE (attack) or STACKS (other) rolled into the total.
    pub amount: DiceSum,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub fn new(bonus: i64, amount: impl Into<DiceSum>) -> Self {
        Self {
            bonus,
            amount: amount.into(),
        }
    }

    /// Slot for a component with nothing declared.
    #[must_use]
    pub fn empty_for(verb: &Verb) -> Self {
        if verb.is_attack() {
            Self::new(0, DiceSum::new())
        } else {
            Self::new(0, 1)
        }
    }
}

// =============================================================================
// Initiator / Delivery
// =============================================================================

/// The entity performing an action, as seen by the resolution.
#[derive(Clone, Copy, Debug)]
pub struct Initiator<'a> {
    /// Display name.
    pub name: &'a str,
    /// Attributes whose bonus paths add to every component.
    pub attributes: &'a AttributeStore,
}

impl<'a> Initiator<'a> {
    /// Creates an initiator from its parts.
    #[must_use]
    pub fn new(name: &'a str, attributes: &'a AttributeStore) -> Self {
        Self { name, attributes }
    }

    /// Uses a participant as the initiator.
    #[must_use]
    pub fn of<P: Participant + ?Sized>(participant: &'a P) -> Self {
        Self::new(participant.name(), participant.attributes())
    }
}

/// One component as handed to the recipient.
#[derive(Clone, Copy, Debug)]
pub struct Delivery<'a> {
    /// The component verb.
    pub verb: &'a Verb,
    /// Pre-defence chance to land.
    pub to_hit: i64,
    /// Rolled damage or stack count. Negative totals remove stacks.
    pub total: i64,
    /// Name of the initiator.
    pub initiator: &'a str,
    /// Name of the enabling object.
    pub source: &'a str,
}

// =============================================================================
// Resolution
// =============================================================================

/// What happened to one delivered component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryRecord {
    /// The component verb.
    pub verb: Verb,
    /// To-hit it was delivered with.
    pub to_hit: i64,
    /// Total it was delivered with.
    pub total: i64,
    /// Whether the recipient accepted it.
    pub delivered: bool,
    /// The recipient's account.
    pub message: String,
}

/// Composite outcome of an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// True if every component was delivered.
    pub succeeded: bool,
    /// Delivered components in order, ending with the first failure.
    pub deliveries: Vec<DeliveryRecord>,
}

impl Resolution {
    /// Iterates the recipient messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.deliveries.iter().map(|record| record.message.as_str())
    }

    /// Returns the record of the component that stopped resolution, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&DeliveryRecord> {
        self.deliveries.last().filter(|record| !record.delivered)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages().enumerate() {
            if i > 0 {
                f.write_str("\n    ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

// =============================================================================
// Action
// =============================================================================

/// A compound verb enabled by some object, ready to be performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    verb: CompoundVerb,
    source: String,
    slots: Vec<Slot>,
}

struct Planned<'a> {
    verb: &'a Verb,
    to_hit: i64,
    amount: DiceSum,
}

impl Action {
    /// Creates an action with empty slots: attacks carry no bonus and no
    /// damage, other components no bonus and one stack.
    #[must_use]
    pub fn new(verb: CompoundVerb, source: impl Into<String>) -> Self {
        let slots = verb.components().iter().map(Slot::empty_for).collect();
        Self {
            verb,
            source: source.into(),
            slots,
        }
    }

    /// Splits `verb` and creates an action with empty slots.
    ///
    /// # Errors
    /// Returns `InvalidCompound` if the verb is malformed.
    pub fn parse(verb: &str, source: impl Into<String>) -> Result<Self> {
        Ok(Self::new(CompoundVerb::parse(verb)?, source))
    }

    pub(crate) fn from_slots(verb: CompoundVerb, source: impl Into<String>, slots: Vec<Slot>) -> Self {
        debug_assert_eq!(verb.len(), slots.len());
        Self {
            verb,
            source: source.into(),
            slots,
        }
    }

    /// Builder method to set the bonus of component `index`.
    #[must_use]
    pub fn with_bonus(mut self, index: usize, bonus: i64) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.bonus = bonus;
        }
        self
    }

    /// Builder method to set the amount of component `index`.
    #[must_use]
    pub fn with_amount(mut self, index: usize, amount: impl Into<DiceSum>) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.amount = amount.into();
        }
        self
    }

    /// Returns the compound verb.
    #[must_use]
    pub fn verb(&self) -> &CompoundVerb {
        &self.verb
    }

    /// Returns the name of the enabling object.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns one slot per component.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// ACCURACY per component, if any component is an attack.
    #[must_use]
    pub fn accuracies(&self) -> Option<Vec<i64>> {
        self.per_component(true, |slot| slot.bonus, 0)
    }

    /// DAMAGE per component, if any component is an attack.
    #[must_use]
    pub fn damages(&self) -> Option<Vec<DiceSum>> {
        self.per_component(true, |slot| slot.amount.clone(), DiceSum::new())
    }

    /// POWER per component, if any component is not an attack.
    #[must_use]
    pub fn powers(&self) -> Option<Vec<i64>> {
        self.per_component(false, |slot| slot.bonus, 0)
    }

    /// STACKS per component, if any component is not an attack.
    #[must_use]
    pub fn stacks(&self) -> Option<Vec<DiceSum>> {
        self.per_component(false, |slot| slot.amount.clone(), DiceSum::new())
    }

    fn per_component<T: Clone>(&self, attack: bool, read: impl Fn(&Slot) -> T, zero: T) -> Option<Vec<T>> {
        let present = if attack {
            self.verb.has_attack()
        } else {
            self.verb.has_effect()
        };
        present.then(|| {
            self.verb
                .components()
                .iter()
                .zip(&self.slots)
                .map(|(verb, slot)| {
                    if verb.is_attack() == attack {
                        read(slot)
                    } else {
                        zero.clone()
                    }
                })
                .collect()
        })
    }

    /// Performs the action against `recipient`.
    ///
    /// Every formula involved is parsed, and every component checked
    /// against [`Participant::check_verb`], before the first component is
    /// delivered. A malformed formula or a component the recipient cannot
    /// process leaves the recipient untouched.
    ///
    /// # Errors
    /// Returns a formula or lookup error from the initiator's bonuses, or
    /// whatever the recipient returns for a component it cannot process.
    pub fn act<P: Participant + ?Sized>(
        &self,
        resolver: &mut Resolver,
        initiator: &Initiator<'_>,
        recipient: &mut P,
    ) -> Result<Resolution> {
        let to_hit_base = resolver.config().to_hit_base;
        let planned = self
            .verb
            .components()
            .iter()
            .zip(&self.slots)
            .map(|(verb, slot)| {
                recipient
                    .check_verb(verb, resolver.config())
                    .map_err(|err| self.rejected(err, verb, recipient.name()))?;
                self.plan(verb, slot, to_hit_base, initiator)
                    .map_err(|err| self.annotate(err, verb))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut resolution = Resolution {
            succeeded: true,
            deliveries: Vec::with_capacity(planned.len()),
        };

        for step in planned {
            let total = resolver.roll_sum(&step.amount);
            let delivery = Delivery {
                verb: step.verb,
                to_hit: step.to_hit,
                total,
                initiator: initiator.name,
                source: &self.source,
            };

            let reception = match recipient.accept_action(&delivery, resolver) {
                Ok(reception) => reception,
                Err(err) => return Err(self.rejected(err, step.verb, recipient.name())),
            };

            debug!(
                verb = %step.verb,
                to_hit = step.to_hit,
                total,
                recipient = recipient.name(),
                succeeded = reception.succeeded,
                "component delivered"
            );

            let delivered = reception.succeeded;
            resolution.deliveries.push(DeliveryRecord {
                verb: step.verb.clone(),
                to_hit: step.to_hit,
                total,
                delivered,
                message: reception.message,
            });
            if !delivered {
                resolution.succeeded = false;
                break;
            }
        }

        Ok(resolution)
    }

    fn plan<'v>(
        &self,
        verb: &'v Verb,
        slot: &Slot,
        to_hit_base: i64,
        initiator: &Initiator<'_>,
    ) -> Result<Planned<'v>> {
        let (hit_family, amount_family) = if verb.is_attack() {
            (ACCURACY, DAMAGE)
        } else {
            (POWER, STACKS)
        };
        let to_hit = to_hit_base + slot.bonus + bonus_sum(initiator.attributes, hit_family, verb)?;
        let mut amount = slot.amount.clone();
        amount.extend(&bonus_dice(initiator.attributes, amount_family, verb)?);
        Ok(Planned {
            verb,
            to_hit,
            amount,
        })
    }

    fn rejected(&self, err: Error, verb: &Verb, recipient: &str) -> Error {
        let mut err = self.annotate(err, verb);
        let context = err
            .context
            .take()
            .unwrap_or_default()
            .with_frame(format!("delivery to {recipient}"));
        err.with_context(context)
    }

    fn annotate(&self, mut err: Error, verb: &Verb) -> Error {
        let context = err
            .context
            .take()
            .unwrap_or_default()
            .with_source(self.source.as_str())
            .with_component(verb.as_str());
        err.with_context(context)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.verb, self.source)
    }
}
