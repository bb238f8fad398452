//! Action resolution engine for cardfrp.
//!
//! This crate provides:
//! - [`Entity`] - Attribute bags that offer actions and absorb effects
//! - [`Actor`] - Entities that evade, absorb and take damage
//! - [`Context`] - Nested locations with party/NPC lists and hidden objects
//! - [`Action`] - Compound verbs resolved component by component
//! - [`World`] - Arena owning contexts and actors, following parent links
//! - [`Resolver`] / [`ResolutionConfig`] - Dice and rules for a resolution
//!
//! # Example
//!
//! ```
//! use cardfrp_engine::{Actor, Entity, Initiator, Resolver};
//!
//! let sword = Entity::new("sword")
//!     .with_verb("ATTACK.slash")?
//!     .with_attribute("ACCURACY", 20)
//!     .with_attribute("DAMAGE", "D6");
//! let hero = Actor::new("hero");
//! let mut troll = Actor::new("troll").with_life(12).with_hp(12);
//!
//! let mut resolver = Resolver::seeded(7);
//! let action = &sword.possible_actions()?[0];
//! let resolution = action.act(&mut resolver, &Initiator::of(&hero), &mut troll)?;
//! assert_eq!(resolution.deliveries.len(), 1);
//! # Ok::<(), cardfrp_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod actor;
pub mod bonus;
pub mod config;
pub mod context;
pub mod entity;
pub mod participant;
pub mod resolver;
pub mod world;

pub use action::{Action, Delivery, DeliveryRecord, Initiator, Resolution, Slot};
pub use actor::Actor;
pub use config::{AffectedAttribute, ResolutionConfig};
pub use context::Context;
pub use entity::{Entity, Visibility};
pub use participant::{Participant, Reception};
pub use resolver::Resolver;
pub use world::{Target, World};
