//! Core values, attribute keys, verbs and attribute stores for cardfrp.
//!
//! This crate provides:
//! - [`Value`] - Tagged attribute values (integer, dice formula, flag)
//! - [`Key`] - Case-normalized dotted attribute paths
//! - [`Verb`] / [`CompoundVerb`] - Verb parsing and bonus-path derivation
//! - [`AttributeStore`] - The attribute namespace every entity carries
//! - [`ActorId`] / [`ContextId`] - Non-owning arena handles
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attributes;
pub mod error;
pub mod id;
pub mod key;
pub mod value;
pub mod verb;

pub use attributes::{AttributeStore, sum_base_verb_subtype};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{ActorId, ContextId};
pub use key::Key;
pub use value::{Value, ValueKind};
pub use verb::{ATTACK, CompoundVerb, Verb};
