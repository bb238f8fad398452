//! The recipient side of action resolution.

use std::fmt;

use cardfrp_foundation::{AttributeStore, Result, Verb};

use crate::action::Delivery;
use crate::config::ResolutionConfig;
use crate::resolver::Resolver;

/// Outcome of one delivered component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reception {
    /// Whether the component had an effect.
    pub succeeded: bool,
    /// Human-readable account of what happened.
    pub message: String,
}

impl Reception {
    /// A reception that had an effect.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
        }
    }

    /// A reception that was evaded, resisted or absorbed.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
        }
    }
}

impl fmt::Display for Reception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Anything that can be the target of an action.
///
/// `accept_action` takes `&mut self`, so a recipient can only be in one
/// delivery at a time. Delivering to a recipient from inside its own
/// `accept_action` is not supported.
pub trait Participant {
    /// Display name used in messages.
    fn name(&self) -> &str;

    /// The recipient's attributes.
    fn attributes(&self) -> &AttributeStore;

    /// Checks, without side effects, that `verb` can be delivered here.
    ///
    /// Called for every component before the first delivery of an action,
    /// so a compound the recipient cannot fully process changes nothing.
    ///
    /// # Errors
    /// Returns `UnsupportedVerb` for a verb `accept_action` would reject.
    fn check_verb(&self, verb: &Verb, config: &ResolutionConfig) -> Result<()> {
        let _ = (verb, config);
        Ok(())
    }

    /// Processes one component and mutates the recipient accordingly.
    ///
    /// # Errors
    /// Returns `UnsupportedVerb` if the recipient cannot process the verb,
    /// or a lookup error if one of its attributes is malformed.
    fn accept_action(&mut self, delivery: &Delivery<'_>, resolver: &mut Resolver)
    -> Result<Reception>;
}
