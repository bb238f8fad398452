//! Configuration for action resolution.

use cardfrp_dice::Formula;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which attribute a non-attack verb changes on its recipient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AffectedAttribute {
    /// The base verb: `MENTAL.FEAR` changes `MENTAL`.
    #[default]
    Base,
    /// The full verb key: `MENTAL.FEAR` changes `MENTAL.FEAR`.
    FullVerb,
}

/// Tunable constants of the resolution rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionConfig {
    /// Base to-hit every component starts from.
    pub to_hit_base: i64,

    /// Die rolled for every evasion and stack check.
    pub check_die: Formula,

    /// Stacks a non-attack component delivers when nothing declares STACKS.
    pub default_stacks: i64,

    /// `SEARCH` level at which a concealed object counts as found.
    pub reveal_threshold: i64,

    /// Attribute changed by non-attack verbs.
    pub affected_attribute: AffectedAttribute,

    /// Most stacks a single component rolls for; larger totals are clipped.
    pub stack_limit: i64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            to_hit_base: 100,
            check_die: Formula::D100,
            default_stacks: 1,
            reveal_threshold: 1,
            affected_attribute: AffectedAttribute::Base,
            stack_limit: 10_000,
        }
    }
}

impl ResolutionConfig {
    /// The standard rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Standard rules, but conditions accumulate per sub-type
    /// (`MENTAL.FEAR` and `MENTAL.DESPAIR` are tracked separately).
    #[must_use]
    pub fn per_subtype() -> Self {
        Self {
            affected_attribute: AffectedAttribute::FullVerb,
            ..Self::default()
        }
    }

    /// Builder method to set the base to-hit.
    #[must_use]
    pub fn with_to_hit_base(mut self, base: i64) -> Self {
        self.to_hit_base = base;
        self
    }

    /// Builder method to set the check die.
    #[must_use]
    pub fn with_check_die(mut self, die: Formula) -> Self {
        self.check_die = die;
        self
    }

    /// Builder method to set the default stack count.
    #[must_use]
    pub fn with_default_stacks(mut self, stacks: i64) -> Self {
        self.default_stacks = stacks;
        self
    }

    /// Builder method to set the reveal threshold.
    #[must_use]
    pub fn with_reveal_threshold(mut self, threshold: i64) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Builder method to set the affected-attribute policy.
    #[must_use]
    pub fn with_affected_attribute(mut self, policy: AffectedAttribute) -> Self {
        self.affected_attribute = policy;
        self
    }

    /// Builder method to set the per-component stack limit.
    #[must_use]
    pub fn with_stack_limit(mut self, limit: i64) -> Self {
        self.stack_limit = limit;
        self
    }
}
