//! The dice and rules every resolution step draws on.

use cardfrp_dice::{DiceRoller, DiceSum};
use tracing::trace;

use crate::config::ResolutionConfig;

/// Rules plus randomness, passed explicitly to every resolution step.
#[derive(Clone, Debug)]
pub struct Resolver {
    config: ResolutionConfig,
    dice: DiceRoller,
}

impl Resolver {
    /// Creates a resolver from its parts.
    #[must_use]
    pub fn new(config: ResolutionConfig, dice: DiceRoller) -> Self {
        Self { config, dice }
    }

    /// Standard rules with a reproducible roller.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ResolutionConfig::default(), DiceRoller::seeded(seed))
    }

    /// Standard rules with an entropy-seeded roller.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ResolutionConfig::default(), DiceRoller::from_entropy())
    }

    /// Builder method to replace the rules.
    #[must_use]
    pub fn with_config(mut self, config: ResolutionConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the rules.
    #[must_use]
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Returns the roller.
    pub fn dice_mut(&mut self) -> &mut DiceRoller {
        &mut self.dice
    }

    /// Rolls the check die once.
    pub fn check(&mut self) -> i64 {
        let roll = self.dice.roll(&self.config.check_die);
        trace!(roll, "check");
        roll
    }

    /// Lowest value the check die can show.
    #[must_use]
    pub fn check_min(&self) -> i64 {
        self.config.check_die.bounds().0
    }

    /// Rolls every term of a sum.
    pub fn roll_sum(&mut self, sum: &DiceSum) -> i64 {
        self.dice.roll_sum(sum)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::from_entropy()
    }
}
