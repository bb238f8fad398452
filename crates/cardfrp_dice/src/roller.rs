//! Seedable dice roller.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use cardfrp_foundation::{Result, Value};

use crate::formula::Formula;
use crate::sum::DiceSum;

/// The single source of randomness for a resolution.
///
/// Two rollers built with the same seed produce the same sequence of rolls,
/// so a seeded resolution is fully reproducible.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl DiceRoller {
    /// Creates a deterministic roller.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a roller seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed, if this roller was built with one.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Rolls a formula.
    pub fn roll(&mut self, formula: &Formula) -> i64 {
        let result = formula.roll(&mut self.rng);
        trace!(%formula, result, "roll");
        result
    }

    /// Rolls every term of a sum.
    pub fn roll_sum(&mut self, sum: &DiceSum) -> i64 {
        sum.terms().iter().map(|term| self.roll(term)).sum()
    }

    /// Parses and rolls formula text.
    ///
    /// # Errors
    /// Returns a formula error if the text does not parse; nothing is rolled.
    pub fn roll_text(&mut self, text: &str) -> Result<i64> {
        let formula = Formula::parse(text)?;
        Ok(self.roll(&formula))
    }

    /// Rolls an attribute value: integers are taken as-is, text is parsed.
    ///
    /// # Errors
    /// Returns a formula error for malformed text or a flag.
    pub fn roll_value(&mut self, value: &Value) -> Result<i64> {
        let formula = Formula::try_from(value)?;
        Ok(self.roll(&formula))
    }

    /// Gives direct access to the generator.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::from_entropy()
    }
}
