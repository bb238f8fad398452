//! Ordered sums of formulas.
//!
//! Several `DAMAGE` bonus paths can each hold a formula (`DAMAGE = D4`,
//! `DAMAGE.ATTACK.SLASH = 2-3`); the engine rolls each of them and adds the
//! results. A `DiceSum` keeps them in order so a seeded roll is repeatable.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cardfrp_foundation::Result;

use crate::formula::Formula;

/// A sequence of formulas rolled and added together. Empty sums to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiceSum {
    terms: Vec<Formula>,
}

impl DiceSum {
    /// Creates an empty sum.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses each text as a formula and collects them in order.
    ///
    /// # Errors
    /// Returns the first formula error.
    pub fn parse_all<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        texts.into_iter().map(Formula::parse).collect()
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, term: impl Into<Formula>) -> Self {
        self.push(term);
        self
    }

    /// Appends a term.
    pub fn push(&mut self, term: impl Into<Formula>) {
        self.terms.push(term.into());
    }

    /// Appends every term of `other`.
    pub fn extend(&mut self, other: &DiceSum) {
        self.terms.extend_from_slice(&other.terms);
    }

    /// Returns the terms in roll order.
    #[must_use]
    pub fn terms(&self) -> &[Formula] {
        &self.terms
    }

    /// Returns true if there is nothing to roll.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the inclusive `(min, max)` of the sum.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        self.terms.iter().fold((0, 0), |(lo, hi), term| {
            let (min, max) = term.bounds();
            (lo + min, hi + max)
        })
    }

    /// Rolls every term in order and returns the total.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.terms.iter().map(|term| term.roll(rng)).sum()
    }
}

impl From<Formula> for DiceSum {
    fn from(term: Formula) -> Self {
        Self { terms: vec![term] }
    }
}

impl From<i64> for DiceSum {
    fn from(value: i64) -> Self {
        Formula::Constant(value).into()
    }
}

impl From<i32> for DiceSum {
    fn from(value: i32) -> Self {
        Formula::from(value).into()
    }
}

impl FromIterator<Formula> for DiceSum {
    fn from_iter<I: IntoIterator<Item = Formula>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DiceSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
