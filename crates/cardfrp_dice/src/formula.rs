//! Dice formula parsing.
//!
//! Three shapes are accepted (the `D` is case-insensitive):
//!
//! ```text
//! NdF[+M]   3D6, 2D2+3, d20 (N defaults to 1), D% (100 faces)
//! LO-HI     3-9 (uniform, HI >= LO, separator is exactly '-')
//! N         47, -3 (constant)
//! ```
//!
//! Everything else is rejected when the formula is parsed, never when it is
//! rolled.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cardfrp_foundation::{Error, Result, Value};

/// A parsed roll specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Formula {
    /// Roll `count` dice with `faces` faces, sum them, add `modifier`.
    Dice {
        /// Number of dice (at least 1).
        count: u32,
        /// Faces per die (at least 1).
        faces: u32,
        /// Amount added to the sum.
        modifier: i64,
    },
    /// Uniform integer in `low..=high`.
    Range {
        /// Lowest value.
        low: i64,
        /// Highest value.
        high: i64,
    },
    /// Always the same value.
    Constant(i64),
}

impl Formula {
    /// The percentile die used for every resolution check.
    pub const D100: Self = Self::Dice {
        count: 1,
        faces: 100,
        modifier: 0,
    };

    /// Creates a constant formula.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// Most dice a single formula may roll.
    pub const MAX_DICE: u32 = 100_000;

    /// Creates an `NdF+M` formula.
    ///
    /// # Errors
    /// Returns a formula error if `count` or `faces` is zero, `count`
    /// exceeds [`MAX_DICE`](Self::MAX_DICE), or the bounds overflow `i64`.
    pub fn dice(count: u32, faces: u32, modifier: i64) -> Result<Self> {
        let formula = Self::Dice {
            count,
            faces,
            modifier,
        };
        check_dice(count, faces, modifier).map_err(|reason| Error::formula(formula.to_string(), reason))?;
        Ok(formula)
    }

    /// Creates a `LO-HI` formula.
    ///
    /// # Errors
    /// Returns a formula error if `high < low`.
    pub fn range(low: i64, high: i64) -> Result<Self> {
        if high < low {
            return Err(Error::formula(format!("{low}-{high}"), "inverted range"));
        }
        Ok(Self::Range { low, high })
    }

    /// Parses a formula.
    ///
    /// # Errors
    /// Returns a formula error describing the first problem found.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::formula(text, "empty formula"));
        }

        if let Some(value) = parse_integer(trimmed) {
            return value.map(Self::Constant).map_err(|reason| Error::formula(text, reason));
        }

        if let Some(pos) = trimmed.find(['d', 'D']) {
            return parse_dice(&trimmed[..pos], &trimmed[pos + 1..])
                .map_err(|reason| Error::formula(text, reason));
        }

        if let Some((low, high)) = trimmed.split_once('-') {
            return parse_range(low, high).map_err(|reason| Error::formula(text, reason));
        }

        Err(Error::formula(text, "unrecognized dice expression"))
    }

    /// Returns the inclusive `(min, max)` a roll can produce.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        match *self {
            Self::Dice {
                count,
                faces,
                modifier,
            } => {
                let count = i64::from(count);
                (
                    count.saturating_add(modifier),
                    count.saturating_mul(i64::from(faces)).saturating_add(modifier),
                )
            }
            Self::Range { low, high } => (low, high),
            Self::Constant(value) => (value, value),
        }
    }

    /// Returns true if every roll yields the same value.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        let (min, max) = self.bounds();
        min == max
    }

    /// Rolls this formula with the given generator.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match *self {
            Self::Dice {
                count,
                faces,
                modifier,
            } => {
                let sum: i64 = (0..count)
                    .map(|_| i64::from(rng.gen_range(1..=faces)))
                    .sum();
                sum.saturating_add(modifier)
            }
            Self::Range { low, high } => rng.gen_range(low..=high),
            Self::Constant(value) => value,
        }
    }
}

fn check_dice(count: u32, faces: u32, modifier: i64) -> std::result::Result<(), String> {
    if count == 0 {
        return Err("dice count must be at least 1".to_string());
    }
    if faces == 0 {
        return Err("dice need at least one face".to_string());
    }
    if count > Formula::MAX_DICE {
        return Err(format!("more than {} dice", Formula::MAX_DICE));
    }
    let count = i64::from(count);
    count
        .checked_mul(i64::from(faces))
        .and_then(|high| high.checked_add(modifier))
        .and_then(|_| count.checked_add(modifier))
        .map(|_| ())
        .ok_or_else(|| "bounds out of range".to_string())
}

/// Recognizes a bare integer. `None` means "not an integer at all".
fn parse_integer(text: &str) -> Option<std::result::Result<i64, &'static str>> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().map_err(|_| "constant out of range"))
}

fn parse_count(text: &str, what: &'static str) -> std::result::Result<u32, String> {
    if text.is_empty() {
        return Err(format!("missing {what}"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("non-numeric {what}"));
    }
    text.parse().map_err(|_| format!("{what} out of range"))
}

fn parse_dice(count: &str, rest: &str) -> std::result::Result<Formula, String> {
    let count = if count.is_empty() {
        1
    } else {
        parse_count(count, "dice count")?
    };

    let (faces, modifier) = match rest.split_once('+') {
        Some((faces, modifier)) => (faces, Some(modifier)),
        None => (rest, None),
    };

    let faces = if faces == "%" {
        100
    } else {
        parse_count(faces, "face count")?
    };
    let modifier = match modifier {
        Some(text) => i64::from(parse_count(text, "modifier")?),
        None => 0,
    };

    check_dice(count, faces, modifier)?;
    Ok(Formula::Dice {
        count,
        faces,
        modifier,
    })
}

fn parse_range(low: &str, high: &str) -> std::result::Result<Formula, String> {
    let low = i64::from(parse_count(low, "range start")?);
    let high = i64::from(parse_count(high, "range end")?);
    if high < low {
        return Err("inverted range".to_string());
    }
    Ok(Formula::Range { low, high })
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice {
                count,
                faces,
                modifier,
            } => {
                write!(f, "{count}D{faces}")?;
                if *modifier > 0 {
                    write!(f, "+{modifier}")?;
                }
                Ok(())
            }
            Self::Range { low, high } => write!(f, "{low}-{high}"),
            Self::Constant(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Formula {
    fn from(value: i64) -> Self {
        Self::Constant(value)
    }
}

impl From<i32> for Formula {
    fn from(value: i32) -> Self {
        Self::Constant(i64::from(value))
    }
}

impl TryFrom<&Value> for Formula {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(Self::Constant(*n)),
            Value::Formula(text) => Self::parse(text),
            Value::Flag(_) => Err(Error::formula(value.to_string(), "a flag is not a formula")),
        }
    }
}
