//! Attribute values.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value stored under an attribute key.
///
/// Values are immutable and cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Plain integer (bonus, counter, LIFE, ...).
    Int(i64),
    /// Dice formula text such as `"D6+2"`, `"3-9"` or `"20"`.
    ///
    /// Parsing is deferred to the dice layer; the text is kept as authored.
    Formula(Arc<str>),
    /// Boolean flag.
    Flag(bool),
}

/// The kind of a [`Value`], used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// [`Value::Int`].
    Int,
    /// [`Value::Formula`].
    Formula,
    /// [`Value::Flag`].
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Formula => write!(f, "formula"),
            Self::Flag => write!(f, "flag"),
        }
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Formula(_) => ValueKind::Formula,
            Self::Flag(_) => ValueKind::Flag,
        }
    }

    /// Reads this value as an integer.
    ///
    /// A formula whose text is a plain (optionally negative) integer reads as
    /// that integer, so `"5"` and `5` are interchangeable in numeric lookups.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Formula(text) => text.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }

    /// Reads this value as formula text.
    ///
    /// Integers render as constant formulas; flags have no formula reading.
    #[must_use]
    pub fn as_formula(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Formula(text) => Some(Cow::Borrowed(text)),
            Self::Flag(_) => None,
        }
    }

    /// Attempts to extract a flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Formula(text) => write!(f, "\"{text}\""),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Formula(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Formula(Arc::from(s))
    }
}
