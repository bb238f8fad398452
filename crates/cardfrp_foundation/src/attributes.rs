//! The attribute store shared by every entity.
//!
//! A store is an ordered mapping from case-normalized [`Key`]s to [`Value`]s.
//! It never combines keys on its own: callers that want
//! `EVASION + EVASION.ATTACK + EVASION.slash` ask for exactly those keys,
//! usually through [`sum_base_verb_subtype`].

use std::fmt;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::{Value, ValueKind};
use crate::verb::Verb;

/// String-keyed namespace of attributes.
///
/// Backed by a persistent map: cloning is O(1), which lets the engine
/// snapshot an initiator's attributes while the same entity is being mutated
/// as the recipient.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeStore {
    entries: OrdMap<Key, Value>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.remove(&key.into())
    }

    /// Looks up the exact key.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Looks up the exact key, falling back to `default`.
    #[must_use]
    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Reads a numeric attribute, if present.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the stored value has no integer reading.
    pub fn int_opt(&self, key: impl Into<Key>) -> Result<Option<i64>> {
        let key = key.into();
        match self.entries.get(&key) {
            None => Ok(None),
            Some(value) => value
                .as_int()
                .map(Some)
                .ok_or_else(|| Error::type_mismatch(key.as_str(), ValueKind::Int, value.kind())),
        }
    }

    /// Reads a numeric attribute, falling back to `default` when absent.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the stored value has no integer reading.
    pub fn int(&self, key: impl Into<Key>, default: i64) -> Result<i64> {
        Ok(self.int_opt(key)?.unwrap_or(default))
    }

    /// Adds `delta` to a numeric attribute (absent counts as zero) and
    /// returns the new value.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the stored value has no integer reading.
    pub fn add(&mut self, key: impl Into<Key>, delta: i64) -> Result<i64> {
        let key = key.into();
        let updated = self.int(&key, 0)? + delta;
        self.entries.insert(key, Value::Int(updated));
        Ok(updated)
    }

    /// Sums the numeric values of `keys`, treating absent keys as zero.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if any present value has no integer reading.
    pub fn sum(&self, keys: &[Key]) -> Result<i64> {
        keys.iter()
            .try_fold(0_i64, |acc, key| Ok(acc + self.int(key, 0)?))
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }
}

impl fmt::Debug for AttributeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}

/// Sums an attribute family over a verb's bonus paths.
///
/// For `family = "RESISTANCE"` and `verb = VERBAL.BRIBE` this is
/// `RESISTANCE + RESISTANCE.VERBAL + RESISTANCE.VERBAL.BRIBE`; attack verbs
/// also pick up the `family.SUBTYPE` shorthand.
///
/// # Errors
/// Returns `TypeMismatch` if any contributing value is not numeric.
pub fn sum_base_verb_subtype(store: &AttributeStore, family: &str, verb: &Verb) -> Result<i64> {
    store.sum(&verb.bonus_keys(family))
}
