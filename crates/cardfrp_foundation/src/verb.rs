//! Verbs and compound verbs.
//!
//! A verb is `BASE[.SUBTYPE]`; a compound verb is an ordered `+`-joined
//! sequence of verbs such as `ATTACK.STAB+PHYSICAL.POISON`. Splitting happens
//! once, when the verb is parsed, so a malformed verb is rejected before any
//! dice are rolled or any attribute is touched.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::key::Key;

/// Base verb that follows the combat path.
pub const ATTACK: &str = "ATTACK";

/// Separator between the components of a compound verb.
pub const COMPOUND_SEPARATOR: char = '+';

/// A single verb, optionally sub-typed.
///
/// Display keeps the authored spelling; equality and key derivation use the
/// normalized upper-case form.
#[derive(Clone)]
pub struct Verb {
    text: Arc<str>,
    base: Arc<str>,
    subtype: Option<Arc<str>>,
}

impl Verb {
    /// Parses a single (non-compound) verb.
    ///
    /// # Errors
    /// Returns `InvalidCompound` for an empty verb, an empty base or
    /// sub-type, more than one `.`, or a stray `+`/`,` separator.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_compound(text, "empty verb component"));
        }
        if trimmed.contains(',') {
            return Err(Error::invalid_compound(
                text,
                "',' is not a verb separator (use '+')",
            ));
        }
        if trimmed.contains(COMPOUND_SEPARATOR) {
            return Err(Error::invalid_compound(
                text,
                "compound verb where a single verb was expected",
            ));
        }

        let mut parts = trimmed.split(Key::SEPARATOR);
        let base = parts.next().unwrap_or_default().trim();
        let subtype = parts.next().map(str::trim);
        if parts.next().is_some() {
            return Err(Error::invalid_compound(
                text,
                "verb has more than one sub-type",
            ));
        }
        if base.is_empty() {
            return Err(Error::invalid_compound(text, "empty base verb"));
        }
        if subtype.is_some_and(str::is_empty) {
            return Err(Error::invalid_compound(text, "empty sub-type"));
        }

        Ok(Self {
            text: Arc::from(trimmed),
            base: Arc::from(base.to_ascii_uppercase()),
            subtype: subtype.map(|s| Arc::from(s.to_ascii_uppercase())),
        })
    }

    /// Returns the verb as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the normalized base verb.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the normalized sub-type, if any.
    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Returns true if this verb follows the combat path.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        &*self.base == ATTACK
    }

    /// Returns the full normalized key (`MENTAL.FEAR`).
    #[must_use]
    pub fn key(&self) -> Key {
        match &self.subtype {
            Some(sub) => Key::new(&self.base).join(sub),
            None => Key::new(&self.base),
        }
    }

    /// Returns the key of the base verb alone (`MENTAL`).
    #[must_use]
    pub fn base_key(&self) -> Key {
        Key::new(&self.base)
    }

    /// Returns the keys consulted for an attribute family, in order.
    ///
    /// For family `F` these are `F`, `F.BASE`, `F.BASE.SUBTYPE` and, for
    /// attack verbs only, the shorthand `F.SUBTYPE` (`ACCURACY.slash` applies
    /// to `ATTACK.slash`).
    #[must_use]
    pub fn bonus_keys(&self, family: &str) -> Vec<Key> {
        let family = Key::new(family);
        let mut keys = vec![family.clone(), family.join(&self.base)];
        if let Some(sub) = &self.subtype {
            keys.push(family.join(&self.base).join(sub));
            if self.is_attack() {
                keys.push(family.join(sub));
            }
        }
        keys
    }
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.subtype == other.subtype
    }
}

impl Eq for Verb {}

impl Hash for Verb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.subtype.hash(state);
    }
}

impl fmt::Debug for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Verb({})", self.text)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered sequence of verbs resolved one after the other.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompoundVerb {
    components: Vec<Verb>,
}

impl CompoundVerb {
    /// Splits a `+`-joined verb into its components.
    ///
    /// # Errors
    /// Returns `InvalidCompound` if the text is empty, contains an empty
    /// component, or any component is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::invalid_compound(text, "empty verb"));
        }
        let components = text
            .split(COMPOUND_SEPARATOR)
            .map(|part| {
                Verb::parse(part).map_err(|err| match err.kind {
                    crate::error::ErrorKind::InvalidCompound { reason, .. } => {
                        Error::invalid_compound(text, reason)
                    }
                    _ => err,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { components })
    }

    /// Returns the component verbs in order.
    #[must_use]
    pub fn components(&self) -> &[Verb] {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false: a parsed compound verb has at least one component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true if any component follows the combat path.
    #[must_use]
    pub fn has_attack(&self) -> bool {
        self.components.iter().any(Verb::is_attack)
    }

    /// Returns true if any component follows the attribute-affecting path.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.components.iter().any(|verb| !verb.is_attack())
    }
}

impl From<Verb> for CompoundVerb {
    fn from(verb: Verb) -> Self {
        Self {
            components: vec![verb],
        }
    }
}

impl fmt::Debug for CompoundVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompoundVerb({self})")
    }
}

impl fmt::Display for CompoundVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, verb) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "{COMPOUND_SEPARATOR}")?;
            }
            write!(f, "{verb}")?;
        }
        Ok(())
    }
}
