//! Case-normalized attribute keys.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dotted attribute path such as `ACCURACY`, `DAMAGE.slash` or
/// `RESISTANCE.VERBAL.BRIBE`.
///
/// Keys are trimmed and upper-cased when constructed, so `damage.Slash` and
/// `DAMAGE.SLASH` name the same attribute.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key(Arc<str>);

impl Key {
    /// Separator between path segments.
    pub const SEPARATOR: char = '.';

    /// Creates a normalized key.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self(Arc::from(path.trim().to_ascii_uppercase()))
    }

    /// Returns a new key with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        Self::new(&format!("{}{}{}", self.0, Self::SEPARATOR, segment))
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }

    /// Returns the first path segment.
    #[must_use]
    pub fn head(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Key {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
