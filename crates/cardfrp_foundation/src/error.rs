//! Error types for the cardfrp engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error here describes bad content or a bad call; a missed attack or a
//! resisted condition is an ordinary outcome and never an error.

use std::fmt;

use thiserror::Error;

use crate::id::{ActorId, ContextId};
use crate::value::ValueKind;

/// The main error type for cardfrp operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed dice formula error.
    #[must_use]
    pub fn formula(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Formula {
            formula: formula.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unsupported verb error.
    #[must_use]
    pub fn unsupported_verb(verb: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedVerb {
            verb: verb.into(),
            recipient: recipient.into(),
        })
    }

    /// Creates an invalid compound verb error.
    #[must_use]
    pub fn invalid_compound(verb: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCompound {
            verb: verb.into(),
            reason: reason.into(),
        })
    }

    /// Creates a type mismatch error for an attribute lookup.
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>, expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        })
    }

    /// Creates a context cycle error.
    #[must_use]
    pub fn context_cycle(child: ContextId, parent: ContextId) -> Self {
        Self::new(ErrorKind::ContextCycle { child, parent })
    }

    /// Creates a context not found error.
    #[must_use]
    pub fn context_not_found(id: ContextId) -> Self {
        Self::new(ErrorKind::ContextNotFound(id))
    }

    /// Creates an actor not found error.
    #[must_use]
    pub fn actor_not_found(id: ActorId) -> Self {
        Self::new(ErrorKind::ActorNotFound(id))
    }

    /// Returns true if this is a dice formula error.
    #[must_use]
    pub fn is_formula(&self) -> bool {
        matches!(self.kind, ErrorKind::Formula { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A dice formula could not be parsed.
    #[error("malformed dice formula {formula:?}: {reason}")]
    Formula {
        /// The formula text as written.
        formula: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A recipient cannot process this verb.
    #[error("{recipient} cannot receive verb {verb}")]
    UnsupportedVerb {
        /// The verb that was delivered.
        verb: String,
        /// Name of the recipient.
        recipient: String,
    },

    /// A (compound) verb could not be split into components.
    #[error("invalid verb {verb:?}: {reason}")]
    InvalidCompound {
        /// The verb text as written.
        verb: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An attribute held a value of the wrong kind.
    #[error("attribute {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The attribute key that was read.
        key: String,
        /// The kind of value the caller needed.
        expected: ValueKind,
        /// The kind of value actually stored.
        actual: ValueKind,
    },

    /// Linking a context to a parent would create a cycle.
    #[error("context {child} cannot be nested in {parent}: would create a cycle")]
    ContextCycle {
        /// The context being re-parented.
        child: ContextId,
        /// The requested parent.
        parent: ContextId,
    },

    /// Context handle does not refer to a live context.
    #[error("context not found: {0}")]
    ContextNotFound(ContextId),

    /// Actor handle does not refer to a live actor.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The enabling object or recipient involved.
    pub source: Option<String>,
    /// The component verb being resolved.
    pub component: Option<String>,
    /// Chain of resolution steps, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source object.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the component verb.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "from {source}")?;
        }
        if let Some(component) = &self.component {
            write!(f, " resolving {component}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for cardfrp operations.
pub type Result<T> = std::result::Result<T, Error>;
