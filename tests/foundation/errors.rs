//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use cardfrp_foundation::{ActorId, ContextId, Error, ErrorContext, ErrorKind, ValueKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_formula() {
    let err = Error::formula("7 to 9", "unrecognized dice expression");
    assert!(err.is_formula());
    let msg = format!("{err}");
    assert!(msg.contains("7 to 9"));
    assert!(msg.contains("unrecognized"));
}

#[test]
fn error_unsupported_verb() {
    let err = Error::unsupported_verb("ATTACK", "table");
    assert!(matches!(err.kind, ErrorKind::UnsupportedVerb { .. }));
    assert!(!err.is_formula());
    assert_eq!(format!("{err}"), "table cannot receive verb ATTACK");
}

#[test]
fn error_invalid_compound() {
    let err = Error::invalid_compound("A++B", "empty verb component");
    assert!(matches!(err.kind, ErrorKind::InvalidCompound { .. }));
    assert!(format!("{err}").contains("A++B"));
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch("LIFE", ValueKind::Int, ValueKind::Flag);
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: ValueKind::Int,
            actual: ValueKind::Flag,
            ..
        }
    ));
}

#[test]
fn error_not_found() {
    let err = Error::context_not_found(ContextId::new(4));
    assert!(matches!(err.kind, ErrorKind::ContextNotFound(_)));
    assert!(format!("{err}").contains('4'));

    let err = Error::actor_not_found(ActorId::new(9));
    assert!(matches!(err.kind, ErrorKind::ActorNotFound(_)));
    assert!(format!("{err}").contains('9'));
}

#[test]
fn error_context_cycle() {
    let err = Error::context_cycle(ContextId::new(0), ContextId::new(2));
    let msg = format!("{err}");
    assert!(msg.contains("Context(0)"));
    assert!(msg.contains("Context(2)"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_frames() {
    let ctx = ErrorContext::new()
        .with_source("scroll of fear")
        .with_component("MENTAL.FEAR")
        .with_frame("delivery to goblin");
    let err = Error::formula("2D", "missing face count").with_context(ctx);

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.stack, ["delivery to goblin"]);
    let shown = format!("{ctx}");
    assert!(shown.starts_with("from scroll of fear resolving MENTAL.FEAR"));
    assert!(shown.contains("in delivery to goblin"));
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::formula("x", "y"));
}
