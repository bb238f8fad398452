//! Cross-layer integration tests
//!
//! Scenarios that exercise formulas, attributes, actions and contexts
//! together through the umbrella crate.

mod reproducibility;
