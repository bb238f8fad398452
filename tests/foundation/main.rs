//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Key, Verb, AttributeStore and Error.

mod attributes;
mod errors;
mod values;
mod verbs;
