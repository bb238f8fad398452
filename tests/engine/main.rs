//! Integration tests for Layer 2: Engine
//!
//! Tests for action derivation, resolution, reception and contexts.

mod combat;
mod contexts;
