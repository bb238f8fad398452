//! Integration tests for Layer 1: Dice
//!
//! Tests for formula grammar, roll distributions, and seeded rollers.

mod rolling;
