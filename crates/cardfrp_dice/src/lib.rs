//! Dice formulas and seedable rolling for cardfrp.
//!
//! This crate provides:
//! - [`Formula`] - Parsed `NdF+M`, `LO-HI` and constant roll specifications
//! - [`DiceSum`] - Ordered sums of formulas
//! - [`DiceRoller`] - A seedable generator every resolution draws from

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod formula;
pub mod roller;
pub mod sum;

pub use formula::Formula;
pub use roller::DiceRoller;
pub use sum::DiceSum;
