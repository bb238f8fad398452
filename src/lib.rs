//! cardfrp - Headless action-resolution engine for a card-driven RPG
//!
//! This crate re-exports all layers of the cardfrp system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: cardfrp_engine      - Entity/Actor/Context, action resolution, world arena
//! Layer 1: cardfrp_dice        - Dice formulas, seedable roller
//! Layer 0: cardfrp_foundation  - Core types (Value, Key, Verb, AttributeStore, Error)
//! ```

pub use cardfrp_dice as dice;
pub use cardfrp_engine as engine;
pub use cardfrp_foundation as foundation;
