//! Robot control input: four direction keys and their pressed state.
//!
//! # Invariants
//! - The simulation consumes `KeyState`, never host key events.
//! - Unrecognized key identifiers are dropped at the mapping boundary.

pub mod keys;

pub use keys::{DirectionKey, KeyState};
