//! Shared types for the atoll scene: actor ids, transforms, planar geometry.
//!
//! # Invariants
//! - `ActorId` is `Ord` so `BTreeMap` iteration is deterministic.
//! - All distances used by the simulation are planar (XZ); the Y axis is
//!   derived from the terrain or fixed per actor.

pub mod types;

pub use types::{planar_distance, planar_length, ActorId, Transform};
