//! Island height field.
//!
//! The island is a cone; height is a pure function of planar distance from
//! the world origin. Two formulas coexist on purpose: one places decorative
//! props at setup time, the other is the surface the robot walks on. Both
//! carry hand-tuned coefficients that the rest of the scene is calibrated
//! against.
//!
//! # Invariants
//! - Both functions are pure and total over non-negative distances.
//! - `surface_height(0.0) == 2.0` (the island summit under the robot).

pub mod height;

pub use height::{
    prop_placement_height, surface_height, ISLAND_RADIUS, PROP_RADIUS, WALKABLE_RADIUS,
};
