//! Simulation core: the lagoon world and the per-frame behaviors that
//! drive it.
//!
//! One frame step runs robot → sharks → collision flash, in that order;
//! sharks always read the robot position committed earlier in the same
//! frame. All tuning constants are per-step values: the simulation has no
//! notion of wall-clock time, the host decides how often to step.
//!
//! # Invariants
//! - The robot's planar distance from the origin stays below the walkable
//!   clamp radius.
//! - Each shark's chase weight stays within [0, 1].
//! - A flash episode starts with its timer at zero and restores the exact
//!   materials it snapshotted.

pub mod flash;
pub mod lagoon;
pub mod robot;
pub mod shark;
pub mod simulation;

pub use flash::{FlashEffect, FLASH_DURATION, FLASH_STEP, HIT_RANGE};
pub use lagoon::{ActorData, Lagoon};
pub use robot::{RobotController, MOVE_SPEED, TURN_SPEED};
pub use shark::{Shark, AGGRO_RANGE, SHORE_GATE_RADIUS, WATER_LINE_RADIUS};
pub use simulation::Simulation;
