//! Developer Tooling: read-only queries against the simulation.
//!
//! # Invariants
//! - Inspection never mutates simulation state.

pub mod inspector;

pub use inspector::{SharkSummary, SimInspector, SimSummary};

pub fn crate_info() -> &'static str {
    "atoll-tools v0.1.0"
}
