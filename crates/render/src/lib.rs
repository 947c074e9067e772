//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderer cannot mutate simulation truth directly.
//! - Render state derives from the lagoon and the scene store.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "atoll-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
