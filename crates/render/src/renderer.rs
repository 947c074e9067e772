use glam::Vec3;

use atoll_scene::SceneStore;
use atoll_sim::Simulation;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Half-height of the orthographic view volume.
    pub half_height: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        // The isometric vantage the scene was tuned for.
        Self {
            eye: Vec3::new(20.0, 20.0, 20.0),
            target: Vec3::ZERO,
            half_height: 10.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads simulation state, scene meshes, and a view
/// configuration, then produces output. It never mutates the simulation.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given simulation state and view.
    fn render(&self, sim: &Simulation, scene: &SceneStore, view: &RenderView) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable string representation of the scene state.
/// Useful for headless runs, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, sim: &Simulation, scene: &SceneStore, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Island Scene (tick={}) ===\n", sim.tick()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) half_height={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.half_height
        ));

        let robot = sim.robot_transform();
        out.push_str(&format!(
            "Robot: pos=({:.2}, {:.2}, {:.2}) yaw={:.2} flashing={}\n",
            robot.position.x,
            robot.position.y,
            robot.position.z,
            robot.yaw,
            sim.is_flashing()
        ));

        for (i, shark) in sim.sharks().iter().enumerate() {
            if let Some(data) = sim.lagoon().get(shark.actor()) {
                let p = data.transform.position;
                out.push_str(&format!(
                    "Shark {i}: pos=({:.2}, {:.2}, {:.2}) radius={:.0} chase={:.2}\n",
                    p.x,
                    p.y,
                    p.z,
                    shark.patrol_radius(),
                    shark.chase_weight()
                ));
            }
        }

        out.push_str(&format!("Meshes: {}\n", scene.len()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_fresh_scene() {
        let mut scene = SceneStore::new();
        let sim = Simulation::new(&mut scene);
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&sim, &scene, &RenderView::default());

        assert!(output.contains("tick=0"));
        assert!(output.contains("Robot: pos=(0.00, 2.00, 0.00)"));
        assert!(output.contains("Shark 0"));
        assert!(output.contains("Shark 2"));
        assert!(output.contains("Meshes: 10"));
    }

    #[test]
    fn debug_renderer_reflects_stepping() {
        let mut scene = SceneStore::new();
        let mut sim = Simulation::new(&mut scene);
        sim.step(&atoll_input::KeyState::new(), &mut scene);

        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&sim, &scene, &RenderView::default());
        assert!(output.contains("tick=1"));
    }

    #[test]
    fn render_view_default_is_isometric() {
        let view = RenderView::default();
        assert_eq!(view.eye, Vec3::new(20.0, 20.0, 20.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.half_height, 10.0);
    }
}
