use serde::Serialize;

use atoll_sim::Simulation;

/// Simulation inspector for developer tooling.
///
/// Provides read-only queries against the simulation for debugging, the
/// desktop side panel, and CLI output.
pub struct SimInspector;

impl SimInspector {
    /// Produce a summary of the simulation state.
    pub fn summary(sim: &Simulation) -> SimSummary {
        let robot = sim.robot_transform();
        SimSummary {
            tick: sim.tick(),
            actor_count: sim.lagoon().actor_count(),
            robot_position: [robot.position.x, robot.position.y, robot.position.z],
            robot_yaw: robot.yaw,
            robot_planar_distance: robot.planar_distance_from_origin(),
            flashing: sim.is_flashing(),
            flash_time: sim.flash_time(),
            sharks: sim
                .sharks()
                .iter()
                .map(|shark| {
                    let position = sim
                        .lagoon()
                        .get(shark.actor())
                        .map(|d| {
                            let p = d.transform.position;
                            [p.x, p.y, p.z]
                        })
                        .unwrap_or_default();
                    SharkSummary {
                        patrol_radius: shark.patrol_radius(),
                        chase_weight: shark.chase_weight(),
                        position,
                    }
                })
                .collect(),
        }
    }
}

/// Summary of simulation state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SimSummary {
    pub tick: u64,
    pub actor_count: usize,
    pub robot_position: [f32; 3],
    pub robot_yaw: f32,
    pub robot_planar_distance: f32,
    pub flashing: bool,
    pub flash_time: f32,
    pub sharks: Vec<SharkSummary>,
}

/// Per-shark line in the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SharkSummary {
    pub patrol_radius: f32,
    pub chase_weight: f32,
    pub position: [f32; 3],
}

impl std::fmt::Display for SimSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Sim: tick={} actors={} flashing={}",
            self.tick, self.actor_count, self.flashing
        )?;
        writeln!(
            f,
            "Robot: pos=({:.2}, {:.2}, {:.2}) yaw={:.2} d={:.2}",
            self.robot_position[0],
            self.robot_position[1],
            self.robot_position[2],
            self.robot_yaw,
            self.robot_planar_distance
        )?;
        for (i, shark) in self.sharks.iter().enumerate() {
            writeln!(
                f,
                "Shark {i}: radius={:.0} chase={:.2} pos=({:.2}, {:.2}, {:.2})",
                shark.patrol_radius,
                shark.chase_weight,
                shark.position[0],
                shark.position[1],
                shark.position[2]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_input::KeyState;
    use atoll_scene::SceneStore;

    fn new_sim() -> (SceneStore, Simulation) {
        let mut scene = SceneStore::new();
        let sim = Simulation::new(&mut scene);
        (scene, sim)
    }

    #[test]
    fn summary_fresh_scene() {
        let (_, sim) = new_sim();
        let summary = SimInspector::summary(&sim);
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.actor_count, 10);
        assert_eq!(summary.sharks.len(), 3);
        assert!(!summary.flashing);
        assert_eq!(summary.robot_position, [0.0, 2.0, 0.0]);
    }

    #[test]
    fn summary_tracks_stepping() {
        let (mut scene, mut sim) = new_sim();
        for _ in 0..5 {
            sim.step(&KeyState::new(), &mut scene);
        }
        let summary = SimInspector::summary(&sim);
        assert_eq!(summary.tick, 5);
    }

    #[test]
    fn summary_display() {
        let (_, sim) = new_sim();
        let s = format!("{}", SimInspector::summary(&sim));
        assert!(s.contains("tick=0"));
        assert!(s.contains("Shark 2"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let (_, sim) = new_sim();
        let json = serde_json::to_string(&SimInspector::summary(&sim)).unwrap();
        assert!(json.contains("\"tick\":0"));
        assert!(json.contains("\"sharks\""));
    }
}
