use atoll_common::ActorId;
use atoll_scene::{palette, rgba, Material, SceneStore};

/// Planar distance below which a shark registers a hit on the robot.
pub const HIT_RANGE: f32 = 1.5;

/// Flash-timer increment per frame. Frame-count driven, not wall clock.
pub const FLASH_STEP: f32 = 0.1;

/// The flash ends once the timer exceeds this.
pub const FLASH_DURATION: f32 = 1.0;

/// Timed material override signalling a shark collision.
///
/// On entry every flash-eligible sub-mesh of the target actor has its
/// material snapshotted and overridden to the alert color at full emissive
/// intensity; when the timer runs out the snapshot is restored verbatim.
/// Hits arriving mid-flash neither re-trigger nor extend the episode.
#[derive(Debug, Clone)]
pub struct FlashEffect {
    actor: ActorId,
    state: State,
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Flashing {
        time: f32,
        saved: Vec<(usize, Material)>,
    },
}

impl FlashEffect {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            state: State::Idle,
        }
    }

    pub fn is_flashing(&self) -> bool {
        matches!(self.state, State::Flashing { .. })
    }

    /// Current flash timer; zero when idle.
    pub fn flash_time(&self) -> f32 {
        match self.state {
            State::Idle => 0.0,
            State::Flashing { time, .. } => time,
        }
    }

    /// Advance the state machine by one frame.
    ///
    /// `hit` is whether any shark is within `HIT_RANGE` this frame. The
    /// entry frame also ticks the timer, matching the per-step accounting
    /// of the rest of the simulation.
    pub fn step(&mut self, scene: &mut SceneStore, hit: bool) {
        if matches!(self.state, State::Idle) && hit {
            self.enter(scene);
        }

        if let State::Flashing { time, saved } = &mut self.state {
            *time += FLASH_STEP;
            if *time > FLASH_DURATION {
                let saved = std::mem::take(saved);
                self.restore(scene, saved);
                self.state = State::Idle;
            }
        }
    }

    fn enter(&mut self, scene: &mut SceneStore) {
        let Some(mesh) = scene.get_mut(self.actor) else {
            return;
        };
        let alert = rgba(palette::ALERT, 1.0);
        let mut saved = Vec::new();
        for (i, part) in mesh.parts_mut().iter_mut().enumerate() {
            if part.tag.flash_exempt() {
                continue;
            }
            saved.push((i, part.material));
            part.material.base_color = alert;
            part.material.emissive = [alert[0], alert[1], alert[2]];
            part.material.emissive_intensity = 1.0;
        }
        tracing::debug!(parts = saved.len(), "collision flash triggered");
        self.state = State::Flashing { time: 0.0, saved };
    }

    fn restore(&self, scene: &mut SceneStore, saved: Vec<(usize, Material)>) {
        let Some(mesh) = scene.get_mut(self.actor) else {
            return;
        };
        let parts = mesh.parts_mut();
        for (i, material) in saved {
            if let Some(part) = parts.get_mut(i) {
                part.material.base_color = material.base_color;
                part.material.emissive = material.emissive;
                part.material.emissive_intensity = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_scene::{ActorMesh, PartTag};

    fn scene_with_robot() -> (SceneStore, ActorId) {
        let mut scene = SceneStore::new();
        let actor = ActorId::new();
        scene.insert(actor, ActorMesh::robot());
        (scene, actor)
    }

    fn materials(scene: &SceneStore, actor: ActorId) -> Vec<Material> {
        scene
            .get(actor)
            .unwrap()
            .parts()
            .iter()
            .map(|p| p.material)
            .collect()
    }

    #[test]
    fn idle_without_hit_stays_idle() {
        let (mut scene, actor) = scene_with_robot();
        let before = materials(&scene, actor);
        let mut flash = FlashEffect::new(actor);
        for _ in 0..20 {
            flash.step(&mut scene, false);
        }
        assert!(!flash.is_flashing());
        assert_eq!(materials(&scene, actor), before);
    }

    #[test]
    fn hit_overrides_all_but_eyes() {
        let (mut scene, actor) = scene_with_robot();
        let before = materials(&scene, actor);
        let mut flash = FlashEffect::new(actor);
        flash.step(&mut scene, true);

        assert!(flash.is_flashing());
        let alert = rgba(palette::ALERT, 1.0);
        for (part, original) in scene
            .get(actor)
            .unwrap()
            .parts()
            .iter()
            .zip(before.iter())
        {
            if part.tag == PartTag::Eye {
                assert_eq!(part.material, *original);
            } else {
                assert_eq!(part.material.base_color, alert);
                assert_eq!(part.material.emissive_intensity, 1.0);
            }
        }
    }

    #[test]
    fn timer_starts_at_zero_and_steps_by_tenths() {
        let (mut scene, actor) = scene_with_robot();
        let mut flash = FlashEffect::new(actor);
        assert_eq!(flash.flash_time(), 0.0);

        flash.step(&mut scene, true);
        assert!((flash.flash_time() - FLASH_STEP).abs() < 1e-6);
        flash.step(&mut scene, false);
        assert!((flash.flash_time() - 2.0 * FLASH_STEP).abs() < 1e-6);
    }

    #[test]
    fn full_cycle_restores_materials_bit_identical() {
        let (mut scene, actor) = scene_with_robot();
        let before = materials(&scene, actor);
        let mut flash = FlashEffect::new(actor);

        flash.step(&mut scene, true);
        let mut steps = 1;
        while flash.is_flashing() {
            flash.step(&mut scene, false);
            steps += 1;
            assert!(steps < 100, "flash never ended");
        }
        assert_eq!(materials(&scene, actor), before);
    }

    #[test]
    fn hits_during_flash_do_not_extend_it() {
        let (mut scene, actor) = scene_with_robot();

        let episode_length = |hammer: bool, scene: &mut SceneStore| {
            let mut flash = FlashEffect::new(actor);
            flash.step(scene, true);
            let mut steps = 1;
            while flash.is_flashing() {
                flash.step(scene, hammer);
                steps += 1;
                assert!(steps < 100, "flash never ended");
            }
            steps
        };

        // Hammering the hit flag every frame must not extend the episode.
        let single = episode_length(false, &mut scene);
        let hammered = episode_length(true, &mut scene);
        assert_eq!(single, hammered);
        // Roughly FLASH_DURATION / FLASH_STEP frames.
        assert!((10..=11).contains(&single));
    }

    #[test]
    fn retriggers_after_cycle_completes() {
        let (mut scene, actor) = scene_with_robot();
        let mut flash = FlashEffect::new(actor);
        flash.step(&mut scene, true);
        while flash.is_flashing() {
            flash.step(&mut scene, false);
        }

        flash.step(&mut scene, true);
        assert!(flash.is_flashing());
        assert!((flash.flash_time() - FLASH_STEP).abs() < 1e-6);
    }

    #[test]
    fn missing_actor_is_a_silent_noop() {
        let mut scene = SceneStore::new();
        let mut flash = FlashEffect::new(ActorId::new());
        flash.step(&mut scene, true);
        // Enter found no mesh; the machine stays idle rather than erroring.
        assert!(!flash.is_flashing());
    }
}
