use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

use atoll_common::{planar_length, ActorId, Transform};

use crate::lagoon::Lagoon;

/// Distance within which a shark favors pursuit over patrol.
pub const AGGRO_RANGE: f32 = 16.0;

/// The robot counts as "in the water" beyond this planar distance.
pub const WATER_LINE_RADIUS: f32 = 6.0;

/// Sharks stop drifting their chase target once inside this planar
/// distance, so they never beach themselves.
pub const SHORE_GATE_RADIUS: f32 = 6.5;

/// Chase-target drift per frame toward the robot.
const CHASE_STEP: f32 = 0.1;

/// Chase-weight ramp per frame while engaged. Faster than disengagement,
/// which makes aggression sticky.
const ENGAGE_RATE: f32 = 0.02;

/// Chase-weight decay per frame while disengaged.
const DISENGAGE_RATE: f32 = 0.01;

/// Fraction of the remaining gap the target eases back toward the patrol
/// point each frame.
const PATROL_EASE: f32 = 0.02;

/// Fixed swim depth for all sharks.
const SWIM_DEPTH: f32 = -0.3;

/// Per-axis velocity magnitude below which facing is left alone, to avoid
/// jitter when nearly stationary.
const FACING_EPSILON: f32 = 0.001;

/// One shark's behavior state: a circular patrol blended with a pursuit
/// target by a chase weight.
#[derive(Debug, Clone)]
pub struct Shark {
    pub(crate) actor: ActorId,
    pub(crate) angle: f32,
    pub(crate) radius: f32,
    pub(crate) speed: f32,
    pub(crate) target: Vec2,
    pub(crate) chase_weight: f32,
    prev_pos: Vec2,
}

impl Shark {
    /// Spawn a shark into the lagoon on its patrol circle.
    ///
    /// `index` spaces the initial phase angles a third of a turn apart.
    pub fn spawn(lagoon: &mut Lagoon, index: usize, radius: f32, speed: f32) -> Self {
        let angle = index as f32 * TAU / 3.0;
        let start = Vec2::new(angle.cos(), angle.sin()) * radius;
        let actor = lagoon.spawn(Transform::from_position(Vec3::new(
            start.x, SWIM_DEPTH, start.y,
        )));
        Self {
            actor,
            angle,
            radius,
            speed,
            target: start,
            chase_weight: 0.0,
            prev_pos: start,
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn chase_weight(&self) -> f32 {
        self.chase_weight
    }

    pub fn patrol_radius(&self) -> f32 {
        self.radius
    }

    /// Advance this shark by one frame against the robot's current position.
    pub fn step(&mut self, lagoon: &mut Lagoon, robot_pos: Vec3) {
        self.angle += self.speed;
        let circle = Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius;

        let Some(data) = lagoon.get_mut(self.actor) else {
            return;
        };
        let pos = Vec2::new(data.transform.position.x, data.transform.position.z);
        let robot = Vec2::new(robot_pos.x, robot_pos.z);

        let robot_in_water = planar_length(robot_pos) > WATER_LINE_RADIUS;
        let to_robot = robot - pos;
        let distance = to_robot.length();

        if robot_in_water && distance < AGGRO_RANGE {
            self.chase_weight = (self.chase_weight + ENGAGE_RATE).min(1.0);
            // Drift the target toward the robot, unless that would carry the
            // shark onto the shore. A zero distance leaves the target alone.
            if pos.length() > SHORE_GATE_RADIUS && distance > 0.0 {
                self.target += to_robot / distance * CHASE_STEP;
            }
        } else {
            self.chase_weight = (self.chase_weight - DISENGAGE_RATE).max(0.0);
            self.target += (circle - self.target) * PATROL_EASE;
        }

        let blended = circle * (1.0 - self.chase_weight) + self.target * self.chase_weight;

        // Face along the per-frame velocity, but only when actually moving.
        let velocity = blended - self.prev_pos;
        if velocity.x.abs() > FACING_EPSILON || velocity.y.abs() > FACING_EPSILON {
            data.transform.yaw = velocity.x.atan2(velocity.y) - FRAC_PI_2;
        }
        self.prev_pos = blended;

        data.transform.position = Vec3::new(blended.x, SWIM_DEPTH, blended.y);
    }
}
