use atoll_common::{planar_length, ActorId};
use atoll_input::{DirectionKey, KeyState};
use atoll_terrain::{surface_height, WALKABLE_RADIUS};

use crate::lagoon::Lagoon;

/// Linear step length per frame while a movement key is held.
pub const MOVE_SPEED: f32 = 0.1;

/// Yaw step in radians per frame while a turn key is held.
pub const TURN_SPEED: f32 = 0.05;

/// Drives the robot avatar from the key state.
///
/// Rotation always applies; translation is clamped to the walkable radius
/// and accepted moves snap the robot to the island surface.
#[derive(Debug, Clone, Copy)]
pub struct RobotController {
    actor: ActorId,
}

impl RobotController {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Advance the robot by one frame.
    pub fn step(&self, lagoon: &mut Lagoon, keys: &KeyState) {
        let (turn, forward) = steering(keys);
        let Some(data) = lagoon.get_mut(self.actor) else {
            return;
        };

        // Rotation commits regardless of whether the move is accepted.
        data.transform.yaw += turn;

        let candidate = data.transform.position + data.transform.heading() * forward;
        let distance = planar_length(candidate);
        if distance < WALKABLE_RADIUS {
            data.transform.position.x = candidate.x;
            data.transform.position.z = candidate.z;
            data.transform.position.y = surface_height(distance);
        }
    }
}

/// Translate the pressed keys into (yaw delta, forward delta).
///
/// Opposing keys cancel additively. Forward is negative because yaw 0
/// faces +Z and the robot walks toward the camera's -Z.
fn steering(keys: &KeyState) -> (f32, f32) {
    let mut turn = 0.0;
    let mut forward = 0.0;
    if keys.is_pressed(DirectionKey::TurnLeft) {
        turn += TURN_SPEED;
    }
    if keys.is_pressed(DirectionKey::TurnRight) {
        turn -= TURN_SPEED;
    }
    if keys.is_pressed(DirectionKey::Forward) {
        forward -= MOVE_SPEED;
    }
    if keys.is_pressed(DirectionKey::Backward) {
        forward += MOVE_SPEED;
    }
    (turn, forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_common::Transform;
    use glam::Vec3;

    fn lagoon_with_robot() -> (Lagoon, RobotController) {
        let mut lagoon = Lagoon::new();
        let actor = lagoon.spawn(Transform::from_position(Vec3::new(
            0.0,
            surface_height(0.0),
            0.0,
        )));
        (lagoon, RobotController::new(actor))
    }

    fn keys(held: &[DirectionKey]) -> KeyState {
        let mut k = KeyState::new();
        for key in held {
            k.press(*key);
        }
        k
    }

    #[test]
    fn idle_step_leaves_position_at_summit() {
        let (mut lagoon, robot) = lagoon_with_robot();
        robot.step(&mut lagoon, &KeyState::new());
        let t = lagoon.get(robot.actor()).unwrap().transform;
        assert_eq!(t.position.x, 0.0);
        assert_eq!(t.position.z, 0.0);
        assert_eq!(t.position.y, 2.0);
    }

    #[test]
    fn forward_fifty_steps_moves_minus_z_by_five() {
        let (mut lagoon, robot) = lagoon_with_robot();
        let held = keys(&[DirectionKey::Forward]);
        for _ in 0..50 {
            robot.step(&mut lagoon, &held);
        }
        let t = lagoon.get(robot.actor()).unwrap().transform;
        assert!(t.position.x.abs() < 1e-4);
        assert!((t.position.z + 5.0).abs() < 1e-4);
        // Height tracks the slope at the new distance.
        assert!((t.position.y - surface_height(5.0)).abs() < 1e-4);
    }

    #[test]
    fn opposing_turn_keys_cancel() {
        let (mut lagoon, robot) = lagoon_with_robot();
        let held = keys(&[DirectionKey::TurnLeft, DirectionKey::TurnRight]);
        robot.step(&mut lagoon, &held);
        assert_eq!(lagoon.get(robot.actor()).unwrap().transform.yaw, 0.0);
    }

    #[test]
    fn turning_alone_does_not_translate() {
        let (mut lagoon, robot) = lagoon_with_robot();
        let held = keys(&[DirectionKey::TurnLeft]);
        for _ in 0..10 {
            robot.step(&mut lagoon, &held);
        }
        let t = lagoon.get(robot.actor()).unwrap().transform;
        assert!((t.yaw - 10.0 * TURN_SPEED).abs() < 1e-6);
        assert_eq!(t.position.x, 0.0);
        assert_eq!(t.position.z, 0.0);
    }

    #[test]
    fn clamp_rejects_moves_past_walkable_radius() {
        let (mut lagoon, robot) = lagoon_with_robot();
        // Walk backward (+Z) far longer than the island allows.
        let held = keys(&[DirectionKey::Backward]);
        for _ in 0..200 {
            robot.step(&mut lagoon, &held);
            let d = lagoon
                .get(robot.actor())
                .unwrap()
                .transform
                .planar_distance_from_origin();
            assert!(d < WALKABLE_RADIUS);
        }
        let t = lagoon.get(robot.actor()).unwrap().transform;
        // Stuck just inside the rim.
        assert!(t.position.z > WALKABLE_RADIUS - MOVE_SPEED - 1e-4);
    }

    #[test]
    fn rotation_still_applies_when_move_is_rejected() {
        let (mut lagoon, robot) = lagoon_with_robot();
        // Just inside the rim, facing so that backward steps straight out.
        let rim = Transform::from_position(Vec3::new(0.0, surface_height(6.95), 6.95));
        lagoon.set_transform(robot.actor(), rim);

        let walk_and_turn = keys(&[DirectionKey::Backward, DirectionKey::TurnLeft]);
        robot.step(&mut lagoon, &walk_and_turn);
        let t = lagoon.get(robot.actor()).unwrap().transform;
        // The candidate lands past the clamp, so the position is untouched...
        assert_eq!(t.position, rim.position);
        // ...while the turn still registered.
        assert!((t.yaw - TURN_SPEED).abs() < 1e-6);
    }

    #[test]
    fn steering_deltas() {
        assert_eq!(steering(&KeyState::new()), (0.0, 0.0));
        assert_eq!(
            steering(&keys(&[DirectionKey::Forward])),
            (0.0, -MOVE_SPEED)
        );
        assert_eq!(
            steering(&keys(&[DirectionKey::Backward])),
            (0.0, MOVE_SPEED)
        );
        assert_eq!(
            steering(&keys(&[DirectionKey::TurnLeft])),
            (TURN_SPEED, 0.0)
        );
        assert_eq!(
            steering(&keys(&[DirectionKey::TurnRight])),
            (-TURN_SPEED, 0.0)
        );
    }
}
