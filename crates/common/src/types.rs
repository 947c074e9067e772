use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an actor in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position plus a yaw angle about +Y.
///
/// Actors in this scene only ever rotate about the vertical axis, so the
/// rotation is a single angle in radians rather than a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Unit heading vector in the XZ plane for the current yaw.
    ///
    /// Forward motion adds `heading() * forward_delta` to the position, so
    /// yaw 0 faces +Z.
    pub fn heading(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Planar (XZ) distance of this transform from the world origin.
    pub fn planar_distance_from_origin(&self) -> f32 {
        planar_length(self.position)
    }
}

/// Length of a position's XZ projection.
pub fn planar_length(v: Vec3) -> f32 {
    Vec2::new(v.x, v.z).length()
}

/// Planar (XZ) distance between two positions. Y is ignored.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
