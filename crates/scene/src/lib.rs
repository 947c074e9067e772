//! Actor mesh hierarchies and their materials.
//!
//! Each actor owns a flat list of tagged sub-mesh parts. Parts carry a
//! primitive shape, a local offset/rotation, and a phong-like material the
//! simulation may read and overwrite (the collision flash does exactly
//! that). Deterministic iteration everywhere: the store is a BTreeMap and
//! parts keep their construction order.
//!
//! # Invariants
//! - Part order within an `ActorMesh` is stable for the actor's lifetime.
//! - Flash eligibility is an explicit part tag, never a color comparison.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI, TAU};

use atoll_common::ActorId;

pub mod palette {
    //! Scene colors, kept as the original hand-tuned hex values.

    pub const SKY: u32 = 0x87CEEB;
    pub const OCEAN: u32 = 0x006994;
    pub const SAND: u32 = 0xC2B280;
    pub const TRUNK: u32 = 0x8B4513;
    pub const FROND: u32 = 0x228B22;
    pub const SHARK_GRAY: u32 = 0x505050;
    pub const ROBOT_RED: u32 = 0xFF4444;
    pub const EYE_WHITE: u32 = 0xFFFFFF;
    pub const ALERT: u32 = 0xFF0000;
}

/// Convert a 0xRRGGBB color to linear-ish float RGBA.
pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
        alpha,
    ]
}

/// Role of a sub-mesh within its actor.
///
/// Tags are capabilities, not colors: `flash_exempt` marks parts the
/// collision flash must leave alone (the robot's eyes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartTag {
    Body,
    Head,
    Leg,
    Eye,
    Tail,
    Fin,
    Trunk,
    Frond,
    Ground,
    Water,
}

impl PartTag {
    /// Whether the collision flash skips this part.
    pub fn flash_exempt(self) -> bool {
        matches!(self, Self::Eye)
    }
}

/// Primitive shape of a sub-mesh, in its own local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PartShape {
    Cuboid { dims: Vec3 },
    Cone { radius: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
    Sphere { radius: f32 },
    Plane { width: f32, depth: f32 },
}

impl PartShape {
    /// Scale applied to the renderer's unit mesh for this shape.
    pub fn unit_scale(&self) -> Vec3 {
        match *self {
            Self::Cuboid { dims } => dims,
            Self::Cone { radius, height } | Self::Cylinder { radius, height } => {
                Vec3::new(radius, height, radius)
            }
            Self::Sphere { radius } => Vec3::splat(radius),
            Self::Plane { width, depth } => Vec3::new(width, 1.0, depth),
        }
    }
}

/// Phong-like material: base color plus emissive term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

impl Material {
    /// Opaque matte material from a hex color.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            base_color: rgba(hex, 1.0),
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.base_color[3] = alpha;
        self
    }

    pub fn with_emissive(mut self, hex: u32, intensity: f32) -> Self {
        let [r, g, b, _] = rgba(hex, 1.0);
        self.emissive = [r, g, b];
        self.emissive_intensity = intensity;
        self
    }

    pub fn is_translucent(&self) -> bool {
        self.base_color[3] < 1.0
    }
}

/// One sub-mesh: shape, placement within the actor, material, tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    pub tag: PartTag,
    pub shape: PartShape,
    pub offset: Vec3,
    pub rotation: Quat,
    pub material: Material,
}

impl MeshPart {
    fn new(tag: PartTag, shape: PartShape, offset: Vec3, material: Material) -> Self {
        Self {
            tag,
            shape,
            offset,
            rotation: Quat::IDENTITY,
            material,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A complete actor mesh: an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorMesh {
    parts: Vec<MeshPart>,
}

impl ActorMesh {
    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    pub fn parts_mut(&mut self) -> &mut [MeshPart] {
        &mut self.parts
    }

    /// The robot avatar: red cuboid body, head, and legs; white emissive
    /// sphere eyes (tagged `Eye`, exempt from the flash effect).
    pub fn robot() -> Self {
        let red = Material::from_hex(palette::ROBOT_RED);
        let eye = Material::from_hex(palette::EYE_WHITE).with_emissive(palette::EYE_WHITE, 0.5);
        let mut parts = vec![
            MeshPart::new(
                PartTag::Body,
                PartShape::Cuboid {
                    dims: Vec3::new(0.8, 1.2, 0.5),
                },
                Vec3::new(0.0, 0.6, 0.0),
                red,
            ),
            MeshPart::new(
                PartTag::Head,
                PartShape::Cuboid {
                    dims: Vec3::new(0.5, 0.5, 0.5),
                },
                Vec3::new(0.0, 1.45, 0.0),
                red,
            ),
            MeshPart::new(
                PartTag::Eye,
                PartShape::Sphere { radius: 0.08 },
                Vec3::new(-0.15, 1.45, -0.25),
                eye,
            ),
            MeshPart::new(
                PartTag::Eye,
                PartShape::Sphere { radius: 0.08 },
                Vec3::new(0.15, 1.45, -0.25),
                eye,
            ),
        ];
        for (x, z) in [(-0.25, -0.15), (0.25, -0.15), (-0.25, 0.15), (0.25, 0.15)] {
            parts.push(MeshPart::new(
                PartTag::Leg,
                PartShape::Cuboid {
                    dims: Vec3::new(0.15, 0.4, 0.15),
                },
                Vec3::new(x, 0.0, z),
                red,
            ));
        }
        Self { parts }
    }

    /// A shark: horizontal cone body, angled tail cone, dorsal fin.
    pub fn shark() -> Self {
        let gray = Material::from_hex(palette::SHARK_GRAY);
        Self {
            parts: vec![
                MeshPart::new(
                    PartTag::Body,
                    PartShape::Cone {
                        radius: 0.5,
                        height: 2.0,
                    },
                    Vec3::ZERO,
                    gray,
                )
                .rotated(Quat::from_rotation_z(FRAC_PI_2)),
                MeshPart::new(
                    PartTag::Tail,
                    PartShape::Cone {
                        radius: 0.4,
                        height: 1.0,
                    },
                    Vec3::new(-1.2, 0.2, 0.0),
                    gray,
                )
                .rotated(Quat::from_rotation_z(-FRAC_PI_4)),
                MeshPart::new(
                    PartTag::Fin,
                    PartShape::Cone {
                        radius: 0.2,
                        height: 0.8,
                    },
                    Vec3::new(0.0, 0.5, 0.0),
                    gray,
                )
                .rotated(Quat::from_rotation_z(PI)),
            ],
        }
    }

    /// A palm tree: trunk cylinder plus five fronds fanned around the top.
    pub fn palm() -> Self {
        let trunk = Material::from_hex(palette::TRUNK);
        let frond = Material::from_hex(palette::FROND);
        let mut parts = vec![MeshPart::new(
            PartTag::Trunk,
            PartShape::Cylinder {
                radius: 0.25,
                height: 3.0,
            },
            Vec3::new(0.0, 1.5, 0.0),
            trunk,
        )];
        for i in 0..5 {
            let around = Quat::from_rotation_y(i as f32 / 5.0 * TAU);
            let droop = Quat::from_rotation_x(FRAC_PI_8) * Quat::from_rotation_z(FRAC_PI_4);
            parts.push(
                MeshPart::new(
                    PartTag::Frond,
                    PartShape::Plane {
                        width: 2.0,
                        depth: 1.0,
                    },
                    Vec3::new(0.0, 3.0, 0.0),
                    frond,
                )
                .rotated(around * droop),
            );
        }
        Self { parts }
    }

    /// The island cone.
    pub fn island() -> Self {
        Self {
            parts: vec![MeshPart::new(
                PartTag::Ground,
                PartShape::Cone {
                    radius: 8.0,
                    height: 4.0,
                },
                Vec3::ZERO,
                Material::from_hex(palette::SAND),
            )],
        }
    }

    /// The translucent ocean plane.
    pub fn ocean() -> Self {
        Self {
            parts: vec![MeshPart::new(
                PartTag::Water,
                PartShape::Plane {
                    width: 100.0,
                    depth: 100.0,
                },
                Vec3::ZERO,
                Material::from_hex(palette::OCEAN).with_alpha(0.8),
            )],
        }
    }
}

/// Errors from scene store lookups.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("unknown actor: {0:?}")]
    UnknownActor(ActorId),
}

/// All actor meshes in the scene, keyed by actor id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneStore {
    actors: BTreeMap<ActorId, ActorMesh>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: ActorId, mesh: ActorMesh) {
        self.actors.insert(actor, mesh);
    }

    pub fn get(&self, actor: ActorId) -> Option<&ActorMesh> {
        self.actors.get(&actor)
    }

    pub fn get_mut(&mut self, actor: ActorId) -> Option<&mut ActorMesh> {
        self.actors.get_mut(&actor)
    }

    /// Strict lookup for callers that treat a missing mesh as a bug.
    pub fn mesh_mut(&mut self, actor: ActorId) -> Result<&mut ActorMesh, SceneError> {
        self.actors
            .get_mut(&actor)
            .ok_or(SceneError::UnknownActor(actor))
    }

    pub fn remove(&mut self, actor: ActorId) -> Option<ActorMesh> {
        self.actors.remove(&actor)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Deterministic iteration over all actor meshes.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &ActorMesh)> {
        self.actors.iter().map(|(id, mesh)| (*id, mesh))
    }
}
