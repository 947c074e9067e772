//! wgpu render backend for the island scene.
//!
//! Draws every scene actor as a batch of instanced unit primitives (cube,
//! cone, cylinder, sphere, plane) scaled per part, lit with a fixed sun
//! direction plus the part's emissive term. Opaque geometry first, then the
//! translucent ocean with depth writes off.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::IsoCamera;
pub use gpu::WgpuRenderer;
