use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// The unit primitives instanced by the renderer, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Cone,
    Cylinder,
    Sphere,
    Plane,
}

impl MeshKind {
    pub const ALL: [Self; 5] = [
        Self::Cube,
        Self::Cone,
        Self::Cylinder,
        Self::Sphere,
        Self::Plane,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Cube => 0,
            Self::Cone => 1,
            Self::Cylinder => 2,
            Self::Sphere => 3,
            Self::Plane => 4,
        }
    }

    pub fn build(self) -> (Vec<Vertex>, Vec<u16>) {
        match self {
            Self::Cube => cube_mesh(),
            Self::Cone => cone_mesh(16),
            Self::Cylinder => cylinder_mesh(12),
            Self::Sphere => sphere_mesh(8, 12),
            Self::Plane => plane_mesh(),
        }
    }
}

/// Generate unit cube vertices and indices.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Unit cone: radius 1, height 1, centered on the origin, apex up.
fn cone_mesh(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let apex = [0.0, 0.5, 0.0];

    // Side: one triangle per segment, flat-ish normals per rim vertex.
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let r0 = [a0.cos(), -0.5, a0.sin()];
        let r1 = [a1.cos(), -0.5, a1.sin()];
        // Slope normal: radial direction tilted up by the cone angle.
        let mid = (a0 + a1) * 0.5;
        let slope = normalize([mid.cos(), 1.0, mid.sin()]);
        let base = vertices.len() as u16;
        vertices.push(Vertex {
            position: apex,
            normal: slope,
        });
        vertices.push(Vertex {
            position: r1,
            normal: normalize([a1.cos(), 1.0, a1.sin()]),
        });
        vertices.push(Vertex {
            position: r0,
            normal: normalize([a0.cos(), 1.0, a0.sin()]),
        });
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Bottom cap fan.
    let center = vertices.len() as u16;
    vertices.push(Vertex {
        position: [0.0, -0.5, 0.0],
        normal: [0.0, -1.0, 0.0],
    });
    let rim_start = vertices.len() as u16;
    for i in 0..segments {
        let a = i as f32 / segments as f32 * TAU;
        vertices.push(Vertex {
            position: [a.cos(), -0.5, a.sin()],
            normal: [0.0, -1.0, 0.0],
        });
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        indices.extend_from_slice(&[center, rim_start + i, rim_start + next]);
    }

    (vertices, indices)
}

/// Unit cylinder: radius 1, height 1, centered on the origin.
fn cylinder_mesh(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side quads.
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let n0 = [a0.cos(), 0.0, a0.sin()];
        let n1 = [a1.cos(), 0.0, a1.sin()];
        let base = vertices.len() as u16;
        vertices.push(Vertex {
            position: [a0.cos(), -0.5, a0.sin()],
            normal: n0,
        });
        vertices.push(Vertex {
            position: [a1.cos(), -0.5, a1.sin()],
            normal: n1,
        });
        vertices.push(Vertex {
            position: [a1.cos(), 0.5, a1.sin()],
            normal: n1,
        });
        vertices.push(Vertex {
            position: [a0.cos(), 0.5, a0.sin()],
            normal: n0,
        });
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    // Top and bottom caps.
    for (y, ny) in [(0.5, 1.0), (-0.5, -1.0_f32)] {
        let center = vertices.len() as u16;
        vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        let rim_start = vertices.len() as u16;
        for i in 0..segments {
            let a = i as f32 / segments as f32 * TAU;
            vertices.push(Vertex {
                position: [a.cos(), y, a.sin()],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..segments {
            let next = (i + 1) % segments;
            if ny > 0.0 {
                indices.extend_from_slice(&[center, rim_start + next, rim_start + i]);
            } else {
                indices.extend_from_slice(&[center, rim_start + i, rim_start + next]);
            }
        }
    }

    (vertices, indices)
}

/// Unit UV sphere, radius 1.
fn sphere_mesh(rings: u16, segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = ring as f32 / rings as f32 * std::f32::consts::PI;
        let y = phi.cos();
        let r = phi.sin();
        for seg in 0..=segments {
            let theta = seg as f32 / segments as f32 * TAU;
            let n = [r * theta.cos(), y, r * theta.sin()];
            vertices.push(Vertex {
                position: n,
                normal: n,
            });
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    (vertices, indices)
}

/// Unit XZ plane, 1x1 centered, facing up. Drawn without backface culling
/// so fronds and the ocean read from any angle.
fn plane_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let n = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex {
            position: [-p, 0.0, -p],
            normal: n,
        },
        Vertex {
            position: [p, 0.0, -p],
            normal: n,
        },
        Vertex {
            position: [p, 0.0, p],
            normal: n,
        },
        Vertex {
            position: [-p, 0.0, p],
            normal: n,
        },
    ];
    let indices = vec![0, 2, 1, 0, 3, 2];
    (vertices, indices)
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}
