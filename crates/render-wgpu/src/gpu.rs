use glam::Mat4;
use wgpu::util::DeviceExt;

use atoll_scene::{palette, rgba, MeshPart, PartShape, SceneStore};
use atoll_sim::Simulation;

use crate::camera::IsoCamera;
use crate::mesh::{MeshKind, Vertex};
use crate::shaders;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
    /// rgb = emissive color, a = emissive intensity.
    emissive: [f32; 4],
}

struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// One contiguous run of instances sharing a primitive mesh.
struct Batch {
    kind: MeshKind,
    range: std::ops::Range<u32>,
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    meshes: Vec<MeshBuffers>,
    instance_buffer: wgpu::Buffer,
    max_instances: u32,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
        });

        let vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![
                    0 => Float32x3,
                    1 => Float32x3,
                ],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x4,
                    3 => Float32x4,
                    4 => Float32x4,
                    5 => Float32x4,
                    6 => Float32x4,
                    7 => Float32x4,
                ],
            },
        ];

        let make_pipeline = |label: &str, blend: wgpu::BlendState, depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &vertex_layouts,
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // Planes (fronds, ocean) are double-sided.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: depth_write,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: Default::default(),
                multiview: None,
                cache: None,
            })
        };

        let opaque_pipeline =
            make_pipeline("opaque_pipeline", wgpu::BlendState::REPLACE, true);
        let translucent_pipeline = make_pipeline(
            "translucent_pipeline",
            wgpu::BlendState::ALPHA_BLENDING,
            false,
        );

        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| {
                let (vertices, indices) = kind.build();
                MeshBuffers {
                    vertex_buffer: device.create_buffer_init(
                        &wgpu::util::BufferInitDescriptor {
                            label: Some("mesh_vertex_buffer"),
                            contents: bytemuck::cast_slice(&vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        },
                    ),
                    index_buffer: device.create_buffer_init(
                        &wgpu::util::BufferInitDescriptor {
                            label: Some("mesh_index_buffer"),
                            contents: bytemuck::cast_slice(&indices),
                            usage: wgpu::BufferUsages::INDEX,
                        },
                    ),
                    index_count: indices.len() as u32,
                }
            })
            .collect();

        let max_instances = 1024u32;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: (max_instances as u64) * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            opaque_pipeline,
            translucent_pipeline,
            uniform_buffer,
            uniform_bind_group,
            meshes,
            instance_buffer,
            max_instances,
            depth_texture,
            surface_format,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame: opaque actors, then the translucent ocean.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &IsoCamera,
        sim: &Simulation,
        scene: &SceneStore,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
            }),
        );

        // Bucket instances by primitive, opaque and translucent separately.
        let mut opaque: Vec<Vec<InstanceData>> = MeshKind::ALL.iter().map(|_| Vec::new()).collect();
        let mut translucent: Vec<Vec<InstanceData>> =
            MeshKind::ALL.iter().map(|_| Vec::new()).collect();

        for (id, data) in sim.lagoon().actors() {
            let Some(mesh) = scene.get(*id) else {
                continue;
            };
            let actor = Mat4::from_translation(data.transform.position)
                * Mat4::from_rotation_y(data.transform.yaw);
            for part in mesh.parts() {
                let (kind, instance) = part_instance(&actor, part);
                let bucket = if part.material.is_translucent() {
                    &mut translucent[kind.index()]
                } else {
                    &mut opaque[kind.index()]
                };
                bucket.push(instance);
            }
        }

        let mut instances: Vec<InstanceData> = Vec::new();
        let mut opaque_batches = Vec::new();
        let mut translucent_batches = Vec::new();
        for (bucket, batches) in [
            (&opaque, &mut opaque_batches),
            (&translucent, &mut translucent_batches),
        ] {
            for kind in MeshKind::ALL {
                let data = &bucket[kind.index()];
                if data.is_empty() {
                    continue;
                }
                let start = instances.len() as u32;
                instances.extend_from_slice(data);
                batches.push(Batch {
                    kind,
                    range: start..instances.len() as u32,
                });
            }
        }

        if instances.len() as u32 > self.max_instances {
            tracing::warn!(
                count = instances.len(),
                max = self.max_instances,
                "instance overflow, truncating"
            );
            instances.truncate(self.max_instances as usize);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let sky = rgba(palette::SKY, 1.0);
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: sky[0] as f64,
                            g: sky[1] as f64,
                            b: sky[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            pass.set_pipeline(&self.opaque_pipeline);
            self.draw_batches(&mut pass, &opaque_batches);

            pass.set_pipeline(&self.translucent_pipeline);
            self.draw_batches(&mut pass, &translucent_batches);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn draw_batches(&self, pass: &mut wgpu::RenderPass<'_>, batches: &[Batch]) {
        for batch in batches {
            let mesh = &self.meshes[batch.kind.index()];
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..mesh.index_count, 0, batch.range.clone());
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Build the instance record for one sub-mesh part.
fn part_instance(actor: &Mat4, part: &MeshPart) -> (MeshKind, InstanceData) {
    let kind = match part.shape {
        PartShape::Cuboid { .. } => MeshKind::Cube,
        PartShape::Cone { .. } => MeshKind::Cone,
        PartShape::Cylinder { .. } => MeshKind::Cylinder,
        PartShape::Sphere { .. } => MeshKind::Sphere,
        PartShape::Plane { .. } => MeshKind::Plane,
    };
    let model = *actor
        * Mat4::from_translation(part.offset)
        * Mat4::from_quat(part.rotation)
        * Mat4::from_scale(part.shape.unit_scale());
    let cols = model.to_cols_array_2d();
    let m = &part.material;
    (
        kind,
        InstanceData {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: m.base_color,
            emissive: [m.emissive[0], m.emissive[1], m.emissive[2], m.emissive_intensity],
        },
    )
}
