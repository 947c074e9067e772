use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use atoll_input::{DirectionKey, KeyState};
use atoll_render_wgpu::{IsoCamera, WgpuRenderer};
use atoll_scene::SceneStore;
use atoll_sim::Simulation;
use atoll_tools::SimInspector;

#[derive(Parser)]
#[command(name = "atoll-desktop", about = "Island scene desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Application state.
struct AppState {
    sim: Simulation,
    scene: SceneStore,
    camera: IsoCamera,
    keys: KeyState,
    show_inspector: bool,
}

impl AppState {
    fn new() -> Self {
        let mut scene = SceneStore::new();
        let sim = Simulation::new(&mut scene);
        Self {
            sim,
            scene,
            camera: IsoCamera::default(),
            keys: KeyState::new(),
            show_inspector: true,
        }
    }

    /// Advance one frame. Stepping is frame-count driven: one simulation
    /// step per redraw, cadence controlled by vsync.
    fn frame(&mut self) {
        self.sim.step(&self.keys, &mut self.scene);
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        // Direction keys feed the simulation; everything else the
        // simulation never sees.
        if let Some(direction) = map_key(key) {
            self.keys.set(direction, pressed);
            return;
        }

        if pressed {
            return;
        }
        if key == KeyCode::F1 {
            self.show_inspector = !self.show_inspector;
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }

        let summary = SimInspector::summary(&self.sim);

        egui::SidePanel::left("inspector")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Atoll");
                ui.separator();
                ui.label(format!("Tick: {}", summary.tick));
                ui.label(format!("Actors: {}", summary.actor_count));
                ui.separator();

                ui.heading("Robot");
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    summary.robot_position[0],
                    summary.robot_position[1],
                    summary.robot_position[2]
                ));
                ui.label(format!("Yaw: {:.2}", summary.robot_yaw));
                ui.label(format!(
                    "Distance from center: {:.2}",
                    summary.robot_planar_distance
                ));
                if summary.flashing {
                    ui.colored_label(
                        egui::Color32::RED,
                        format!("SHARK HIT ({:.1})", summary.flash_time),
                    );
                }
                ui.separator();

                ui.heading("Sharks");
                for (i, shark) in summary.sharks.iter().enumerate() {
                    ui.label(format!(
                        "#{i} radius {:.0}  chase {:.2}",
                        shark.patrol_radius, shark.chase_weight
                    ));
                }

                ui.separator();
                ui.small("W/S: walk | A/D: turn | F1: toggle panel");
            });
    }
}

/// Map a physical key to a robot direction key. Unmapped keys are ignored.
fn map_key(key: KeyCode) -> Option<DirectionKey> {
    match key {
        KeyCode::KeyW => Some(DirectionKey::Forward),
        KeyCode::KeyS => Some(DirectionKey::Backward),
        KeyCode::KeyA => Some(DirectionKey::TurnLeft),
        KeyCode::KeyD => Some(DirectionKey::TurnRight),
        _ => None,
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Atoll")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("atoll_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_aspect(size.width, size.height);

        let renderer = WgpuRenderer::new(&device, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.set_aspect(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Release-everything on focus loss so keys never stick.
                self.state.keys.clear();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                self.state.frame();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        &self.state.sim,
                        &self.state.scene,
                    );
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("atoll-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
