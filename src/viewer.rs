//! Window lifecycle and the per-frame tick.
//!
//! [`Viewer`] loads the scene assets up front, then drives a winit event
//! loop. Each redraw runs one tick in a fixed order: panel frame, settings
//! reactions, clock update, camera integration, uniform refresh, render.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::Settings;
use crate::error::ViewerError;
use crate::fireflies::FireflyField;
use crate::gpu::{DebugPanel, GpuState};
use crate::scene::{load_baked_texture, BakedTexture, SceneManifest};
use crate::time::FrameClock;
use crate::uniforms::EffectUniforms;

const WINDOW_TITLE: &str = "Portal";

/// The portal scene viewer. Configure paths and settings, then [`run`].
///
/// [`run`]: Viewer::run
pub struct Viewer {
    model_path: String,
    texture_path: String,
    settings: Settings,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            model_path: "assets/portal.glb".to_string(),
            texture_path: "assets/baked.jpg".to_string(),
            settings: Settings::default(),
        }
    }

    /// Override the glTF/GLB model path.
    pub fn with_model(mut self, path: impl Into<String>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Override the baked lightmap path.
    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture_path = path.into();
        self
    }

    /// Override the initial settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Load the assets, open the window, and run until closed.
    ///
    /// Asset problems surface here, before any window appears.
    pub fn run(self) -> Result<(), ViewerError> {
        let manifest = SceneManifest::load(&self.model_path)?;
        let lightmap = load_baked_texture(&self.texture_path)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(manifest, lightmap, self.settings);
        event_loop.run_app(&mut app)?;

        if let Some(err) = app.failure.take() {
            return Err(err);
        }
        Ok(())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    manifest: SceneManifest,
    lightmap: BakedTexture,
    settings: Settings,
    fireflies: FireflyField,
    clock: FrameClock,
    effects: EffectUniforms,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    panel: Option<DebugPanel>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    failure: Option<ViewerError>,
}

impl App {
    fn new(manifest: SceneManifest, lightmap: BakedTexture, settings: Settings) -> Self {
        let fireflies = FireflyField::new(settings.firefly_count);
        let effects = EffectUniforms::new(&settings, 1.0);
        Self {
            manifest,
            lightmap,
            settings,
            fireflies,
            clock: FrameClock::new(),
            effects,
            window: None,
            gpu: None,
            panel: None,
            mouse_pressed: false,
            last_mouse_pos: None,
            failure: None,
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu), Some(panel)) =
            (&self.window, &mut self.gpu, &mut self.panel)
        else {
            return;
        };

        let (frame, changed) = panel.frame(window, &mut self.settings, self.clock.fps());

        if changed.count {
            self.fireflies.regenerate(self.settings.firefly_count);
            gpu.set_fireflies(&self.fireflies);
        }
        if changed.look {
            self.effects.apply_settings(&self.settings);
            gpu.set_clear_color(self.settings.clear_color);
        }

        let (elapsed, delta) = self.clock.update();
        gpu.camera.update(delta);
        self.effects.refresh(gpu.camera.view_proj(), elapsed);

        match gpu.render(&self.effects, panel, frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let size = winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                };
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.failure = Some(ViewerError::Window(e));
                event_loop.exit();
                return;
            }
        };

        let gpu = match pollster::block_on(GpuState::new(
            window.clone(),
            &self.manifest,
            &self.lightmap,
            &self.fireflies,
            &self.settings,
        )) {
            Ok(gpu) => gpu,
            Err(e) => {
                self.failure = Some(ViewerError::Gpu(e));
                event_loop.exit();
                return;
            }
        };

        let panel = DebugPanel::new(gpu.device(), gpu.format(), &window);

        let size = window.inner_size();
        self.effects
            .set_viewport(size.width, size.height, window.scale_factor());

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.panel = Some(panel);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // The panel sees every event first; consumed events stay out of the
        // camera controls.
        let consumed = match (&self.window, &mut self.panel) {
            (Some(window), Some(panel)) => panel.on_window_event(window, &event),
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(window) = &self.window {
                    self.effects.set_viewport(
                        physical_size.width,
                        physical_size.height,
                        window.scale_factor(),
                    );
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gpu) = &self.gpu {
                    self.effects
                        .set_viewport(gpu.config.width, gpu.config.height, scale_factor);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyH),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(panel) = &mut self.panel {
                    panel.toggle();
                }
            }
            WindowEvent::MouseInput { state, button, .. } if !consumed => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed && !consumed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        if let Some(gpu) = &mut self.gpu {
                            gpu.camera.rotate(dx, dy);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu) = &mut self.gpu {
                    gpu.camera.zoom(scroll * 0.3);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }
            _ => {}
        }
    }
}
