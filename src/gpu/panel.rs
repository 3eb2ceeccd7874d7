//! Tweak panel drawn on top of the scene.
//!
//! Wraps egui's winit and wgpu glue behind a small interface: feed it
//! window events, run one frame against a [`Settings`], and hand the
//! resulting [`PanelFrame`] to the render path.

use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::config::{
    Settings, SettingsChanged, FIREFLY_COUNT_RANGE, FIREFLY_SIZE_RANGE,
};

/// Output of one panel frame, consumed by the render pass.
pub struct PanelFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

pub struct DebugPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    visible: bool,
}

impl DebugPanel {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        let ctx = egui::Context::default();

        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        ctx.set_visuals(visuals);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
            visible: true,
        }
    }

    /// Returns true when the panel consumed the event, in which case it
    /// must not reach the camera controls.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Run one panel frame, mutating `settings` through the widgets.
    pub fn frame(
        &mut self,
        window: &Window,
        settings: &mut Settings,
        fps: f32,
    ) -> (PanelFrame, SettingsChanged) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);

        let before = *settings;

        if self.visible {
            egui::Window::new("Portal")
                .default_pos([16.0, 16.0])
                .resizable(false)
                .show(&self.ctx, |ui| {
                    ui.label(format!("fps: {:.0}", fps));
                    ui.separator();

                    ui.add(
                        egui::Slider::new(
                            &mut settings.firefly_count,
                            FIREFLY_COUNT_RANGE.0..=FIREFLY_COUNT_RANGE.1,
                        )
                        .text("firefliesCount"),
                    );
                    ui.add(
                        egui::Slider::new(
                            &mut settings.firefly_size,
                            FIREFLY_SIZE_RANGE.0..=FIREFLY_SIZE_RANGE.1,
                        )
                        .text("firefliesSize"),
                    );

                    ui.separator();
                    color_row(ui, "portalColorStart", &mut settings.portal_color_start);
                    color_row(ui, "portalColorEnd", &mut settings.portal_color_end);
                    color_row(ui, "clearColor", &mut settings.clear_color);
                });
        }

        let output = self.ctx.end_pass();
        self.state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let paint_jobs = self.ctx.tessellate(output.shapes, pixels_per_point);

        let changed = SettingsChanged {
            count: settings.firefly_count != before.firefly_count,
            look: settings.firefly_size != before.firefly_size
                || settings.portal_color_start != before.portal_color_start
                || settings.portal_color_end != before.portal_color_end
                || settings.clear_color != before.clear_color,
        };

        (
            PanelFrame {
                paint_jobs,
                textures_delta: output.textures_delta,
                pixels_per_point,
            },
            changed,
        )
    }

    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        frame: &PanelFrame,
        screen_descriptor: &ScreenDescriptor,
    ) {
        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }
        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &frame.paint_jobs,
            screen_descriptor,
        );
    }

    pub fn render(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        frame: &PanelFrame,
        screen_descriptor: &ScreenDescriptor,
    ) {
        self.renderer
            .render(render_pass, &frame.paint_jobs, screen_descriptor);
    }

    pub fn cleanup(&mut self, frame: &PanelFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut glam::Vec3) {
    ui.horizontal(|ui| {
        let mut rgb = [color.x, color.y, color.z];
        ui.color_edit_button_rgb(&mut rgb);
        ui.label(label);
        *color = glam::Vec3::from_array(rgb);
    });
}
