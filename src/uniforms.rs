//! Shader uniform sets for the scene materials.
//!
//! Each material's uniforms are a `#[repr(C)]` Pod struct whose layout
//! matches the WGSL struct in the corresponding shader file, uploaded with
//! `queue.write_buffer` every frame. The two animated materials (fireflies
//! and portal) share one clock: [`EffectUniforms::refresh`] writes the same
//! elapsed value into both, so the effects can never drift out of phase.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::Settings;

/// Pixel-density ratios above this are clamped to bound fragment workload.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Emissive color of the two pole-light meshes (0xFFE0C0).
pub const POLE_LIGHT_COLOR: Vec3 = Vec3::new(1.0, 224.0 / 255.0, 192.0 / 255.0);

/// Cap the window's reported scale factor at [`MAX_PIXEL_RATIO`].
pub fn clamp_pixel_ratio(scale_factor: f64) -> f32 {
    (scale_factor as f32).min(MAX_PIXEL_RATIO)
}

/// Uniforms for the baked-lightmap material. Camera only; the lightmap
/// carries all shading.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
}

/// Uniforms for the flat emissive pole-light material.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct FlatUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Uniforms for the firefly point material.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct FireflyUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Surface size in physical pixels, for point-size conversion.
    pub resolution: [f32; 2],
    /// Shared animation time in seconds.
    pub time: f32,
    /// Capped pixel-density ratio.
    pub pixel_ratio: f32,
    /// Base point size in pixels (panel-controlled).
    pub size_px: f32,
    pub _pad: [f32; 3],
}

/// Uniforms for the animated portal surface.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct PortalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color_start: [f32; 3],
    /// Shared animation time in seconds.
    pub time: f32,
    pub color_end: [f32; 3],
    /// Capped pixel-density ratio.
    pub pixel_ratio: f32,
}

/// The animated materials' uniform sets, updated together each tick.
pub struct EffectUniforms {
    pub fireflies: FireflyUniforms,
    pub portal: PortalUniforms,
}

impl EffectUniforms {
    /// Build the initial uniform values from the panel settings.
    pub fn new(settings: &Settings, pixel_ratio: f32) -> Self {
        let mut uniforms = Self {
            fireflies: FireflyUniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                resolution: [1.0, 1.0],
                time: 0.0,
                pixel_ratio,
                size_px: settings.firefly_size,
                _pad: [0.0; 3],
            },
            portal: PortalUniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                color_start: settings.portal_color_start.to_array(),
                time: 0.0,
                color_end: settings.portal_color_end.to_array(),
                pixel_ratio,
            },
        };
        uniforms.apply_settings(settings);
        uniforms
    }

    /// Per-tick refresh: camera and the shared clock value.
    ///
    /// Both `time` fields receive the same sample; this is the only place
    /// either is written.
    pub fn refresh(&mut self, view_proj: Mat4, elapsed: f32) {
        let view_proj = view_proj.to_cols_array_2d();
        self.fireflies.view_proj = view_proj;
        self.fireflies.time = elapsed;
        self.portal.view_proj = view_proj;
        self.portal.time = elapsed;
    }

    /// Event-driven refresh of the panel-controlled values.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.fireflies.size_px = settings.firefly_size;
        self.portal.color_start = settings.portal_color_start.to_array();
        self.portal.color_end = settings.portal_color_end.to_array();
    }

    /// Event-driven refresh after a resize or scale-factor change.
    pub fn set_viewport(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.fireflies.resolution = [width as f32, height as f32];
        let ratio = clamp_pixel_ratio(scale_factor);
        self.fireflies.pixel_ratio = ratio;
        self.portal.pixel_ratio = ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_cap() {
        assert_eq!(clamp_pixel_ratio(1.0), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_pixel_ratio(2.0), 2.0);
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    }

    #[test]
    fn test_time_phase_lock() {
        let mut uniforms = EffectUniforms::new(&Settings::default(), 1.0);
        for tick in 1..=10 {
            uniforms.refresh(Mat4::IDENTITY, tick as f32 * 0.016);
            assert_eq!(uniforms.fireflies.time, uniforms.portal.time);
        }
    }

    #[test]
    fn test_viewport_updates_both_ratios() {
        let mut uniforms = EffectUniforms::new(&Settings::default(), 1.0);
        uniforms.set_viewport(1920, 1080, 3.0);
        assert_eq!(uniforms.fireflies.resolution, [1920.0, 1080.0]);
        assert_eq!(uniforms.fireflies.pixel_ratio, 2.0);
        assert_eq!(uniforms.portal.pixel_ratio, 2.0);
    }

    #[test]
    fn test_settings_reach_uniforms() {
        let mut settings = Settings::default();
        let mut uniforms = EffectUniforms::new(&settings, 1.0);
        settings.firefly_size = 320.0;
        settings.portal_color_start = Vec3::new(1.0, 0.0, 0.0);
        uniforms.apply_settings(&settings);
        assert_eq!(uniforms.fireflies.size_px, 320.0);
        assert_eq!(uniforms.portal.color_start, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_uniform_struct_sizes() {
        // WGSL uniform structs round up to 16-byte multiples; the Rust
        // layouts must agree with the shader sources.
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 64);
        assert_eq!(std::mem::size_of::<FlatUniforms>(), 80);
        assert_eq!(std::mem::size_of::<FireflyUniforms>(), 96);
        assert_eq!(std::mem::size_of::<PortalUniforms>(), 96);
    }
}
