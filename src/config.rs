//! Viewer settings adjustable through the debug panel.
//!
//! All tweakable values live in one owned [`Settings`] struct that the panel
//! edits and the render loop reads. Panel edits are reported as discrete
//! [`SettingsChanged`] flags so the loop can react between frames (rebuild
//! the firefly buffer, re-upload material uniforms) instead of polling.
//! Values reset to the defaults below on every launch; nothing is persisted.

use glam::Vec3;

/// Firefly count the viewer starts with.
pub const DEFAULT_FIREFLY_COUNT: u32 = 35;

/// Panel range for the firefly count slider.
pub const FIREFLY_COUNT_RANGE: (u32, u32) = (1, 100);

/// Panel range for the firefly base size slider, in pixels.
pub const FIREFLY_SIZE_RANGE: (f32, f32) = (10.0, 500.0);

/// Runtime-adjustable viewer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of fireflies in the particle field.
    pub firefly_count: u32,
    /// Base point size in pixels, multiplied by each particle's own scale.
    pub firefly_size: f32,
    /// Portal gradient color at the rim.
    pub portal_color_start: Vec3,
    /// Portal gradient color at the center.
    pub portal_color_end: Vec3,
    /// Background clear color.
    pub clear_color: Vec3,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            firefly_count: DEFAULT_FIREFLY_COUNT,
            firefly_size: 200.0,
            portal_color_start: rgb8(0x2b, 0xc5, 0x82),
            portal_color_end: rgb8(0x27, 0x42, 0x77),
            clear_color: rgb8(0x18, 0x16, 0x1d),
        }
    }
}

/// Which parts of [`Settings`] changed during one panel pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsChanged {
    /// The firefly count moved; the particle field must be regenerated.
    pub count: bool,
    /// A size or color moved; material uniforms must be re-uploaded.
    pub look: bool,
}

impl SettingsChanged {
    /// True if anything changed at all.
    pub fn any(&self) -> bool {
        self.count || self.look
    }
}

/// Color triple from 8-bit sRGB channel values.
pub fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_panel_ranges() {
        let s = Settings::default();
        assert!(s.firefly_count >= FIREFLY_COUNT_RANGE.0);
        assert!(s.firefly_count <= FIREFLY_COUNT_RANGE.1);
        assert!(s.firefly_size >= FIREFLY_SIZE_RANGE.0);
        assert!(s.firefly_size <= FIREFLY_SIZE_RANGE.1);
    }

    #[test]
    fn test_rgb8() {
        let c = rgb8(255, 0, 51);
        assert_eq!(c.x, 1.0);
        assert_eq!(c.y, 0.0);
        assert!((c.z - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_changed_flags() {
        let mut changes = SettingsChanged::default();
        assert!(!changes.any());
        changes.look = true;
        assert!(changes.any());
    }
}
