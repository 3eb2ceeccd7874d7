//! Orbit camera with damped input.

use glam::{Mat4, Vec3};

/// Vertical field of view in degrees.
const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Velocity fraction remaining after one 60 Hz frame of coasting.
const DAMPING: f32 = 0.9;

/// Orbit camera for viewing the portal scene.
///
/// Mouse input feeds angular and zoom velocities instead of moving the
/// camera directly; [`OrbitCamera::update`] integrates and decays them once
/// per tick, which gives the view its inertia.
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Viewport aspect ratio, width / height.
    aspect: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

impl OrbitCamera {
    /// Create a camera matching the scene's default viewpoint, roughly
    /// (4, 2, 4) looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.34,
            distance: 6.0,
            target: Vec3::ZERO,
            aspect,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    /// Feed a mouse drag, in physical pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * 0.3;
        self.pitch_velocity += dy * 0.3;
    }

    /// Feed a scroll step.
    pub fn zoom(&mut self, amount: f32) {
        self.zoom_velocity -= amount * 18.0;
    }

    /// Advance the damping integration one step.
    pub fn update(&mut self, dt: f32) {
        self.yaw += self.yaw_velocity * dt;
        self.pitch = (self.pitch + self.pitch_velocity * dt).clamp(-1.5, 1.5);
        self.distance = (self.distance + self.zoom_velocity * dt).clamp(0.5, 20.0);

        let decay = DAMPING.powf(dt * 60.0);
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;
    }

    /// Track the viewport so the projection keeps aspect == width / height.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Current aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let proj =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_tracks_viewport_exactly() {
        let mut camera = OrbitCamera::new(1.0);
        camera.set_aspect(800, 600);
        assert_eq!(camera.aspect(), 800.0 / 600.0);
        camera.set_aspect(1920, 1080);
        assert_eq!(camera.aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_zero_size_keeps_last_aspect() {
        let mut camera = OrbitCamera::new(2.0);
        camera.set_aspect(0, 0);
        assert_eq!(camera.aspect(), 2.0);
    }

    #[test]
    fn test_damping_decays_velocity() {
        let mut camera = OrbitCamera::new(1.0);
        camera.rotate(10.0, 0.0);
        camera.update(1.0 / 60.0);
        let after_one = camera.yaw_velocity.abs();
        assert!(after_one > 0.0);
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!(camera.yaw_velocity.abs() < 1e-3);
    }

    #[test]
    fn test_pitch_and_distance_clamped() {
        let mut camera = OrbitCamera::new(1.0);
        for _ in 0..1000 {
            camera.rotate(0.0, 100.0);
            camera.zoom(-100.0);
            camera.update(1.0 / 60.0);
        }
        assert!(camera.pitch <= 1.5);
        assert!(camera.distance <= 20.0);
    }

    #[test]
    fn test_position_respects_distance() {
        let camera = OrbitCamera::new(1.0);
        let distance = (camera.position() - camera.target).length();
        assert!((distance - camera.distance).abs() < 1e-4);
    }
}
