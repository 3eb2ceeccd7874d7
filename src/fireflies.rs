//! Procedural firefly particle field.
//!
//! The fireflies are a point cloud scattered above the scene floor. Their
//! positions and per-particle scales are generated on the CPU once at startup
//! and regenerated wholesale whenever the debug panel changes the count;
//! nothing mutates the buffers in place. Motion (the vertical wobble) is done
//! entirely in the vertex shader from the shared animation time.

use bytemuck::{Pod, Zeroable};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Horizontal spread: x and z are uniform in [-SPREAD_XZ/2, SPREAD_XZ/2].
const SPREAD_XZ: f32 = 4.0;

/// Vertical spread: y is uniform in [0, SPREAD_Y]. Fireflies float above the
/// ground plane, never below it.
const SPREAD_Y: f32 = 1.5;

/// One firefly as it lives in the instance buffer.
///
/// The scale is the raw per-particle multiplier in [0, 1]; the configurable
/// base size is applied on top of it in the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FireflyInstance {
    pub position: [f32; 3],
    pub scale: f32,
}

/// CPU-side firefly attribute arrays.
///
/// Holds `3 * len` position floats and `len` scale floats. The two arrays are
/// always regenerated together, so a reader can never observe a half-updated
/// field.
pub struct FireflyField {
    positions: Vec<f32>,
    scales: Vec<f32>,
    rng: SmallRng,
}

impl FireflyField {
    /// Create a field with `count` fireflies, seeded from system entropy.
    pub fn new(count: u32) -> Self {
        Self::from_rng(count, SmallRng::from_entropy())
    }

    /// Create a field with a fixed seed, for deterministic tests.
    pub fn with_seed(count: u32, seed: u64) -> Self {
        Self::from_rng(count, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(count: u32, rng: SmallRng) -> Self {
        let mut field = Self {
            positions: Vec::new(),
            scales: Vec::new(),
            rng,
        };
        field.regenerate(count);
        field
    }

    /// Replace the whole field with `count` freshly drawn particles.
    ///
    /// x and z are uniform in [-2, 2], y in [0, 1.5], scale in [0, 1]. The
    /// new arrays are built in full before the old ones are dropped, so the
    /// swap is atomic from the renderer's point of view.
    pub fn regenerate(&mut self, count: u32) {
        let count = count as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut scales = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push((self.rng.gen::<f32>() - 0.5) * SPREAD_XZ);
            positions.push(self.rng.gen::<f32>() * SPREAD_Y);
            positions.push((self.rng.gen::<f32>() - 0.5) * SPREAD_XZ);
            scales.push(self.rng.gen::<f32>());
        }

        self.positions = positions;
        self.scales = scales;
    }

    /// Number of fireflies currently in the field.
    #[inline]
    pub fn len(&self) -> u32 {
        self.scales.len() as u32
    }

    /// True if the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Flat position array, `[x0, y0, z0, x1, y1, z1, ...]`.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Per-particle scale array.
    #[inline]
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Interleave the attribute arrays for the instance-stepped GPU buffer.
    pub fn instances(&self) -> Vec<FireflyInstance> {
        self.scales
            .iter()
            .enumerate()
            .map(|(i, &scale)| FireflyInstance {
                position: [
                    self.positions[i * 3],
                    self.positions[i * 3 + 1],
                    self.positions[i * 3 + 2],
                ],
                scale,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_bounds(field: &FireflyField) {
        for chunk in field.positions().chunks_exact(3) {
            assert!((-2.0..=2.0).contains(&chunk[0]), "x out of bounds: {}", chunk[0]);
            assert!((0.0..=1.5).contains(&chunk[1]), "y out of bounds: {}", chunk[1]);
            assert!((-2.0..=2.0).contains(&chunk[2]), "z out of bounds: {}", chunk[2]);
        }
        for &scale in field.scales() {
            assert!((0.0..=1.0).contains(&scale), "scale out of bounds: {}", scale);
        }
    }

    #[test]
    fn test_default_count_shape() {
        let field = FireflyField::with_seed(35, 7);
        assert_eq!(field.len(), 35);
        assert_eq!(field.positions().len(), 3 * 35);
        assert_eq!(field.scales().len(), 35);
        assert_in_bounds(&field);
    }

    #[test]
    fn test_shapes_across_count_range() {
        let mut field = FireflyField::with_seed(1, 1);
        for count in 1..=100u32 {
            field.regenerate(count);
            assert_eq!(field.positions().len() as u32, 3 * count);
            assert_eq!(field.scales().len() as u32, count);
        }
    }

    #[test]
    fn test_bounds_hold_over_many_generations() {
        let mut field = FireflyField::with_seed(1, 99);
        let mut generated = 0usize;
        let mut count = 1u32;
        while generated < 10_000 {
            field.regenerate(count);
            assert_in_bounds(&field);
            generated += field.len() as usize;
            count = count % 100 + 1;
        }
    }

    #[test]
    fn test_regeneration_is_fresh() {
        let mut field = FireflyField::with_seed(5, 3);
        let first = field.positions().to_vec();
        field.regenerate(5);
        assert_eq!(field.positions().len(), first.len());
        // Same seed, different draws: identical contents would mean the RNG
        // did not advance.
        assert_ne!(field.positions(), first.as_slice());
    }

    #[test]
    fn test_no_stale_entries_after_shrink() {
        let mut field = FireflyField::with_seed(35, 11);
        field.regenerate(80);
        assert_eq!(field.positions().len(), 3 * 80);
        assert_eq!(field.scales().len(), 80);
        field.regenerate(35);
        assert_eq!(field.positions().len(), 3 * 35);
        assert_eq!(field.scales().len(), 35);
    }

    #[test]
    fn test_instances_interleave() {
        let field = FireflyField::with_seed(4, 21);
        let instances = field.instances();
        assert_eq!(instances.len(), 4);
        for (i, inst) in instances.iter().enumerate() {
            assert_eq!(inst.position[0], field.positions()[i * 3]);
            assert_eq!(inst.position[1], field.positions()[i * 3 + 1]);
            assert_eq!(inst.position[2], field.positions()[i * 3 + 2]);
            assert_eq!(inst.scale, field.scales()[i]);
        }
        assert_eq!(std::mem::size_of::<FireflyInstance>(), 16);
    }
}
