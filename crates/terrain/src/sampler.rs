use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::Rng;

use crate::config::TerrainGenConfig;

/// Height source for one world: coherent noise in normal mode, a uniform
/// random draw in debug mode.
pub struct HeightSampler {
    noise: FastNoiseLite,
    seed: i32,
    height_scale: f32,
    terrace: f32,
    debug_random: bool,
}

impl HeightSampler {
    pub fn new(config: &TerrainGenConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(config.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(config.noise_scale));
        Self {
            noise,
            seed: config.seed,
            height_scale: config.height_scale,
            terrace: config.terrace,
            debug_random: config.debug_random_heights,
        }
    }

    /// Elevation at grid coordinate `(x, z)`.
    ///
    /// Noise mode is deterministic for a given seed and samples at
    /// `(x + seed, z + seed)` so the seed shifts the world through noise
    /// space. Debug mode draws uniformly from `[0, height_scale]`.
    pub fn sample(&self, x: i32, z: i32) -> f32 {
        let raw = if self.debug_random {
            rand::thread_rng().gen_range(0.0..=1.0)
        } else {
            let n = self
                .noise
                .get_noise_2d((x + self.seed) as f32, (z + self.seed) as f32);
            // OpenSimplex2 outputs in [-1, 1]; normalize to [0, 1]
            (n + 1.0) * 0.5
        };
        snap_to_terrace(raw * self.height_scale, self.terrace)
    }
}

/// Snap `value` to the nearest multiple of `step`. Halfway values round away
/// from zero (the `f32::round` rule). A non-positive `step` disables
/// snapping. Idempotent: snapping an already-snapped value is a no-op.
pub fn snap_to_terrace(value: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
