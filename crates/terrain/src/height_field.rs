use crate::config::TerrainGenConfig;
use crate::sampler::HeightSampler;

/// Dense per-tile elevation grid for the whole world.
///
/// Built once at generation start and read-only afterwards; chunk builds
/// only ever read it, which is what makes height lookups safe to share.
pub struct HeightField {
    tiles_per_axis: usize,
    heights: Vec<f32>,
}

impl HeightField {
    /// Sample every grid coordinate in `[0, tiles_per_axis)^2` once,
    /// row-major.
    pub fn generate(config: &TerrainGenConfig) -> Self {
        let tiles_per_axis = config.tiles_per_axis();
        let sampler = HeightSampler::new(config);
        let mut heights = vec![0.0_f32; tiles_per_axis * tiles_per_axis];
        for z in 0..tiles_per_axis {
            for x in 0..tiles_per_axis {
                heights[z * tiles_per_axis + x] = sampler.sample(x as i32, z as i32);
            }
        }
        Self {
            tiles_per_axis,
            heights,
        }
    }

    /// Build a field from explicit heights (row-major). Test worlds and
    /// synthetic fixtures.
    pub fn from_heights(tiles_per_axis: usize, heights: Vec<f32>) -> Self {
        assert_eq!(
            heights.len(),
            tiles_per_axis * tiles_per_axis,
            "height count must match tiles_per_axis^2"
        );
        Self {
            tiles_per_axis,
            heights,
        }
    }

    pub fn tiles_per_axis(&self) -> usize {
        self.tiles_per_axis
    }

    /// Clamped lookup: each index is clamped into `[0, tiles_per_axis - 1]`
    /// independently, so off-grid queries replicate the nearest edge value
    /// and the world extends flat beyond its boundary.
    pub fn get(&self, x: i32, z: i32) -> f32 {
        let max = self.tiles_per_axis as i32 - 1;
        let xi = x.clamp(0, max) as usize;
        let zi = z.clamp(0, max) as usize;
        self.heights[zi * self.tiles_per_axis + xi]
    }
}
