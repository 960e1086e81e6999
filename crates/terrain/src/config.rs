use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for procedural world generation.
///
/// Invalid values are never rejected: sizes are clamped to at least 1 by the
/// accessor methods, and non-positive `terrace` / `max_edge_delta` simply
/// disable the corresponding feature.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGenConfig {
    /// Chunks per world axis.
    pub world_size: i32,
    /// Tiles per chunk axis.
    pub chunk_size: i32,
    /// Vertical scale applied to raw height samples.
    pub height_scale: f32,
    /// Offsets the noise sampling coordinates.
    pub seed: i32,
    /// Spatial frequency of the noise.
    pub noise_scale: f32,
    /// Replace noise with uniform random samples (non-deterministic,
    /// for test worlds only).
    pub debug_random_heights: bool,
    /// Snap heights to the nearest multiple of this step. 0 disables
    /// terracing.
    pub terrace: f32,
    /// Largest height difference a tile edge may span before it is treated
    /// as a cliff and clamped. 0 disables cliff clamping.
    pub max_edge_delta: f32,
}

impl Default for TerrainGenConfig {
    fn default() -> Self {
        Self {
            world_size: 4,
            chunk_size: 16,
            height_scale: 8.0,
            seed: 0,
            noise_scale: 0.05,
            debug_random_heights: false,
            terrace: 0.0,
            max_edge_delta: 0.0,
        }
    }
}

impl TerrainGenConfig {
    /// Chunks per world axis, clamped to at least 1.
    pub fn chunks_per_axis(&self) -> usize {
        self.world_size.max(1) as usize
    }

    /// Tiles per chunk axis, clamped to at least 1.
    pub fn tiles_per_chunk(&self) -> usize {
        self.chunk_size.max(1) as usize
    }

    /// Tiles per world axis.
    pub fn tiles_per_axis(&self) -> usize {
        self.chunks_per_axis() * self.tiles_per_chunk()
    }

    /// Total number of chunks in the world.
    pub fn chunk_count(&self) -> usize {
        self.chunks_per_axis() * self.chunks_per_axis()
    }
}
