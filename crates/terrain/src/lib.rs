//! Procedural tiled terrain generation.
//!
//! A world is a `world_size x world_size` grid of chunks, each chunk a
//! `chunk_size x chunk_size` block of unit tiles. Heights come from a noise
//! field sampled once for the whole world; every tile is meshed independently
//! as 9 vertices / 8 triangles so that large height steps between neighboring
//! tiles ("cliffs") can be clamped locally without warping adjacent tiles.
//!
//! The pipeline runs strictly downward:
//! sampler -> [`HeightField`] -> [`edge_clamp`] -> [`tile_mesh`] ->
//! [`chunk_mesh`] -> an external [`RenderableCreator`], driven one chunk at a
//! time by [`WorldGenerator`].

use bevy::prelude::*;

pub mod chunk_mesh;
pub mod config;
pub mod edge_clamp;
pub mod generator;
pub mod height_field;
pub mod renderable;
pub mod sampler;
pub mod tile_mesh;

#[cfg(test)]
mod integration_tests;

pub use chunk_mesh::{build_chunk_mesh, ChunkIndices, ChunkMeshData, NARROW_INDEX_LIMIT};
pub use config::TerrainGenConfig;
pub use generator::{GeneratorState, WorldGenerator};
pub use height_field::HeightField;
pub use renderable::{RecordingCreator, RenderableCreator};

/// Registers the generation config resource. The generator itself is
/// inserted by whoever owns the frame scheduler (see the rendering crate).
pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainGenConfig>();
    }
}
