use bevy::prelude::*;

/// Marks a spawned chunk entity with its chunk-grid coordinates.
#[derive(Component)]
pub struct TerrainChunk {
    pub chunk_x: usize,
    pub chunk_z: usize,
}
