mod mesh;
mod systems;
mod types;

pub use mesh::chunk_to_bevy_mesh;
pub use systems::{init_world_generator, step_world_generation};
pub use types::TerrainChunk;
