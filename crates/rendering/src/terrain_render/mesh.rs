use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;

use terrain::{ChunkIndices, ChunkMeshData};

/// Convert finished chunk buffers into a renderable Bevy mesh. Index width
/// carries through unchanged: a narrow chunk stays a `U16` mesh.
pub fn chunk_to_bevy_mesh(chunk: &ChunkMeshData) -> Mesh {
    let indices = match &chunk.indices {
        ChunkIndices::U16(v) => Indices::U16(v.clone()),
        ChunkIndices::U32(v) => Indices::U32(v.clone()),
    };
    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, chunk.positions.clone())
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, chunk.normals.clone())
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, chunk.uvs.clone())
    .with_inserted_indices(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain::{build_chunk_mesh, HeightField, TerrainGenConfig};

    #[test]
    fn bevy_mesh_mirrors_the_chunk_buffers() {
        let field = HeightField::from_heights(2, vec![0.0, 1.0, 2.0, 3.0]);
        let config = TerrainGenConfig {
            world_size: 1,
            chunk_size: 2,
            ..Default::default()
        };
        let chunk = build_chunk_mesh(&field, &config, 0, 0);
        let mesh = chunk_to_bevy_mesh(&chunk);

        assert_eq!(mesh.count_vertices(), chunk.positions.len());
        let indices = mesh.indices().expect("chunk mesh has indices");
        assert_eq!(indices.len(), chunk.indices.len());
        assert!(
            matches!(indices, Indices::U16(_)),
            "small chunk should keep the narrow index format"
        );
    }
}
