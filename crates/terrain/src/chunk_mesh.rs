//! Assembles one chunk's tiles into finished mesh buffers.

use bevy::prelude::*;

use crate::config::TerrainGenConfig;
use crate::edge_clamp::tile_vertex_heights;
use crate::height_field::HeightField;
use crate::tile_mesh::{push_tile, TILE_INDEX_COUNT, TILE_VERTEX_COUNT};

/// Largest vertex count the narrow (u16) index format may address. Above
/// this the chunk must use u32 indices or they wrap around and corrupt the
/// mesh, so the switch is enforced unconditionally.
pub const NARROW_INDEX_LIMIT: usize = 65000;

/// Triangle index buffer in the narrowest width that fits the chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkIndices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl ChunkIndices {
    pub fn len(&self) -> usize {
        match self {
            ChunkIndices::U16(v) => v.len(),
            ChunkIndices::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen to a u32 iterator regardless of storage width.
    pub fn iter_u32(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            ChunkIndices::U16(v) => Box::new(v.iter().map(|&i| u32::from(i))),
            ChunkIndices::U32(v) => Box::new(v.iter().copied()),
        }
    }
}

/// Narrow raw u32 indices to u16 when the chunk's vertex count allows it.
pub fn select_index_width(indices: Vec<u32>, vertex_count: usize) -> ChunkIndices {
    if vertex_count <= NARROW_INDEX_LIMIT {
        ChunkIndices::U16(indices.into_iter().map(|i| i as u16).collect())
    } else {
        ChunkIndices::U32(indices)
    }
}

/// Finished mesh buffers for one chunk, handed to the renderable creator.
#[derive(Debug, Clone)]
pub struct ChunkMeshData {
    pub chunk_x: usize,
    pub chunk_z: usize,
    /// Stable identifier of the form `Chunk_<x>_<z>`.
    pub name: String,
    /// World-space origin of the chunk; positions are chunk-local.
    pub origin: Vec3,
    pub positions: Vec<[f32; 3]>,
    /// Face-averaged smooth normals recomputed from the final triangles.
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: ChunkIndices,
    /// Axis-aligned `(min, max)` bounds of the chunk-local positions.
    pub bounds: (Vec3, Vec3),
}

/// Build the mesh for chunk `(chunk_x, chunk_z)`: every tile in row-major
/// order runs the clamp policy and appends its 9-vertex block at a running
/// offset, then normals, bounds and index width are derived from the final
/// buffers.
pub fn build_chunk_mesh(
    field: &HeightField,
    config: &TerrainGenConfig,
    chunk_x: usize,
    chunk_z: usize,
) -> ChunkMeshData {
    let tiles_per_chunk = config.tiles_per_chunk();
    let tile_count = tiles_per_chunk * tiles_per_chunk;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(tile_count * TILE_VERTEX_COUNT);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(tile_count * TILE_VERTEX_COUNT);
    let mut indices: Vec<u32> = Vec::with_capacity(tile_count * TILE_INDEX_COUNT);

    let base_x = (chunk_x * tiles_per_chunk) as i32;
    let base_z = (chunk_z * tiles_per_chunk) as i32;

    for lz in 0..tiles_per_chunk {
        for lx in 0..tiles_per_chunk {
            let heights = tile_vertex_heights(
                field,
                base_x + lx as i32,
                base_z + lz as i32,
                config.max_edge_delta,
            );
            push_tile(
                &mut positions,
                &mut uvs,
                &mut indices,
                lx as f32,
                lz as f32,
                &heights,
            );
        }
    }

    let normals = smooth_normals(&positions, &indices);
    let bounds = position_bounds(&positions);
    let vertex_count = positions.len();

    ChunkMeshData {
        chunk_x,
        chunk_z,
        name: format!("Chunk_{}_{}", chunk_x, chunk_z),
        origin: Vec3::new(
            (chunk_x * tiles_per_chunk) as f32,
            0.0,
            (chunk_z * tiles_per_chunk) as f32,
        ),
        positions,
        normals,
        uvs,
        indices: select_index_width(indices, vertex_count),
        bounds,
    }
}

/// Standard smooth-normal accumulation: sum unnormalized face normals into
/// every vertex a triangle touches, then normalize. Degenerate vertices fall
/// back to straight up.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize;
        let b = tri[1] as usize;
        let c = tri[2] as usize;
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let face = (pb - pa).cross(pc - pa);
        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }
    accumulated
        .into_iter()
        .map(|n| {
            let len = n.length();
            if len < 1e-8 {
                [0.0, 1.0, 0.0]
            } else {
                (n / len).to_array()
            }
        })
        .collect()
}

fn position_bounds(positions: &[[f32; 3]]) -> (Vec3, Vec3) {
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for p in positions {
        min = min.min(Vec3::from(*p));
        max = max.max(Vec3::from(*p));
    }
    (min, max)
}
