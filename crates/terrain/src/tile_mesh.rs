//! Emits one tile's 9-vertex / 8-triangle block into chunk buffers.

/// `(u, v)` offsets of the 3x3 vertex layout across the unit tile, row-major
/// from the south-west corner. Matches the height order from `edge_clamp`.
const VERTEX_OFFSETS: [[f32; 2]; 9] = [
    [0.0, 0.0],
    [0.5, 0.0],
    [1.0, 0.0],
    [0.0, 0.5],
    [0.5, 0.5],
    [1.0, 0.5],
    [0.0, 1.0],
    [0.5, 1.0],
    [1.0, 1.0],
];

/// Two triangles per quadrant of the 3x3 layout, all sharing the true center
/// vertex (slot 4) as an apex, so the center height can diverge from a
/// bilinear blend of the corners. Winding matches the chunk mesh convention:
/// `(a, d, b)` then `(a, c, d)` per quadrant, up-facing.
const TILE_TRIANGLES: [u32; 24] = [
    0, 4, 1, 0, 3, 4, // SW quadrant
    1, 5, 2, 1, 4, 5, // SE quadrant
    3, 7, 4, 3, 6, 7, // NW quadrant
    4, 8, 5, 4, 7, 8, // NE quadrant
];

/// Vertices emitted per tile.
pub const TILE_VERTEX_COUNT: usize = 9;
/// Triangle indices emitted per tile (8 triangles).
pub const TILE_INDEX_COUNT: usize = 24;

/// Append one tile's positions, UVs and triangles to the chunk buffers.
///
/// `(tx, tz)` is the tile's chunk-local offset. Indices are relative to the
/// tile's own 9-vertex block (shifted by the running vertex count); a vertex
/// is never reused from another tile, even where two tiles meet, so the
/// clamp policy can reshape this tile without rippling into its neighbors.
pub fn push_tile(
    positions: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    tx: f32,
    tz: f32,
    heights: &[f32; 9],
) {
    let base = positions.len() as u32;
    for (i, [u, v]) in VERTEX_OFFSETS.iter().enumerate() {
        positions.push([tx + u, heights[i], tz + v]);
        uvs.push([*u, *v]);
    }
    for offset in TILE_TRIANGLES {
        indices.push(base + offset);
    }
}
