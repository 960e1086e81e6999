//! Per-tile vertex height derivation with cliff clamping.
//!
//! Each tile renders as 9 vertices over a 3x3 layout. The natural height of
//! every shared-looking vertex is an average over the neighboring tiles, but
//! when a neighbor differs from the center by more than `max_edge_delta` the
//! edge is a cliff: its midpoint is pinned at exactly `max_edge_delta` from
//! the center, and the adjacent corners are pulled back so that one cliff
//! cannot drag a corner far away from the surface the tile belongs to.
//! Because no vertex is shared across tiles, each tile can be reshaped like
//! this without warping its neighbors.

use crate::height_field::HeightField;

/// Vertex slots of the 3x3 tile layout, row-major from the south-west
/// corner. Matches the position/UV emission order in `tile_mesh`.
pub const SW: usize = 0;
pub const S_MID: usize = 1;
pub const SE: usize = 2;
pub const W_MID: usize = 3;
pub const CENTER: usize = 4;
pub const E_MID: usize = 5;
pub const NW: usize = 6;
pub const N_MID: usize = 7;
pub const NE: usize = 8;

/// One cardinal edge of a tile after cliff detection.
struct Edge {
    cliff: bool,
    /// Sign of `neighbor - center`: -1, 0 or 1.
    dir: f32,
    /// Final midpoint height (clamped when the edge is a cliff).
    mid: f32,
}

impl Edge {
    fn new(center: f32, neighbor: f32, max_edge_delta: f32) -> Self {
        let diff = neighbor - center;
        let dir = if diff > 0.0 {
            1.0
        } else if diff < 0.0 {
            -1.0
        } else {
            0.0
        };
        let cliff = diff.abs() > max_edge_delta;
        let mid = if cliff {
            // Hard cap: the midpoint moves exactly max_edge_delta toward the
            // neighbor no matter how large the real gap is.
            center + dir * max_edge_delta
        } else {
            (center + neighbor) * 0.5
        };
        Self { cliff, dir, mid }
    }
}

/// Compute the tile's 9 final vertex heights from its center and 8 neighbors
/// (clamped lookups, so border tiles see a flat extension of the world).
///
/// With `max_edge_delta <= 0` the natural averages are returned unchanged.
pub fn tile_vertex_heights(
    field: &HeightField,
    x: i32,
    z: i32,
    max_edge_delta: f32,
) -> [f32; 9] {
    let hc = field.get(x, z);
    let hn = field.get(x, z + 1);
    let hs = field.get(x, z - 1);
    let he = field.get(x + 1, z);
    let hw = field.get(x - 1, z);
    let hne = field.get(x + 1, z + 1);
    let hnw = field.get(x - 1, z + 1);
    let hse = field.get(x + 1, z - 1);
    let hsw = field.get(x - 1, z - 1);

    // Step 1: natural (unclamped) values. Edge midpoints average the two
    // tiles that meet there; corners average all four.
    let mut heights = [0.0_f32; 9];
    heights[CENTER] = hc;
    heights[N_MID] = (hc + hn) * 0.5;
    heights[S_MID] = (hc + hs) * 0.5;
    heights[E_MID] = (hc + he) * 0.5;
    heights[W_MID] = (hc + hw) * 0.5;
    heights[NE] = (hc + hn + he + hne) * 0.25;
    heights[NW] = (hc + hn + hw + hnw) * 0.25;
    heights[SE] = (hc + hs + he + hse) * 0.25;
    heights[SW] = (hc + hs + hw + hsw) * 0.25;

    if max_edge_delta <= 0.0 {
        return heights;
    }

    // Steps 2 + 3: cliff detection and edge-midpoint clamping.
    let north = Edge::new(hc, hn, max_edge_delta);
    let south = Edge::new(hc, hs, max_edge_delta);
    let east = Edge::new(hc, he, max_edge_delta);
    let west = Edge::new(hc, hw, max_edge_delta);
    heights[N_MID] = north.mid;
    heights[S_MID] = south.mid;
    heights[E_MID] = east.mid;
    heights[W_MID] = west.mid;

    // Step 4: corner clamping against the two adjacent edges.
    heights[NE] = clamp_corner(heights[NE], hc, &north, &east, max_edge_delta);
    heights[NW] = clamp_corner(heights[NW], hc, &north, &west, max_edge_delta);
    heights[SE] = clamp_corner(heights[SE], hc, &south, &east, max_edge_delta);
    heights[SW] = clamp_corner(heights[SW], hc, &south, &west, max_edge_delta);

    heights
}

/// Clamp one corner between its two adjacent edges.
///
/// No cliff: the natural average stands. One cliff: the corner may not leave
/// the span between the center and that edge's clamped midpoint. Two cliffs
/// in the same direction: the corner is doubly exposed and gets up to twice
/// the single-edge cap. Two cliffs in opposite directions (or with a zero
/// sign): the corner stays between the two clamped midpoints.
fn clamp_corner(natural: f32, center: f32, a: &Edge, b: &Edge, max_edge_delta: f32) -> f32 {
    match (a.cliff, b.cliff) {
        (false, false) => natural,
        (true, false) => clamp_between(natural, center, a.mid),
        (false, true) => clamp_between(natural, center, b.mid),
        (true, true) => {
            if a.dir == b.dir && a.dir != 0.0 {
                clamp_between(natural, center, center + 2.0 * max_edge_delta * a.dir)
            } else {
                clamp_between(natural, a.mid, b.mid)
            }
        }
    }
}

/// Clamp `value` into the closed interval spanned by the two bounds,
/// whichever order they come in.
fn clamp_between(value: f32, bound_a: f32, bound_b: f32) -> f32 {
    value.clamp(bound_a.min(bound_b), bound_a.max(bound_b))
}
