//! End-to-end tests driving [`WorldGenerator`] with a [`RecordingCreator`]
//! and inspecting the buffers it hands over.

use crate::chunk_mesh::{build_chunk_mesh, ChunkIndices};
use crate::config::TerrainGenConfig;
use crate::edge_clamp::{E_MID, NE, SE, W_MID};
use crate::generator::{GeneratorState, WorldGenerator};
use crate::height_field::HeightField;
use crate::renderable::{RecordingCreator, RenderableCreator};

fn generate_world(config: TerrainGenConfig) -> (WorldGenerator<usize>, RecordingCreator) {
    let mut generator = WorldGenerator::new(config);
    let mut creator = RecordingCreator::default();
    generator.run_to_completion(&mut creator);
    (generator, creator)
}

// ===========================================================================
// 1. Flat zero-height world, end to end
// ===========================================================================

#[test]
fn flat_zero_world_produces_one_flat_chunk() {
    let config = TerrainGenConfig {
        world_size: 1,
        chunk_size: 2,
        height_scale: 0.0,
        max_edge_delta: 0.0,
        ..Default::default()
    };
    let (generator, creator) = generate_world(config);

    assert_eq!(generator.state(), GeneratorState::Done);
    assert_eq!(creator.chunks.len(), 1);

    let chunk = &creator.chunks[0];
    assert_eq!(chunk.name, "Chunk_0_0");
    assert_eq!(chunk.positions.len(), 36, "4 tiles x 9 vertices");
    assert_eq!(chunk.indices.len(), 96, "4 tiles x 8 triangles x 3");
    assert!(matches!(chunk.indices, ChunkIndices::U16(_)));
    for p in &chunk.positions {
        assert_eq!(p[1], 0.0, "vertex {:?} should be at height 0", p);
    }

    // Every tile carries the default UV layout over {0, 0.5, 1}^2.
    let expected_uvs = [
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
    for tile_uvs in chunk.uvs.chunks_exact(9) {
        assert_eq!(tile_uvs, expected_uvs);
    }
}

// ===========================================================================
// 2. Cliff strip: two tiles that must not visually reconnect
// ===========================================================================

#[test]
fn cliff_strip_clamps_both_sides_of_the_seam() {
    // Two tile columns at heights 0 and 10 with max_edge_delta = 1: the left
    // tile's east midpoint rises only to 1, the right tile's west midpoint
    // drops only to 9, leaving an 8-unit cliff face between the two blocks.
    let field = HeightField::from_heights(2, vec![0.0, 10.0, 0.0, 10.0]);
    let config = TerrainGenConfig {
        world_size: 1,
        chunk_size: 2,
        max_edge_delta: 1.0,
        ..Default::default()
    };
    let chunk = build_chunk_mesh(&field, &config, 0, 0);

    // Tiles are laid out row-major; tile (0, 0) owns vertices 0..9 and tile
    // (1, 0) owns vertices 9..18.
    let left_east_mid = chunk.positions[E_MID][1];
    let right_west_mid = chunk.positions[9 + W_MID][1];
    assert_eq!(left_east_mid, 1.0);
    assert_eq!(right_west_mid, 9.0);

    // The left tile's seam corners are capped by the same cliff.
    assert_eq!(chunk.positions[SE][1], 1.0);
    assert_eq!(chunk.positions[NE][1], 1.0);
}

// ===========================================================================
// 3. Generator state machine and handle registry
// ===========================================================================

#[test]
fn generator_steps_through_field_then_one_chunk_per_step() {
    let config = TerrainGenConfig {
        world_size: 2,
        chunk_size: 2,
        ..Default::default()
    };
    let mut generator: WorldGenerator<usize> = WorldGenerator::new(config);
    let mut creator = RecordingCreator::default();

    assert_eq!(generator.state(), GeneratorState::Idle);
    assert!(generator.height_field().is_none());

    // First step: the full height field, no chunks yet.
    assert_eq!(generator.step(&mut creator), GeneratorState::BuildingChunks);
    assert_eq!(generator.height_field().map(|f| f.tiles_per_axis()), Some(4));
    assert!(creator.chunks.is_empty());

    // Then exactly one chunk per step.
    for built in 1..=4 {
        let state = generator.step(&mut creator);
        assert_eq!(creator.chunks.len(), built);
        if built < 4 {
            assert_eq!(state, GeneratorState::BuildingChunks);
        } else {
            assert_eq!(state, GeneratorState::Done);
        }
    }

    // Stepping a finished generator is a no-op.
    assert_eq!(generator.step(&mut creator), GeneratorState::Done);
    assert_eq!(creator.chunks.len(), 4);
}

#[test]
fn chunk_handles_are_indexed_by_chunk_coords() {
    let config = TerrainGenConfig {
        world_size: 2,
        chunk_size: 2,
        ..Default::default()
    };
    let (generator, creator) = generate_world(config);

    assert!(generator.chunk_handles().iter().all(|h| h.is_some()));
    // Row-major build order: handle value is the recording index.
    assert_eq!(generator.chunk_handle(0, 0), Some(&0));
    assert_eq!(generator.chunk_handle(1, 0), Some(&1));
    assert_eq!(generator.chunk_handle(0, 1), Some(&2));
    assert_eq!(generator.chunk_handle(1, 1), Some(&3));
    assert_eq!(generator.chunk_handle(2, 1), None);

    // Chunks tile the world with no gaps: names and origins line up.
    assert_eq!(creator.chunks[1].name, "Chunk_1_0");
    assert_eq!(creator.chunks[2].name, "Chunk_0_1");
    assert_eq!(creator.chunks[3].origin.x, 2.0);
    assert_eq!(creator.chunks[3].origin.z, 2.0);
}

#[test]
fn cancellation_is_honored_at_the_chunk_boundary() {
    let config = TerrainGenConfig {
        world_size: 3,
        chunk_size: 2,
        ..Default::default()
    };
    let mut generator: WorldGenerator<usize> = WorldGenerator::new(config);
    let mut creator = RecordingCreator::default();

    generator.step(&mut creator); // height field
    generator.step(&mut creator); // chunk 0
    generator.cancel();
    assert_eq!(generator.step(&mut creator), GeneratorState::Cancelled);
    assert!(generator.is_finished());
    assert_eq!(creator.chunks.len(), 1, "no chunk built after cancel");

    // A cancelled generator stays cancelled.
    assert_eq!(generator.step(&mut creator), GeneratorState::Cancelled);
    assert_eq!(creator.chunks.len(), 1);
}

// ===========================================================================
// 4. Degenerate configuration
// ===========================================================================

#[test]
fn non_positive_config_still_generates_a_single_chunk_world() {
    let config = TerrainGenConfig {
        world_size: -1,
        chunk_size: 0,
        ..Default::default()
    };
    let (generator, creator) = generate_world(config);
    assert_eq!(generator.state(), GeneratorState::Done);
    assert_eq!(creator.chunks.len(), 1);
    assert_eq!(creator.chunks[0].positions.len(), 9, "one tile");
}

// ===========================================================================
// 5. Debug random mode
// ===========================================================================

#[test]
fn debug_random_world_stays_within_height_scale() {
    let config = TerrainGenConfig {
        world_size: 1,
        chunk_size: 4,
        height_scale: 3.0,
        debug_random_heights: true,
        max_edge_delta: 0.25,
        ..Default::default()
    };
    let (_, creator) = generate_world(config);
    for p in &creator.chunks[0].positions {
        assert!(
            (0.0..=3.0).contains(&p[1]),
            "vertex height {} outside [0, height_scale]",
            p[1]
        );
    }
}

// ===========================================================================
// 6. Terraced world
// ===========================================================================

#[test]
fn terraced_world_snaps_every_field_height() {
    let config = TerrainGenConfig {
        world_size: 1,
        chunk_size: 8,
        height_scale: 10.0,
        terrace: 2.0,
        seed: 5,
        ..Default::default()
    };
    let (generator, _) = generate_world(config);
    let field = generator.height_field().unwrap();
    for z in 0..8 {
        for x in 0..8 {
            let h = field.get(x, z);
            let snapped = (h / 2.0).round() * 2.0;
            assert_eq!(h, snapped, "field height {} not on the terrace grid", h);
        }
    }
}

// ===========================================================================
// 7. Custom creators
// ===========================================================================

#[test]
fn generator_works_with_a_custom_handle_type() {
    struct NamingCreator;

    impl RenderableCreator for NamingCreator {
        type Handle = String;

        fn create_renderable(&mut self, chunk: crate::ChunkMeshData) -> String {
            chunk.name
        }
    }

    let config = TerrainGenConfig {
        world_size: 2,
        chunk_size: 1,
        ..Default::default()
    };
    let mut generator: WorldGenerator<String> = WorldGenerator::new(config);
    generator.run_to_completion(&mut NamingCreator);
    assert_eq!(
        generator.chunk_handle(1, 1).map(String::as_str),
        Some("Chunk_1_1")
    );
}
