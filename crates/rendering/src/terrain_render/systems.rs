use bevy::prelude::*;

use terrain::{ChunkMeshData, RenderableCreator, TerrainGenConfig, WorldGenerator};

use super::mesh::chunk_to_bevy_mesh;
use super::types::TerrainChunk;

/// `RenderableCreator` that turns each finished chunk into one Bevy entity.
struct BevyChunkSpawner<'w, 's, 'a> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
}

impl RenderableCreator for BevyChunkSpawner<'_, '_, '_> {
    type Handle = Entity;

    fn create_renderable(&mut self, chunk: ChunkMeshData) -> Entity {
        let mesh = chunk_to_bevy_mesh(&chunk);
        self.commands
            .spawn((
                Mesh3d(self.meshes.add(mesh)),
                MeshMaterial3d(self.materials.add(StandardMaterial {
                    base_color: Color::srgb(0.45, 0.6, 0.35),
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_translation(chunk.origin),
                Name::new(chunk.name.clone()),
                TerrainChunk {
                    chunk_x: chunk.chunk_x,
                    chunk_z: chunk.chunk_z,
                },
            ))
            .id()
    }
}

/// Startup: seed the generator from the configured world parameters.
pub fn init_world_generator(mut commands: Commands, config: Res<TerrainGenConfig>) {
    commands.insert_resource(WorldGenerator::<Entity>::new(config.clone()));
}

/// Update: advance generation by exactly one cooperative step per frame, so
/// a large world streams in one chunk per tick instead of stalling a frame
/// for the whole build.
pub fn step_world_generation(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut generator: ResMut<WorldGenerator<Entity>>,
) {
    if generator.is_finished() {
        return;
    }
    let mut spawner = BevyChunkSpawner {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
    };
    generator.step(&mut spawner);
}
