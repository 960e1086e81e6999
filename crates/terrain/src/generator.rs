use bevy::prelude::*;

use crate::chunk_mesh::build_chunk_mesh;
use crate::config::TerrainGenConfig;
use crate::height_field::HeightField;
use crate::renderable::RenderableCreator;

/// Phase of the world generation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Idle,
    BuildingHeightField,
    BuildingChunks,
    Done,
    Cancelled,
}

/// Drives world generation one cooperative step at a time so an external
/// scheduler (a per-frame system, a test loop) controls pacing.
///
/// The first step builds the full height field; every later step builds
/// exactly one chunk and hands it to the creator, which returns the opaque
/// handle `H` recorded in a pre-sized slot per chunk. A chunk is the unit of
/// suspension and of cancellation: construction is never interrupted
/// mid-chunk.
#[derive(Resource)]
pub struct WorldGenerator<H: Send + Sync + 'static> {
    config: TerrainGenConfig,
    state: GeneratorState,
    field: Option<HeightField>,
    /// One slot per chunk, indexed `chunk_z * chunks_per_axis + chunk_x`.
    handles: Vec<Option<H>>,
    next_chunk: usize,
    cancel_requested: bool,
}

impl<H: Send + Sync + 'static> WorldGenerator<H> {
    pub fn new(config: TerrainGenConfig) -> Self {
        let chunk_count = config.chunk_count();
        Self {
            config,
            state: GeneratorState::Idle,
            field: None,
            handles: (0..chunk_count).map(|_| None).collect(),
            next_chunk: 0,
            cancel_requested: false,
        }
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn config(&self) -> &TerrainGenConfig {
        &self.config
    }

    /// The world's height field, available once generation has started.
    pub fn height_field(&self) -> Option<&HeightField> {
        self.field.as_ref()
    }

    /// Handles of all chunks produced so far, indexed
    /// `chunk_z * chunks_per_axis + chunk_x`; unbuilt chunks are `None`.
    pub fn chunk_handles(&self) -> &[Option<H>] {
        &self.handles
    }

    pub fn chunk_handle(&self, chunk_x: usize, chunk_z: usize) -> Option<&H> {
        self.handles
            .get(chunk_z * self.config.chunks_per_axis() + chunk_x)?
            .as_ref()
    }

    /// Request cooperative cancellation. Honored at the next step, so a
    /// chunk already under construction always completes.
    pub fn cancel(&mut self) {
        self.cancel_requested = true;
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GeneratorState::Done | GeneratorState::Cancelled)
    }

    /// Advance generation by one cooperative unit and return the new state.
    ///
    /// From `Idle` this builds the complete height field synchronously (pure
    /// CPU work over the grid, never interrupted) and lands in
    /// `BuildingChunks`; from `BuildingChunks` it builds exactly one chunk
    /// in row-major order; past the last chunk it settles in `Done`.
    pub fn step<C>(&mut self, creator: &mut C) -> GeneratorState
    where
        C: RenderableCreator<Handle = H>,
    {
        if self.cancel_requested && !self.is_finished() {
            info!(
                "world generation cancelled after {} of {} chunks",
                self.next_chunk,
                self.handles.len()
            );
            self.state = GeneratorState::Cancelled;
            return self.state;
        }

        match self.state {
            GeneratorState::Idle => {
                self.state = GeneratorState::BuildingHeightField;
                let field = HeightField::generate(&self.config);
                info!(
                    "height field built: {}x{} tiles",
                    field.tiles_per_axis(),
                    field.tiles_per_axis()
                );
                self.field = Some(field);
                self.state = GeneratorState::BuildingChunks;
            }
            GeneratorState::BuildingChunks => {
                // The Idle step stores the field before this state is ever
                // entered; bail out instead of panicking if that invariant
                // is broken.
                let Some(field) = self.field.as_ref() else {
                    self.state = GeneratorState::Done;
                    return self.state;
                };
                let chunks_per_axis = self.config.chunks_per_axis();
                let chunk_x = self.next_chunk % chunks_per_axis;
                let chunk_z = self.next_chunk / chunks_per_axis;
                let mesh = build_chunk_mesh(field, &self.config, chunk_x, chunk_z);
                let handle = creator.create_renderable(mesh);
                self.handles[self.next_chunk] = Some(handle);
                self.next_chunk += 1;
                if self.next_chunk == self.handles.len() {
                    info!("world generation complete: {} chunks", self.handles.len());
                    self.state = GeneratorState::Done;
                }
            }
            GeneratorState::BuildingHeightField
            | GeneratorState::Done
            | GeneratorState::Cancelled => {}
        }
        self.state
    }

    /// Run every remaining step back to back. Test and tooling convenience;
    /// the app steps once per frame instead.
    pub fn run_to_completion<C>(&mut self, creator: &mut C)
    where
        C: RenderableCreator<Handle = H>,
    {
        while !self.is_finished() {
            self.step(creator);
        }
    }
}
