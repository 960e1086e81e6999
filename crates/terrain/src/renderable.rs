use crate::chunk_mesh::ChunkMeshData;

/// Engine-side renderable-object creation, kept behind a trait so the core
/// never touches a scene graph. Called exactly once per finished chunk with
/// its complete buffers and world-space origin.
pub trait RenderableCreator {
    /// Opaque handle to the created object (an `Entity` in the Bevy
    /// implementation).
    type Handle;

    fn create_renderable(&mut self, chunk: ChunkMeshData) -> Self::Handle;
}

/// Creator that records every chunk it is handed, for headless tests that
/// want to inspect the generated buffers.
#[derive(Default)]
pub struct RecordingCreator {
    pub chunks: Vec<ChunkMeshData>,
}

impl RenderableCreator for RecordingCreator {
    type Handle = usize;

    fn create_renderable(&mut self, chunk: ChunkMeshData) -> usize {
        self.chunks.push(chunk);
        self.chunks.len() - 1
    }
}
