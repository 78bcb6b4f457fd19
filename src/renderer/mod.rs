//! Rendering
//!
//! `scene` turns a read-only `GameState` into colored triangles (shapes and
//! block-font text); `pipeline` uploads them to the GPU with wgpu.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::TextLine;
pub use vertex::Vertex;

use crate::sim::GameState;

/// Read-only consumer of the session, called once per tick
pub trait RenderSink {
    fn present(&mut self, state: &GameState);
}

impl<R: RenderSink + ?Sized> RenderSink for Box<R> {
    fn present(&mut self, state: &GameState) {
        (**self).present(state)
    }
}

/// Draws nothing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn present(&mut self, _state: &GameState) {}
}
