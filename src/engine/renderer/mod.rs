// Rendering seam
//
// The engine produces draw commands; executing them (the pixel blit) belongs
// to whatever implements `Renderer`.

mod command;
mod projector;
mod sinks;

pub use command::{DrawCommand, Rect};
pub use projector::project;
pub use sinks::{LogRenderer, RecordedFrame, RecordingRenderer};

use crate::engine::assets::SpriteAtlas;

/// Consumer of per-tick draw commands
pub trait Renderer {
    /// Clear the whole viewport; issued once per tick before any draw
    fn clear(&mut self, width: f32, height: f32);

    /// Blit one sprite frame from `atlas`
    fn draw(&mut self, atlas: &SpriteAtlas, command: &DrawCommand);
}
