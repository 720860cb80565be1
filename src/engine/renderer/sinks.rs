// Renderer implementations that consume draw commands without a GPU

use super::command::DrawCommand;
use super::Renderer;
use crate::engine::assets::SpriteAtlas;
use log::trace;

/// All commands issued between two `clear` calls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedFrame {
    /// Viewport size passed to `clear`
    pub viewport: (f32, f32),
    pub commands: Vec<DrawCommand>,
}

/// Keeps every frame it is asked to draw.
///
/// Nothing is ever dropped, so memory grows with the number of frames. Meant
/// for tests and short replays; the binary uses [`LogRenderer`].
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RecordedFrame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded frames, oldest first
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// The most recently started frame
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.frames.push(RecordedFrame {
            viewport: (width, height),
            commands: Vec::new(),
        });
    }

    fn draw(&mut self, _atlas: &SpriteAtlas, command: &DrawCommand) {
        // A draw without a preceding clear still lands in a frame
        if self.frames.is_empty() {
            self.frames.push(RecordedFrame::default());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.commands.push(*command);
        }
    }
}

/// Traces each command through the `log` facade
#[derive(Debug, Default)]
pub struct LogRenderer {
    draws: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw commands received
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl Renderer for LogRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        trace!("clear {}x{}", width, height);
    }

    fn draw(&mut self, atlas: &SpriteAtlas, command: &DrawCommand) {
        self.draws += 1;
        trace!(
            "draw {} src={:?} dst={:?} mirrored={}",
            atlas.name(),
            command.source,
            command.destination,
            command.mirrored
        );
    }
}
