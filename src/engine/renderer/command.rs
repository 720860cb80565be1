// Draw commands handed to the external renderer

use crate::engine::assets::AtlasRegion;

/// Axis-aligned rectangle in float coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<AtlasRegion> for Rect {
    fn from(region: AtlasRegion) -> Self {
        Self::new(
            region.x as f32,
            region.y as f32,
            region.width as f32,
            region.height as f32,
        )
    }
}

/// One sprite blit.
///
/// When `mirrored` is set, `destination` is expressed in a horizontally
/// flipped coordinate frame (x axis scaled by -1), the same convention as a
/// canvas `scale(-1, 1)` before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Source rectangle in the sprite atlas
    pub source: Rect,
    /// Destination rectangle (flipped frame when mirrored)
    pub destination: Rect,
    /// Draw with the x axis flipped
    pub mirrored: bool,
}

impl DrawCommand {
    /// Destination rectangle in unflipped screen coordinates
    pub fn screen_destination(&self) -> Rect {
        if self.mirrored {
            Rect {
                x: -self.destination.x - self.destination.width,
                ..self.destination
            }
        } else {
            self.destination
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_region() {
        let rect = Rect::from(AtlasRegion::new(2, 122, 32, 46));
        assert_eq!(rect, Rect::new(2.0, 122.0, 32.0, 46.0));
    }

    #[test]
    fn test_screen_destination_unmirrored() {
        let command = DrawCommand {
            source: Rect::default(),
            destination: Rect::new(10.0, 20.0, 30.0, 40.0),
            mirrored: false,
        };
        assert_eq!(command.screen_destination(), command.destination);
    }

    #[test]
    fn test_screen_destination_mirrored() {
        let command = DrawCommand {
            source: Rect::default(),
            destination: Rect::new(-130.0, 20.0, 30.0, 40.0),
            mirrored: true,
        };
        assert_eq!(
            command.screen_destination(),
            Rect::new(100.0, 20.0, 30.0, 40.0)
        );
    }
}
