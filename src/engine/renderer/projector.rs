// Projects a feet-anchored sprite frame to a draw command

use super::command::{DrawCommand, Rect};
use crate::engine::assets::AtlasRegion;
use glam::Vec2;

/// Build the draw command for `frame` standing at `position`.
///
/// `position` is the bottom-left anchor (feet line), so the destination is
/// lifted by the frame height. Facing left draws in the flipped frame: x is
/// negated and offset by the frame width so the sprite still occupies
/// `[position.x, position.x + width]` on screen.
pub fn project(frame: &AtlasRegion, position: Vec2, facing_left: bool) -> DrawCommand {
    let size = frame.size();
    let y = position.y - size.y;

    let destination = if facing_left {
        Rect::new(-position.x - size.x, y, size.x, size.y)
    } else {
        Rect::new(position.x, y, size.x, size.y)
    };

    DrawCommand {
        source: Rect::from(*frame),
        destination,
        mirrored: facing_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: AtlasRegion = AtlasRegion::new(41, 0, 38, 52);

    #[test]
    fn test_project_facing_right() {
        let command = project(&FRAME, Vec2::new(100.0, 600.0), false);

        assert_eq!(command.source, Rect::new(41.0, 0.0, 38.0, 52.0));
        assert_eq!(command.destination, Rect::new(100.0, 548.0, 38.0, 52.0));
        assert!(!command.mirrored);
    }

    #[test]
    fn test_project_facing_left() {
        let command = project(&FRAME, Vec2::new(100.0, 600.0), true);

        assert!(command.mirrored);
        assert_eq!(command.destination, Rect::new(-138.0, 548.0, 38.0, 52.0));
        // Same screen footprint as the right-facing sprite
        assert_eq!(
            command.screen_destination(),
            Rect::new(100.0, 548.0, 38.0, 52.0)
        );
    }

    #[test]
    fn test_project_at_origin() {
        let command = project(&FRAME, Vec2::ZERO, false);
        assert_eq!(command.destination.y, -52.0);
    }
}
