// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// In-place bounds clamping for 2D vectors.
///
/// Addition is glam's `+=`; this adds the one operation glam lacks for
/// viewport-bound positions: both axes are floored at zero.
pub trait ClampToBounds {
    /// Clamp `x` into `[0, max_x]` and `y` into `[0, max_y]`
    fn clamp_to_bounds(&mut self, max_x: f32, max_y: f32);
}

impl ClampToBounds for Vec2 {
    fn clamp_to_bounds(&mut self, max_x: f32, max_y: f32) {
        self.x = clamp(self.x, 0.0, max_x.max(0.0));
        self.y = clamp(self.y, 0.0, max_y.max(0.0));
    }
}
