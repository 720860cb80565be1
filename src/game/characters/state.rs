// Character locomotion modes and facing

use glam::Vec2;
use std::fmt;

/// Locomotion mode of a character.
///
/// Derived from motion state every tick; never stored as an authoritative
/// transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Standing still
    #[default]
    Stand,
    /// Moving horizontally
    Walk,
    /// Airborne (ascending, or descending within the fall timeout)
    Jump,
    /// Descending for longer than the fall timeout
    Fall,
}

impl Mode {
    /// Number of modes; size of per-mode lookup tables
    pub const COUNT: usize = 4;

    pub const ALL: [Mode; Mode::COUNT] = [Mode::Stand, Mode::Walk, Mode::Jump, Mode::Fall];

    /// Slot of this mode in a per-mode lookup table
    pub fn index(self) -> usize {
        match self {
            Mode::Stand => 0,
            Mode::Walk => 1,
            Mode::Jump => 2,
            Mode::Fall => 3,
        }
    }

    /// Classify from velocity alone: vertical motion beats horizontal motion.
    ///
    /// Never yields `Fall`; that needs the descent timer.
    pub fn from_velocity(velocity: Vec2) -> Self {
        if velocity.y != 0.0 {
            Mode::Jump
        } else if velocity.x != 0.0 {
            Mode::Walk
        } else {
            Mode::Stand
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Stand => "stand",
            Mode::Walk => "walk",
            Mode::Jump => "jump",
            Mode::Fall => "fall",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Facing direction. Keeps its last value while no horizontal input is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn is_left(self) -> bool {
        self == Direction::Left
    }
}
