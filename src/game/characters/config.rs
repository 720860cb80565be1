// Motion presets for the three character variants

use super::state::Mode;
use std::fmt;
use std::str::FromStr;

/// Which motion model a character uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// No physics: walks along the floor line, jump is a pose
    Walker,
    /// Gentle gravity while airborne, double jump, fall timeout
    #[default]
    Acrobat,
    /// Strong gravity applied every tick, single jump
    Hopper,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Walker, Variant::Acrobat, Variant::Hopper];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Walker => "walker",
            Variant::Acrobat => "acrobat",
            Variant::Hopper => "hopper",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}' (expected walker, acrobat or hopper)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

/// How vertical acceleration is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gravity {
    /// No vertical acceleration
    None,
    /// Added each tick only while off the ground
    Airborne(f32),
    /// Added every tick; the ground snap cancels it on the floor
    Always(f32),
}

/// What holding `Up` does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStyle {
    /// Selects the jump pose without vertical motion
    Pose,
    /// Applies an upward velocity impulse
    Impulse,
}

/// When the animation frame index goes back to zero on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameIndexPolicy {
    /// Only wraps when out of range for the current mode
    Continuous,
    /// Also resets when entering `Stand` from movement or leaving `Stand`
    ResetOnModeEntry,
}

/// Tunables for the motion engine and animation selector
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Horizontal speed (units per millisecond)
    pub speed: f32,
    /// Upward velocity added by a jump (units per tick)
    pub jump_impulse: f32,
    pub gravity: Gravity,
    pub jump_style: JumpStyle,
    /// Allow one extra airborne jump after releasing `Up`
    pub double_jump: bool,
    /// Continuous descent after which `Jump` becomes `Fall` (ms)
    pub fall_timeout_ms: Option<f64>,
    pub frame_policy: FrameIndexPolicy,
    /// Ticks between animation frame advances
    pub ticks_per_frame: u64,
    /// Upper bound for a single tick's elapsed time (ms)
    pub max_frame_ms: f32,
}

pub const JUMP_IMPULSE: f32 = 10.0;
pub const FALL_TIMEOUT_MS: f64 = 3000.0;
pub const TICKS_PER_FRAME: u64 = 10;
pub const MAX_FRAME_MS: f32 = 250.0;

pub const WALKER: MotionConfig = MotionConfig {
    speed: 0.1,
    jump_impulse: JUMP_IMPULSE,
    gravity: Gravity::None,
    jump_style: JumpStyle::Pose,
    double_jump: false,
    fall_timeout_ms: None,
    frame_policy: FrameIndexPolicy::ResetOnModeEntry,
    ticks_per_frame: TICKS_PER_FRAME,
    max_frame_ms: MAX_FRAME_MS,
};

pub const ACROBAT: MotionConfig = MotionConfig {
    speed: 0.25,
    jump_impulse: JUMP_IMPULSE,
    gravity: Gravity::Airborne(0.1),
    jump_style: JumpStyle::Impulse,
    double_jump: true,
    fall_timeout_ms: Some(FALL_TIMEOUT_MS),
    frame_policy: FrameIndexPolicy::Continuous,
    ticks_per_frame: TICKS_PER_FRAME,
    max_frame_ms: MAX_FRAME_MS,
};

pub const HOPPER: MotionConfig = MotionConfig {
    speed: 0.25,
    jump_impulse: JUMP_IMPULSE,
    gravity: Gravity::Always(1.0),
    jump_style: JumpStyle::Impulse,
    double_jump: false,
    fall_timeout_ms: None,
    frame_policy: FrameIndexPolicy::Continuous,
    ticks_per_frame: TICKS_PER_FRAME,
    max_frame_ms: MAX_FRAME_MS,
};

impl MotionConfig {
    /// Preset for a variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Walker => WALKER,
            Variant::Acrobat => ACROBAT,
            Variant::Hopper => HOPPER,
        }
    }

    /// Modes this configuration can produce; each needs frames
    pub fn reachable_modes(&self) -> Vec<Mode> {
        let mut modes = vec![Mode::Stand, Mode::Walk, Mode::Jump];
        if self.fall_timeout_ms.is_some() {
            modes.push(Mode::Fall);
        }
        modes
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        ACROBAT
    }
}
