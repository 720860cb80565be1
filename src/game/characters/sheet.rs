// Frame layout of the bundled character sprite sheet

use super::animation::{FrameDefinition, SpriteSheetDefinition};
use super::state::Mode;

/// Smallest atlas that holds every bundled frame
pub const SANTA_ATLAS_SIZE: (u32, u32) = (371, 237);

const STAND: [FrameDefinition; 4] = [
    FrameDefinition::repeated(2, 0, 38, 52, 10),
    FrameDefinition::repeated(41, 0, 38, 52, 3),
    FrameDefinition::repeated(80, 0, 38, 52, 3),
    FrameDefinition::repeated(119, 0, 38, 52, 3),
];

const WALK: [FrameDefinition; 10] = [
    FrameDefinition::single(2, 122, 32, 46),
    FrameDefinition::single(35, 119, 33, 49),
    FrameDefinition::single(70, 116, 35, 52),
    FrameDefinition::single(107, 113, 39, 55),
    FrameDefinition::single(148, 117, 39, 52),
    FrameDefinition::single(188, 123, 39, 45),
    FrameDefinition::single(228, 120, 37, 48),
    FrameDefinition::single(265, 115, 34, 53),
    FrameDefinition::single(301, 115, 36, 53),
    FrameDefinition::single(337, 115, 34, 53),
];

const JUMP: [FrameDefinition; 5] = [
    FrameDefinition::repeated(0, 181, 42, 56, 3),
    FrameDefinition::repeated(43, 180, 46, 46, 3),
    FrameDefinition::repeated(91, 180, 40, 43, 3),
    FrameDefinition::repeated(132, 180, 38, 49, 3),
    FrameDefinition::repeated(171, 183, 38, 53, 3),
];

// The sheet has no dedicated fall art; reuse the closing jump poses
const FALL: [FrameDefinition; 2] = [JUMP[3], JUMP[4]];

/// Frame definitions for the bundled Santa sprite sheet
pub fn santa_sheet() -> SpriteSheetDefinition {
    SpriteSheetDefinition::new()
        .with_mode(Mode::Stand, STAND.to_vec())
        .with_mode(Mode::Walk, WALK.to_vec())
        .with_mode(Mode::Jump, JUMP.to_vec())
        .with_mode(Mode::Fall, FALL.to_vec())
}
