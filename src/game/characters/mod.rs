// Character system
//
// This module contains everything related to the controllable characters:
// - Character motion engine and draw projection
// - Motion presets for the supported variants
// - Locomotion modes and facing
// - Frame tables and animation frame selection
// - The bundled sprite sheet layout

pub mod animation;
pub mod character;
pub mod config;
pub mod sheet;
pub mod state;

// Re-export commonly used types
pub use animation::{
    expand_frames, AnimationError, AnimationSelector, AnimationSet, FrameDefinition, FrameTable,
    SpriteSheetDefinition,
};
pub use character::{Character, CharacterId};
pub use config::{FrameIndexPolicy, Gravity, JumpStyle, MotionConfig, Variant};
pub use sheet::santa_sheet;
pub use state::{Direction, Mode};
