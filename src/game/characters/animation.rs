// Character animation: frame tables and frame selection

use super::config::FrameIndexPolicy;
use super::state::Mode;
use crate::engine::assets::{AtlasRegion, SpriteAtlas};

/// One atlas rectangle and how many consecutive animation slots it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDefinition {
    pub region: AtlasRegion,
    /// Slots occupied; `None` and `Some(0)` both mean one slot
    pub repeat_count: Option<u32>,
}

impl FrameDefinition {
    /// A frame shown for a single slot
    pub const fn single(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            region: AtlasRegion::new(x, y, width, height),
            repeat_count: None,
        }
    }

    /// A frame held for `count` consecutive slots
    pub const fn repeated(x: u32, y: u32, width: u32, height: u32, count: u32) -> Self {
        Self {
            region: AtlasRegion::new(x, y, width, height),
            repeat_count: Some(count),
        }
    }

    /// Number of table slots this definition expands to
    pub fn slots(&self) -> usize {
        match self.repeat_count {
            Some(n) if n > 0 => n as usize,
            _ => 1,
        }
    }
}

/// Expanded, index-addressable frames for one mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<AtlasRegion>,
}

impl FrameTable {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AtlasRegion> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtlasRegion> {
        self.frames.iter()
    }
}

/// Expand compact definitions into a flat frame table
pub fn expand_frames(definitions: &[FrameDefinition]) -> FrameTable {
    let frames = definitions
        .iter()
        .flat_map(|def| std::iter::repeat(def.region).take(def.slots()))
        .collect();
    FrameTable { frames }
}

/// Animation configuration errors, raised when a character is built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("no frames defined for reachable mode '{0}'")]
    EmptyFrameTable(Mode),

    #[error(
        "frame {index} of mode '{mode}' ({region:?}) lies outside the {atlas_width}x{atlas_height} atlas"
    )]
    FrameOutsideAtlas {
        mode: Mode,
        index: usize,
        region: AtlasRegion,
        atlas_width: u32,
        atlas_height: u32,
    },
}

/// Compact per-mode frame definitions for a sprite sheet
#[derive(Debug, Clone, Default)]
pub struct SpriteSheetDefinition {
    modes: [Vec<FrameDefinition>; Mode::COUNT],
}

impl SpriteSheetDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the definitions for a mode
    pub fn with_mode(mut self, mode: Mode, definitions: Vec<FrameDefinition>) -> Self {
        self.modes[mode.index()] = definitions;
        self
    }

    pub fn definitions(&self, mode: Mode) -> &[FrameDefinition] {
        &self.modes[mode.index()]
    }
}

/// One expanded frame table per mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSet {
    tables: [FrameTable; Mode::COUNT],
}

impl AnimationSet {
    /// Expand every mode and validate the result.
    ///
    /// Every mode in `reachable` must have at least one frame, and when an
    /// atlas is given every frame must lie inside it.
    pub fn build(
        sheet: &SpriteSheetDefinition,
        reachable: &[Mode],
        atlas: Option<&SpriteAtlas>,
    ) -> Result<Self, AnimationError> {
        let tables = Mode::ALL.map(|mode| expand_frames(sheet.definitions(mode)));

        for &mode in reachable {
            if tables[mode.index()].is_empty() {
                return Err(AnimationError::EmptyFrameTable(mode));
            }
        }

        if let Some(atlas) = atlas {
            for mode in Mode::ALL {
                let outside = tables[mode.index()]
                    .iter()
                    .enumerate()
                    .find(|(_, region)| !atlas.contains(region));
                if let Some((index, region)) = outside {
                    return Err(AnimationError::FrameOutsideAtlas {
                        mode,
                        index,
                        region: *region,
                        atlas_width: atlas.width(),
                        atlas_height: atlas.height(),
                    });
                }
            }
        }

        Ok(Self { tables })
    }

    pub fn table(&self, mode: Mode) -> &FrameTable {
        &self.tables[mode.index()]
    }

    pub fn frame(&self, mode: Mode, index: usize) -> Option<&AtlasRegion> {
        self.table(mode).get(index)
    }
}

/// Tick counter and frame index for the current mode.
///
/// The frame index advances once every `ticks_per_frame` ticks, a coarser
/// rate than physics, and is shared across modes.
#[derive(Debug, Clone)]
pub struct AnimationSelector {
    tick: u64,
    frame_index: usize,
    previous_mode: Mode,
    policy: FrameIndexPolicy,
    ticks_per_frame: u64,
}

impl AnimationSelector {
    pub fn new(policy: FrameIndexPolicy, ticks_per_frame: u64) -> Self {
        Self {
            tick: 0,
            frame_index: 0,
            previous_mode: Mode::Stand,
            policy,
            ticks_per_frame: ticks_per_frame.max(1),
        }
    }

    /// Advance one tick once `mode` is final for the tick.
    ///
    /// `frames` is the length of the mode's table; the index wraps to zero
    /// when it falls outside it. `moving` is whether horizontal input is held,
    /// which starts a fresh cycle when leaving `Stand` under the reset policy.
    pub fn advance(&mut self, mode: Mode, frames: usize, moving: bool) {
        self.tick += 1;
        if self.tick % self.ticks_per_frame == 0 {
            self.frame_index += 1;
        }

        if self.policy == FrameIndexPolicy::ResetOnModeEntry {
            let stopped = self.previous_mode != Mode::Stand && mode == Mode::Stand;
            let started = self.previous_mode == Mode::Stand && moving;
            if stopped || started {
                self.frame_index = 0;
            }
        }

        if self.frame_index >= frames {
            self.frame_index = 0;
        }
        self.previous_mode = mode;
    }

    /// Ticks advanced so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn policy(&self) -> FrameIndexPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definitions() -> Vec<FrameDefinition> {
        vec![
            FrameDefinition::repeated(2, 0, 38, 52, 10),
            FrameDefinition::single(41, 0, 38, 52),
            FrameDefinition::repeated(80, 0, 38, 52, 3),
        ]
    }

    #[test]
    fn test_expand_length_is_sum_of_slots() {
        let defs = sample_definitions();
        let table = expand_frames(&defs);
        let expected: usize = defs.iter().map(|d| d.slots()).sum();
        assert_eq!(table.len(), expected);
        assert_eq!(table.len(), 14);
    }

    #[test]
    fn test_expand_spans_hold_definition_region() {
        let defs = sample_definitions();
        let table = expand_frames(&defs);

        let mut index = 0;
        for def in &defs {
            for _ in 0..def.slots() {
                assert_eq!(table.get(index), Some(&def.region));
                index += 1;
            }
        }
    }

    #[test]
    fn test_zero_repeat_counts_as_one() {
        let defs = vec![
            FrameDefinition::repeated(0, 0, 8, 8, 0),
            FrameDefinition::single(8, 0, 8, 8),
        ];
        let table = expand_frames(&defs);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), Some(&AtlasRegion::new(0, 0, 8, 8)));
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_frames(&[]).is_empty());
    }

    #[test]
    fn test_build_rejects_empty_reachable_mode() {
        let sheet = SpriteSheetDefinition::new()
            .with_mode(Mode::Stand, sample_definitions())
            .with_mode(Mode::Walk, sample_definitions());

        let err = AnimationSet::build(&sheet, &[Mode::Stand, Mode::Walk, Mode::Jump], None)
            .unwrap_err();
        assert_eq!(err, AnimationError::EmptyFrameTable(Mode::Jump));
    }

    #[test]
    fn test_build_allows_empty_unreachable_mode() {
        let sheet = SpriteSheetDefinition::new().with_mode(Mode::Stand, sample_definitions());
        let set = AnimationSet::build(&sheet, &[Mode::Stand], None).unwrap();
        assert!(set.table(Mode::Fall).is_empty());
        assert_eq!(set.table(Mode::Stand).len(), 14);
    }

    #[test]
    fn test_build_rejects_frame_outside_atlas() {
        let sheet = SpriteSheetDefinition::new().with_mode(Mode::Stand, sample_definitions());
        let atlas = SpriteAtlas::new("small", 100, 100);

        let err = AnimationSet::build(&sheet, &[Mode::Stand], Some(&atlas)).unwrap_err();
        assert!(matches!(
            err,
            AnimationError::FrameOutsideAtlas {
                mode: Mode::Stand,
                index: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_build_rejects_frame_past_u32_range() {
        let sheet = SpriteSheetDefinition::new()
            .with_mode(Mode::Stand, vec![FrameDefinition::single(u32::MAX - 1, 0, 10, 10)]);
        let atlas = SpriteAtlas::new("small", 100, 100);

        let err = AnimationSet::build(&sheet, &[Mode::Stand], Some(&atlas)).unwrap_err();
        assert!(matches!(
            err,
            AnimationError::FrameOutsideAtlas {
                mode: Mode::Stand,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_build_accepts_frames_inside_atlas() {
        let sheet = SpriteSheetDefinition::new().with_mode(Mode::Stand, sample_definitions());
        let atlas = SpriteAtlas::new("sheet", 200, 60);
        assert!(AnimationSet::build(&sheet, &[Mode::Stand], Some(&atlas)).is_ok());
    }

    #[test]
    fn test_selector_advances_every_ten_ticks() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::Continuous, 10);
        for _ in 0..9 {
            selector.advance(Mode::Walk, 10, true);
        }
        assert_eq!(selector.frame_index(), 0);

        selector.advance(Mode::Walk, 10, true);
        assert_eq!(selector.frame_index(), 1);
        assert_eq!(selector.tick(), 10);
    }

    #[test]
    fn test_selector_wraps_at_table_end() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::Continuous, 10);
        selector.frame_index = 4;
        selector.tick = 9;
        selector.previous_mode = Mode::Walk;

        selector.advance(Mode::Walk, 5, true);
        assert_eq!(selector.frame_index(), 0);
    }

    #[test]
    fn test_selector_wraps_when_mode_table_is_shorter() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::Continuous, 10);
        selector.frame_index = 12;
        selector.previous_mode = Mode::Stand;

        // Continuous policy keeps the index across modes unless out of range
        selector.advance(Mode::Walk, 15, true);
        assert_eq!(selector.frame_index(), 12);

        selector.advance(Mode::Jump, 10, false);
        assert_eq!(selector.frame_index(), 0);
    }

    #[test]
    fn test_reset_policy_on_leaving_stand() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::ResetOnModeEntry, 10);
        selector.frame_index = 7;

        selector.advance(Mode::Walk, 10, true);
        assert_eq!(selector.frame_index(), 0);
    }

    #[test]
    fn test_reset_policy_keeps_index_on_jump_from_stand() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::ResetOnModeEntry, 10);
        for _ in 0..30 {
            selector.advance(Mode::Stand, 19, false);
        }
        assert_eq!(selector.frame_index(), 3);

        selector.advance(Mode::Jump, 15, false);
        assert_eq!(selector.frame_index(), 3);
    }

    #[test]
    fn test_reset_policy_on_walking_jump_from_stand() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::ResetOnModeEntry, 10);
        selector.frame_index = 3;

        selector.advance(Mode::Jump, 15, true);
        assert_eq!(selector.frame_index(), 0);
    }

    #[test]
    fn test_reset_policy_on_returning_to_stand() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::ResetOnModeEntry, 10);
        selector.previous_mode = Mode::Jump;
        selector.frame_index = 5;

        selector.advance(Mode::Stand, 19, false);
        assert_eq!(selector.frame_index(), 0);
    }

    #[test]
    fn test_reset_policy_keeps_index_between_moving_modes() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::ResetOnModeEntry, 10);
        selector.previous_mode = Mode::Walk;
        selector.frame_index = 5;

        selector.advance(Mode::Jump, 15, false);
        assert_eq!(selector.frame_index(), 5);
    }

    #[test]
    fn test_zero_ticks_per_frame_is_treated_as_one() {
        let mut selector = AnimationSelector::new(FrameIndexPolicy::Continuous, 0);
        selector.advance(Mode::Stand, 3, false);
        assert_eq!(selector.frame_index(), 1);
    }
}
