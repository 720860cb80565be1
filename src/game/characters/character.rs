// Character entity: motion engine, animation and draw projection

use glam::Vec2;
use log::{debug, warn};

use crate::core::math::clamp;
use crate::core::ClampToBounds;
use crate::engine::assets::SpriteAtlas;
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::{project, DrawCommand};

use super::animation::{AnimationError, AnimationSelector, AnimationSet, SpriteSheetDefinition};
use super::config::{Gravity, JumpStyle, MotionConfig};
use super::state::{Direction, Mode};

/// Unique identifier for a character
pub type CharacterId = u32;

/// A keyboard-driven sprite character.
///
/// `position` is the feet anchor: `y` is the line the sprite stands on, and
/// `y == viewport height` is the floor.
#[derive(Debug, Clone)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for logs)
    pub name: String,

    position: Vec2,
    velocity: Vec2,
    mode: Mode,
    direction: Direction,

    // Jump bookkeeping, cleared whenever the character stands on the floor
    has_double_jumped: bool,
    jump_released_while_held: bool,
    fall_start: Option<f64>,

    /// Walkable width and floor line
    viewport: Vec2,

    config: MotionConfig,
    animations: AnimationSet,
    selector: AnimationSelector,
    atlas: SpriteAtlas,
}

impl Character {
    /// Create a character standing at the left end of the floor.
    ///
    /// Fails when a mode the configuration can reach has no frames, or a
    /// frame lies outside `atlas`.
    pub fn new(
        id: CharacterId,
        name: &str,
        atlas: SpriteAtlas,
        sheet: &SpriteSheetDefinition,
        config: MotionConfig,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Self, AnimationError> {
        let animations = AnimationSet::build(sheet, &config.reachable_modes(), Some(&atlas))?;
        let selector = AnimationSelector::new(config.frame_policy, config.ticks_per_frame);

        Ok(Self {
            id,
            name: name.to_string(),
            position: Vec2::new(0.0, viewport_height),
            velocity: Vec2::ZERO,
            mode: Mode::Stand,
            direction: Direction::Right,
            has_double_jumped: false,
            jump_released_while_held: false,
            fall_start: None,
            viewport: Vec2::new(viewport_width, viewport_height),
            config,
            animations,
            selector,
            atlas,
        })
    }

    /// Run one tick: motion first, then animation.
    ///
    /// `dt` is the elapsed time in ms and is clamped to
    /// `[0, config.max_frame_ms]`; `timestamp` (ms) drives the fall timer.
    pub fn update(&mut self, dt: f32, timestamp: f64, input: &InputSnapshot) {
        let dt = self.sanitize_dt(dt);
        self.step_motion(dt, timestamp, input);
        self.animate(input.left || input.right);
    }

    /// Motion engine: integrate one tick of input, gravity and ground contact
    pub fn step_motion(&mut self, dt: f32, timestamp: f64, input: &InputSnapshot) {
        if input.jump_released {
            self.jump_released_while_held = true;
        }

        let on_ground = self.is_on_ground();
        let mut input_movement = Vec2::ZERO;

        if self.config.jump_style == JumpStyle::Impulse && input.up {
            if on_ground {
                input_movement.y -= self.config.jump_impulse;
            } else if self.config.double_jump
                && self.jump_released_while_held
                && !self.has_double_jumped
            {
                self.has_double_jumped = true;
                self.jump_released_while_held = false;
                // Airborne jump restarts from rest, as if from the ground
                self.velocity.y = 0.0;
                input_movement.y -= self.config.jump_impulse;
                debug!("{} double jump at y={:.1}", self.name, self.position.y);
            }
        }

        // Left is evaluated last and wins when both are held
        if input.right {
            input_movement.x = dt * self.config.speed;
            self.direction = Direction::Right;
        }
        if input.left {
            input_movement.x = -dt * self.config.speed;
            self.direction = Direction::Left;
        }

        // No horizontal inertia; vertical velocity accumulates
        self.velocity.x = input_movement.x;
        self.velocity.y += input_movement.y;
        match self.config.gravity {
            Gravity::None => {}
            Gravity::Airborne(g) => {
                if !on_ground {
                    self.velocity.y += g;
                }
            }
            Gravity::Always(g) => self.velocity.y += g,
        }

        if on_ground {
            if self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
            }
            self.has_double_jumped = false;
            self.jump_released_while_held = false;
            self.fall_start = None;
        }

        let mode = self.classify(timestamp, input);
        if mode != self.mode {
            debug!("{} {} -> {}", self.name, self.mode, mode);
        }
        self.mode = mode;

        self.position += self.velocity;
        self.position.clamp_to_bounds(self.viewport.x, self.viewport.y);
    }

    /// Derive the mode for this tick from the fresh velocity
    fn classify(&mut self, timestamp: f64, input: &InputSnapshot) -> Mode {
        if self.config.jump_style == JumpStyle::Pose && input.up {
            return Mode::Jump;
        }

        let mut mode = Mode::from_velocity(self.velocity);

        if self.velocity.y > 0.0 {
            if let Some(timeout) = self.config.fall_timeout_ms {
                match self.fall_start {
                    None => self.fall_start = Some(timestamp),
                    Some(start) if timestamp - start > timeout => mode = Mode::Fall,
                    Some(_) => {}
                }
            }
        } else if self.velocity.y < 0.0 {
            // Each descent is timed on its own
            self.fall_start = None;
        }

        mode
    }

    /// Animation selector: advance the frame index for the final mode
    fn animate(&mut self, moving: bool) {
        let frames = self.animations.table(self.mode).len();
        self.selector.advance(self.mode, frames, moving);
    }

    fn sanitize_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() {
            warn!("{} ignoring non-finite frame time {}", self.name, dt);
            return 0.0;
        }

        let clamped = clamp(dt, 0.0, self.config.max_frame_ms);
        if clamped != dt {
            warn!(
                "{} frame time {:.1} ms clamped to {:.1} ms",
                self.name, dt, clamped
            );
        }
        clamped
    }

    /// Render projector: the draw command for the current frame
    pub fn draw_command(&self) -> Option<DrawCommand> {
        let frame = self
            .animations
            .frame(self.mode, self.selector.frame_index())?;
        Some(project(frame, self.position, self.direction.is_left()))
    }

    /// Update the walkable bounds without touching motion state
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Move the character and stop it (for spawning or respawning)
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.fall_start = None;
    }

    /// Feet at or below the floor line
    pub fn is_on_ground(&self) -> bool {
        self.position.y >= self.viewport.y
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn frame_index(&self) -> usize {
        self.selector.frame_index()
    }

    pub fn has_double_jumped(&self) -> bool {
        self.has_double_jumped
    }

    /// Jump key released since leaving the ground and not yet spent
    pub fn jump_release_armed(&self) -> bool {
        self.jump_released_while_held
    }

    pub fn fall_start(&self) -> Option<f64> {
        self.fall_start
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }
}
