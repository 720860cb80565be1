// Game session: owns the characters and drives one tick per host frame

use glam::Vec2;
use log::info;

use crate::engine::assets::SpriteAtlas;
use crate::engine::game_loop::GameLoop;
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::Renderer;

use super::characters::{
    AnimationError, Character, CharacterId, MotionConfig, SpriteSheetDefinition,
};

/// A running session: characters in insertion order plus the render target
pub struct Game<R: Renderer> {
    characters: Vec<Character>,
    renderer: R,
    viewport: Vec2,
    game_loop: GameLoop,
    next_id: CharacterId,
}

impl<R: Renderer> Game<R> {
    pub fn new(renderer: R, width: f32, height: f32) -> Self {
        Self {
            characters: Vec::new(),
            renderer,
            viewport: Vec2::new(width, height),
            game_loop: GameLoop::new(),
            next_id: 0,
        }
    }

    /// Create a character on the floor at the left edge and add it
    pub fn spawn_character(
        &mut self,
        name: &str,
        atlas: SpriteAtlas,
        sheet: &SpriteSheetDefinition,
        config: MotionConfig,
    ) -> Result<CharacterId, AnimationError> {
        let id = self.next_id;
        let character = Character::new(
            id,
            name,
            atlas,
            sheet,
            config,
            self.viewport.x,
            self.viewport.y,
        )?;
        self.next_id += 1;

        info!("Spawned character {} '{}'", id, name);
        self.characters.push(character);
        Ok(id)
    }

    /// One host frame at `timestamp` (ms): update unless paused, then render.
    ///
    /// Characters see the loop's unpaused clock, so a pause does not count
    /// towards their timers. Returns whether the characters were updated.
    pub fn frame(&mut self, timestamp: f64, input: &InputSnapshot) -> bool {
        let updated = match self.game_loop.begin_frame(timestamp) {
            Some(dt) => {
                let now = self.game_loop.game_time();
                self.update(dt, now, input);
                true
            }
            None => false,
        };
        self.render();
        updated
    }

    /// Update every character in insertion order with the same snapshot
    pub fn update(&mut self, dt: f32, timestamp: f64, input: &InputSnapshot) {
        for character in &mut self.characters {
            character.update(dt, timestamp, input);
        }
    }

    /// Clear the viewport and draw every character
    pub fn render(&mut self) {
        self.renderer.clear(self.viewport.x, self.viewport.y);
        for character in &self.characters {
            if let Some(command) = character.draw_command() {
                self.renderer.draw(character.atlas(), &command);
            }
        }
    }

    /// New viewport size for the game and every character
    pub fn resize(&mut self, width: f32, height: f32) {
        info!("Viewport resized to {}x{}", width, height);
        self.viewport = Vec2::new(width, height);
        for character in &mut self.characters {
            character.resize(width, height);
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn game_loop(&self) -> &GameLoop {
        &self.game_loop
    }

    pub fn game_loop_mut(&mut self) -> &mut GameLoop {
        &mut self.game_loop
    }
}
