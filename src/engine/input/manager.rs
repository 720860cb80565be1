// Input manager - translates host key events into logical action state

use super::action::Action;
use super::config::InputConfig;
use super::state::{InputSnapshot, InputState};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Couples the key bindings with the held-action state they drive
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                // Auto-repeat carries no new information for held state
                ElementState::Pressed if event.repeat => {}
                ElementState::Pressed => {
                    self.handle_key(key_code, true);
                }
                ElementState::Released => {
                    self.handle_key(key_code, false);
                }
            }
        }
    }

    /// Apply a key press or release. Unmapped keys are ignored.
    ///
    /// Returns the action the key is bound to, if any.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<Action> {
        let action = self.config.action_for(key)?;
        if pressed {
            self.state.press(action);
        } else {
            self.state.release(action);
        }
        Some(action)
    }

    /// Take the snapshot for the next tick
    pub fn snapshot(&mut self) -> InputSnapshot {
        self.state.snapshot()
    }

    /// Get the held-action state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Get the key bindings
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Drop all held actions (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
