// Input handling system
//
// Turns host keyboard events into logical action state for the characters.
//
// ## Architecture
//
// - `action`: Logical actions and the default arrow + WASD bindings
// - `config`: Key binding configuration and remapping
// - `state`: Held-action state, the jump-release edge and per-tick snapshots
// - `manager`: Adapter from winit key events to the state
//
// ## Usage Example
//
// ```rust
// use sprite_kinematics::engine::input::InputManager;
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per tick, hand the characters an immutable snapshot
// let snapshot = input.snapshot();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

pub use action::Action;
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::{InputSnapshot, InputState};
