//! Keyboard-driven 2D sprite character.
//!
//! Converts held keys and elapsed time into character motion (walking,
//! jumping, double jumping, gravity, fall timing) and selects the sprite frame
//! to draw each tick. Drawing itself is left to a [`engine::renderer::Renderer`].
//!
//! One tick runs, for every character in insertion order:
//! input snapshot → motion engine → animation selector → render projector.

pub mod core;
pub mod engine;
pub mod game;
