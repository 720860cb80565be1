// Engine modules: assets, input, rendering seam and loop timing

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
