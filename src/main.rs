use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use sprite_kinematics::engine::assets::SpriteAtlas;
use sprite_kinematics::engine::input::{Action, InputManager};
use sprite_kinematics::engine::renderer::LogRenderer;
use sprite_kinematics::game::characters::{santa_sheet, MotionConfig, Variant};
use sprite_kinematics::game::Game;

/// Walk and jump a sprite character around the window.
///
/// Arrows or WASD move, Up/W jumps, Escape pauses.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Motion model: walker, acrobat or hopper
    #[arg(long, default_value_t = Variant::Acrobat)]
    variant: Variant,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Sprite atlas image
    #[arg(long, value_name = "PATH", default_value = "sprites.png")]
    atlas: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting sprite-kinematics ({} variant)...", cli.variant);

    let atlas = SpriteAtlas::load(&cli.atlas)
        .with_context(|| format!("Failed to load sprite atlas {}", cli.atlas.display()))?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sprite Kinematics")
        .with_inner_size(winit::dpi::LogicalSize::new(cli.width, cli.height))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut game = Game::new(LogRenderer::new(), size.width as f32, size.height as f32);
    game.spawn_character(
        "santa",
        atlas,
        &santa_sheet(),
        MotionConfig::for_variant(cli.variant),
    )
    .context("Invalid sprite sheet")?;

    let mut input = InputManager::default();
    for action in Action::ALL {
        info!("{:?}: {:?}", action, input.config().keys_for(action));
    }
    let start = Instant::now();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    game.resize(physical_size.width as f32, physical_size.height as f32);
                }
                WindowEvent::Focused(false) => {
                    // Key-up events are lost while unfocused
                    input.reset();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    let escape = event.physical_key == PhysicalKey::Code(KeyCode::Escape);
                    if escape && event.state == ElementState::Pressed && !event.repeat {
                        game.game_loop_mut().toggle_pause();
                    } else {
                        input.process_keyboard_event(&event);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let timestamp = start.elapsed().as_secs_f64() * 1000.0;
                    let snapshot = input.snapshot();
                    game.frame(timestamp, &snapshot);

                    if game.game_loop().frame_count() % 600 == 0 {
                        debug!("{:.1} fps", game.game_loop().fps());
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
