//! Spritetile demo entry point.
//!
//! Opens a raylib window and animates a handful of sprites so stretched and
//! tiled rendering can be compared side by side under changing scale, flips
//! and rotation.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and open the window
//! 2. Generate the checkerboard texture and spawn the demo scene
//! 3. Each frame: advance time, animate, collect sprite primitives into the
//!    draw batch, then submit the batch in depth order
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run -- trace --width 64 --height 32 --scale-x 2.3 --tile
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::{Args, Parser, Subcommand};
use raylib::prelude::*;
use std::path::PathBuf;

use spritetile::game;
use spritetile::resources::drawbatch::DrawBatch;
use spritetile::resources::renderconfig::RenderConfig;
use spritetile::resources::texturestore::TextureStore;
use spritetile::resources::windowsize::WindowSize;
use spritetile::resources::worldtime::WorldTime;
use spritetile::sprites::{SpriteSurface, SpriteTransform, TextureHandle, TextureSprite};
use spritetile::systems::pulse::scale_pulse_system;
use spritetile::systems::render::{collect_sprites, render_pass};
use spritetile::systems::time::update_world_time;
use spritetile::trace;

/// Stretch-or-tile sprite renderer
#[derive(Parser)]
#[command(version, about = "Renders sprites either stretched or as undeformed tiles.")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the draw primitives of a single sprite draw as JSON and exit.
    Trace(TraceArgs),
}

#[derive(Args)]
struct TraceArgs {
    /// Texture width in pixels.
    #[arg(long, default_value_t = 64)]
    width: i32,
    /// Texture height in pixels.
    #[arg(long, default_value_t = 32)]
    height: i32,
    /// Horizontal pivot fraction.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pivot_x: f32,
    /// Vertical pivot fraction.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pivot_y: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,
    /// Horizontal scale; negative flips.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale_x: f32,
    /// Vertical scale; negative flips.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale_y: f32,
    /// Rotation in radians.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotation: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    depth: f32,
    /// Tile instead of stretching when scaled.
    #[arg(long)]
    tile: bool,
}

fn run_trace(args: &TraceArgs) -> Result<String, String> {
    let sprite = TextureSprite::new(TextureHandle::new("trace", args.width, args.height));
    let transform = SpriteTransform::at(args.x, args.y)
        .with_scale(args.scale_x, args.scale_y)
        .with_rotation(args.rotation)
        .with_depth(args.depth);
    let pivot = Vector2 {
        x: args.pivot_x,
        y: args.pivot_y,
    };

    let mut primitives = Vec::new();
    sprite
        .draw(&mut primitives, pivot, &transform, !args.tile)
        .map_err(|e| e.to_string())?;
    trace::to_json(&primitives)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: print a trace and quit (no window needed)
    if let Some(Command::Trace(args)) = &cli.command {
        match run_trace(args) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut config = RenderConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    // Early-exit: write the configuration and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Spritetile")
        .build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    let checker = match game::checkerboard_texture(&mut rl, &thread) {
        Ok(texture) => texture,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let checker = textures.insert(game::CHECKER_KEY, checker);

    // --------------- ECS world + resources ---------------
    // Declared after the raylib handle so textures are unloaded before the window closes.
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(DrawBatch::new());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_non_send_resource(textures);
    game::setup_scene(&mut world, checker, &config);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems((scale_pulse_system, collect_sprites).chain());

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        // Update window size each frame (may change due to resize)
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = rl.get_screen_width();
            window_size.h = rl.get_screen_height();
        }

        update.run(&mut world);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        render_pass(&mut world, &mut d);
        d.draw_fps(10, 10);
    }
}
