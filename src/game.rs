//! Demo scene.
//!
//! Builds a procedural checkerboard texture and spawns sprites that show the
//! difference between stretched and tiled rendering under non-uniform scale,
//! flips and rotation.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::depth::Depth;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::scalepulse::ScalePulse;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::renderconfig::RenderConfig;
use crate::sprites::{AtlasSprite, TextureHandle, TextureSprite};

/// Key of the demo texture in the texture store.
pub const CHECKER_KEY: &str = "checker";
const CHECKER_WIDTH: i32 = 64;
const CHECKER_HEIGHT: i32 = 32;
const SCATTER_COUNT: usize = 12;
const SCATTER_SEED: u64 = 0x5eed;

/// Helper function to create the checkerboard texture used by the demo.
pub fn checkerboard_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<Texture2D, String> {
    let image = Image::gen_image_checked(
        CHECKER_WIDTH,
        CHECKER_HEIGHT,
        8,
        8,
        Color::MAROON,
        Color::GOLD,
    );
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to create checkerboard texture: {}", e))
}

/// Spawn the demo sprites.
///
/// The top row pulses the same texture stretched (left) and tiled (right);
/// the bottom row shows a flipped tiled sprite and a tiled atlas region, both
/// spinning. A seeded scatter of small static sprites uses the configured
/// stretch policy.
pub fn setup_scene(world: &mut World, texture: TextureHandle, config: &RenderConfig) {
    let (width, height) = config.window_size();
    let (w, h) = (width as f32, height as f32);

    world.spawn((
        Sprite::new(TextureSprite::new(texture.clone())).with_pivot(0.5, 0.5),
        MapPosition::new(w * 0.25, h * 0.3),
        Scale::default(),
        ScalePulse::new(2.0, 1.5, 0.75, 0.8),
        Depth(1.0),
    ));

    world.spawn((
        Sprite::new(TextureSprite::new(texture.clone()))
            .with_pivot(0.5, 0.5)
            .with_stretch_out(false),
        MapPosition::new(w * 0.65, h * 0.3),
        Scale::default(),
        ScalePulse::new(2.0, 1.5, 0.75, 0.8),
        Depth(1.0),
    ));

    world.spawn((
        Sprite::new(TextureSprite::new(texture.clone()))
            .with_pivot(0.0, 0.5)
            .with_stretch_out(false),
        MapPosition::new(w * 0.25, h * 0.7),
        Scale::default(),
        Rotation::default(),
        ScalePulse::new(-1.5, 1.25, 0.25, 1.3).with_spin(0.5),
        Tint::new(200, 255, 200, 255),
        Depth(2.0),
    ));

    let quarter = Rectangle {
        x: 0.0,
        y: 0.0,
        width: (texture.width() / 2) as f32,
        height: (texture.height() / 2) as f32,
    };
    world.spawn((
        Sprite::new(AtlasSprite::new(texture.clone(), quarter))
            .with_pivot(0.5, 0.5)
            .with_stretch_out(false),
        MapPosition::new(w * 0.7, h * 0.7),
        Scale::default(),
        Rotation::default(),
        ScalePulse::new(3.5, 2.5, 1.0, 0.6).with_spin(-0.8),
        Depth(2.0),
    ));

    let mut rng = fastrand::Rng::with_seed(SCATTER_SEED);
    for _ in 0..SCATTER_COUNT {
        world.spawn((
            Sprite::new(TextureSprite::new(texture.clone()))
                .with_pivot(0.5, 0.5)
                .with_stretch_out(config.stretch_out),
            MapPosition::new(rng.f32() * w, rng.f32() * h),
            Scale::new(0.25 + rng.f32() * 0.75, 0.25 + rng.f32() * 0.75),
            Rotation::from_degrees(rng.f32() * 360.0),
            Tint::new(rng.u8(128..), rng.u8(128..), rng.u8(128..), 255).with_alpha(0.6),
            Depth(rng.f32() * 0.5),
        ));
    }

    info!(
        "Demo scene ready: {} sprites using texture '{}'",
        4 + SCATTER_COUNT,
        texture.key()
    );
}
