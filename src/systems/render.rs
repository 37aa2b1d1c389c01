//! Sprite collection and submission.
//!
//! Rendering happens in two steps each frame:
//!
//! 1. [`collect_sprites`] asks every sprite entity to draw itself into the
//!    [`DrawBatch`]. A sprite that fails is logged and skipped; the rest of
//!    the frame is unaffected.
//! 2. [`render_pass`] drains the batch in depth order and submits each
//!    primitive through raylib's `draw_texture_pro`, skipping primitives that
//!    cover no area or lie outside the window.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::*;

use crate::components::depth::Depth;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::drawbatch::DrawBatch;
use crate::resources::renderconfig::RenderConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::sprites::{DrawPrimitive, SpriteTransform};

/// Arguments of one `draw_texture_pro` call.
#[derive(Clone, Copy, Debug)]
pub struct Submission {
    /// Sampled region; a negative extent mirrors that axis.
    pub source: Rectangle,
    pub dest: Rectangle,
    /// Origin in destination space.
    pub origin: Vector2,
    /// Degrees; positive turns +x toward +y (y-down screen space).
    pub rotation: f32,
    pub tint: Color,
}

/// Convert a primitive into raylib draw arguments.
///
/// Returns `None` for primitives that would draw nothing.
pub fn submission(primitive: &DrawPrimitive) -> Option<Submission> {
    if primitive.is_empty() || primitive.source.width == 0.0 || primitive.source.height == 0.0 {
        return None;
    }

    let mut source = primitive.source;
    if primitive.effects.flip_h {
        source.width = -source.width;
    }
    if primitive.effects.flip_v {
        source.height = -source.height;
    }

    Some(Submission {
        source,
        dest: primitive.destination,
        origin: primitive.destination_origin(),
        rotation: primitive.rotation.to_degrees(),
        tint: primitive.tint,
    })
}

/// Draw every sprite entity into the frame's [`DrawBatch`].
pub fn collect_sprites(
    query: Query<(
        Entity,
        &Sprite,
        &MapPosition,
        Option<&Scale>,
        Option<&Rotation>,
        Option<&Tint>,
        Option<&Depth>,
    )>,
    mut batch: ResMut<DrawBatch>,
) {
    for (entity, sprite, position, scale, rotation, tint, depth) in query.iter() {
        let transform = SpriteTransform {
            position: position.pos,
            scale: scale.copied().unwrap_or_default().scale,
            rotation: rotation.map_or(0.0, |r| r.radians),
            tint: tint.copied().unwrap_or_default(),
            depth: depth.map_or(0.0, |d| d.0),
        };

        if let Err(e) = sprite
            .surface
            .draw(&mut *batch, sprite.pivot, &transform, sprite.stretch_out)
        {
            warn!("Skipping sprite {:?}: {}", entity, e);
        }
    }
}

/// Submit the collected primitives to raylib, lowest depth first.
///
/// Expects a [`DrawBatch`] resource and a non-send [`TextureStore`].
/// Culling against [`WindowSize`] applies when that resource is present and
/// [`RenderConfig::cull`] is not disabled.
pub fn render_pass(world: &mut World, d: &mut impl RaylibDraw) {
    let primitives = world.resource_mut::<DrawBatch>().drain_sorted();
    let cull = world.get_resource::<RenderConfig>().is_none_or(|c| c.cull);
    let window = world.get_resource::<WindowSize>().copied();
    let textures = world.non_send_resource::<TextureStore>();

    let mut drawn = 0usize;
    for primitive in &primitives {
        if let (true, Some(window)) = (cull, window) {
            let (min, max) = primitive.world_bounds();
            if !window.overlaps(min, max) {
                continue;
            }
        }
        let Some(call) = submission(primitive) else {
            continue;
        };
        let Some(texture) = textures.get(primitive.texture.key()) else {
            warn!("Texture '{}' not found in TextureStore", primitive.texture.key());
            continue;
        };

        d.draw_texture_pro(texture, call.source, call.dest, call.origin, call.rotation, call.tint);
        drawn += 1;
    }

    debug!("Submitted {} of {} primitives", drawn, primitives.len());
}
