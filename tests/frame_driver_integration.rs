//! Frame driver integration tests.
//!
//! Drive the ECS systems the way the main loop does, without a window, and
//! inspect what ends up in the draw batch.

use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

use spritetile::components::depth::Depth;
use spritetile::components::mapposition::MapPosition;
use spritetile::components::rotation::Rotation;
use spritetile::components::scale::Scale;
use spritetile::components::scalepulse::ScalePulse;
use spritetile::components::sprite::Sprite;
use spritetile::components::tint::Tint;
use spritetile::game;
use spritetile::resources::drawbatch::DrawBatch;
use spritetile::resources::renderconfig::RenderConfig;
use spritetile::resources::worldtime::WorldTime;
use spritetile::sprites::{AtlasSprite, TextureHandle, TextureSprite};
use spritetile::systems::pulse::scale_pulse_system;
use spritetile::systems::render::{collect_sprites, submission};
use spritetile::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(DrawBatch::new());
    world
}

fn tick_collect(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collect_sprites);
    schedule.run(world);
}

fn tick_frame(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((scale_pulse_system, collect_sprites).chain());
    schedule.run(world);
}

fn texture() -> TextureHandle {
    TextureHandle::new("tex", 64, 32)
}

#[test]
fn stretched_sprite_emits_one_primitive() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())).with_pivot(0.5, 0.5),
        MapPosition::new(100.0, 50.0),
        Scale::new(2.0, 3.0),
    ));

    tick_collect(&mut world);

    let batch = world.resource::<DrawBatch>();
    assert_eq!(batch.len(), 1);
    let p = &batch.primitives()[0];
    assert_eq!(p.destination.x, 100.0);
    assert_eq!(p.destination.y, 50.0);
    assert_eq!(p.destination.width, 128.0);
    assert_eq!(p.destination.height, 96.0);
    assert_eq!(p.origin.x, 32.0);
    assert_eq!(p.origin.y, 16.0);
}

#[test]
fn tiled_sprite_emits_grid() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())).with_stretch_out(false),
        MapPosition::new(0.0, 0.0),
        Scale::new(2.3, 0.5),
    ));

    tick_collect(&mut world);

    let batch = world.resource::<DrawBatch>();
    assert_eq!(batch.len(), 3);
    let widths: Vec<f32> = batch.primitives().iter().map(|p| p.destination.width).collect();
    assert_eq!(widths[0], 64.0);
    assert_eq!(widths[1], 64.0);
    assert!(approx_eq(widths[2], 64.0 * 0.3));
    for p in batch.primitives() {
        assert_eq!(p.destination.height, 16.0);
    }
}

#[test]
fn missing_optional_components_use_identity() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())),
        MapPosition::new(5.0, 6.0),
    ));

    tick_collect(&mut world);

    let batch = world.resource::<DrawBatch>();
    let p = &batch.primitives()[0];
    assert_eq!(p.destination.width, 64.0);
    assert_eq!(p.destination.height, 32.0);
    assert_eq!(p.rotation, 0.0);
    assert_eq!(p.depth, 0.0);
    assert_eq!(p.tint.a, 255);
}

#[test]
fn failing_sprite_is_skipped_and_others_still_draw() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::unbound()),
        MapPosition::new(0.0, 0.0),
    ));
    world.spawn((
        Sprite::new(TextureSprite::new(texture())),
        MapPosition::new(0.0, 0.0),
        Rotation { radians: f32::NAN },
    ));
    world.spawn((
        Sprite::new(TextureSprite::new(TextureHandle::new("good", 8, 8))),
        MapPosition::new(1.0, 1.0),
    ));

    tick_collect(&mut world);

    let batch = world.resource::<DrawBatch>();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.primitives()[0].texture.key(), "good");
}

#[test]
fn batch_drains_in_depth_order() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(TextureHandle::new("front", 8, 8))),
        MapPosition::new(0.0, 0.0),
        Depth(10.0),
    ));
    world.spawn((
        Sprite::new(TextureSprite::new(TextureHandle::new("back", 8, 8))),
        MapPosition::new(0.0, 0.0),
        Depth(-10.0),
    ));
    world.spawn((
        Sprite::new(TextureSprite::new(TextureHandle::new("middle", 8, 8)))
            .with_stretch_out(false),
        MapPosition::new(0.0, 0.0),
        Scale::new(1.5, 1.0),
        Depth(0.0),
    ));

    tick_collect(&mut world);

    let drained = world.resource_mut::<DrawBatch>().drain_sorted();
    let keys: Vec<&str> = drained.iter().map(|p| p.texture.key()).collect();
    assert_eq!(keys.first(), Some(&"back"));
    assert_eq!(keys.last(), Some(&"front"));
    assert!(keys[1..keys.len() - 1].iter().all(|k| *k == "middle"));
    assert!(world.resource::<DrawBatch>().is_empty());
}

#[test]
fn tint_and_alpha_reach_primitives() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())),
        MapPosition::new(0.0, 0.0),
        Tint::new(10, 20, 30, 255).with_alpha(0.0),
    ));

    tick_collect(&mut world);

    let p = &world.resource::<DrawBatch>().primitives()[0];
    assert_eq!(p.tint.r, 10);
    assert_eq!(p.tint.g, 20);
    assert_eq!(p.tint.b, 30);
    assert_eq!(p.tint.a, 0);
}

#[test]
fn flipped_sprite_submits_negative_source() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())).with_pivot(0.25, 0.0),
        MapPosition::new(0.0, 0.0),
        Scale::new(-1.0, 1.0),
    ));

    tick_collect(&mut world);

    let p = &world.resource::<DrawBatch>().primitives()[0];
    assert!(p.effects.flip_h);
    assert_eq!(p.origin.x, 48.0);
    let call = submission(p).expect("visible primitive");
    assert_eq!(call.source.width, -64.0);
    assert_eq!(call.origin.x, 48.0);
}

#[test]
fn atlas_region_sprite_samples_region() {
    let mut world = make_world();
    let region = Rectangle {
        x: 16.0,
        y: 8.0,
        width: 16.0,
        height: 8.0,
    };
    world.spawn((
        Sprite::new(AtlasSprite::new(texture(), region)).with_stretch_out(false),
        MapPosition::new(0.0, 0.0),
        Scale::new(1.5, 1.5),
    ));

    tick_collect(&mut world);

    let batch = world.resource::<DrawBatch>();
    assert_eq!(batch.len(), 4);
    for p in batch.primitives() {
        assert_eq!(p.source.x, 16.0);
        assert_eq!(p.source.y, 8.0);
    }
}

#[test]
fn pulse_animates_scale_and_rotation() {
    let mut world = make_world();
    let entity = world
        .spawn((
            Sprite::new(TextureSprite::new(texture())).with_stretch_out(false),
            MapPosition::new(0.0, 0.0),
            Scale::default(),
            Rotation::default(),
            ScalePulse::new(2.0, 1.0, 0.5, std::f32::consts::PI).with_spin(1.0),
        ))
        .id();

    // half a second at PI rad/s puts the oscillation at its peak
    tick_frame(&mut world, 0.5);

    let scale = world.get::<Scale>(entity).unwrap().scale;
    assert!(approx_eq(scale.x, 2.5));
    assert!(approx_eq(scale.y, 1.5));
    assert!(approx_eq(world.get::<Rotation>(entity).unwrap().radians, 0.5));

    // 3 columns x 2 rows for a 2.5 x 1.5 scale
    assert_eq!(world.resource::<DrawBatch>().len(), 6);
}

#[test]
fn demo_scene_collects_every_sprite() {
    let mut world = make_world();
    let config = RenderConfig::new();
    game::setup_scene(&mut world, texture(), &config);

    let sprite_count = world.query::<&Sprite>().iter(&world).count();
    assert!(sprite_count > 4);

    tick_frame(&mut world, 0.016);

    let batch = world.resource::<DrawBatch>();
    assert!(batch.len() >= sprite_count);
    for p in batch.primitives() {
        assert_eq!(p.texture.key(), "tex");
        assert!(p.destination.x.is_finite() && p.destination.y.is_finite());
    }
}

#[test]
fn rotated_grid_keeps_tiles_rigid() {
    let mut world = make_world();
    world.spawn((
        Sprite::new(TextureSprite::new(texture())).with_stretch_out(false),
        MapPosition::new(10.0, 10.0),
        Scale::new(2.5, 1.0),
        Rotation::from_degrees(90.0),
    ));

    tick_collect(&mut world);

    let anchors: Vec<Vector2> = world
        .resource::<DrawBatch>()
        .primitives()
        .iter()
        .map(|p| Vector2 {
            x: p.destination.x,
            y: p.destination.y,
        })
        .collect();
    // columns step along +y after a quarter turn
    assert!(approx_eq(anchors[0].x, 10.0) && approx_eq(anchors[0].y, 10.0));
    assert!(approx_eq(anchors[2].x, 10.0) && approx_eq(anchors[2].y, 74.0));
    assert!(approx_eq(anchors[4].x, 10.0) && approx_eq(anchors[4].y, 138.0));
    // rows step along -x
    assert!(approx_eq(anchors[1].x, -22.0) && approx_eq(anchors[1].y, 10.0));
}
