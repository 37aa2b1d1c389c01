//! Draw primitives and the sink they are written into.
//!
//! A [`DrawPrimitive`] is the atomic output of the sprite renderer: one
//! textured rectangle with its own source region, placement, origin,
//! rotation, tint, depth and flip flags. Primitives are consumed by a
//! [`DrawSink`] right after being emitted and are never persisted.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::sprites::TextureHandle;

/// Per-axis mirroring resolved from the sign of the scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteEffects {
    pub flip_h: bool,
    pub flip_v: bool,
}

impl SpriteEffects {
    /// True when neither axis is mirrored.
    pub fn is_none(&self) -> bool {
        !self.flip_h && !self.flip_v
    }
}

/// One rectangle draw call.
///
/// `destination.x`/`destination.y` is the world placement of `origin`.
/// `origin` is expressed in texture pixels, relative to the top-left of the
/// sampled region and already mirrored for flipped axes. `rotation` is in
/// radians; positive turns +x toward +y (y-down screen space).
#[derive(Clone, Debug)]
pub struct DrawPrimitive {
    pub texture: TextureHandle,
    pub source: Rectangle,
    pub destination: Rectangle,
    pub origin: Vector2,
    pub rotation: f32,
    pub tint: Color,
    pub depth: f32,
    pub effects: SpriteEffects,
}

impl DrawPrimitive {
    /// A primitive covering no area. Still valid output, draws nothing.
    pub fn is_empty(&self) -> bool {
        self.destination.width <= 0.0 || self.destination.height <= 0.0
    }

    /// `origin` scaled from texture pixels into destination space.
    pub fn destination_origin(&self) -> Vector2 {
        let ratio = |dest: f32, src: f32| if src != 0.0 { dest / src } else { 0.0 };
        Vector2 {
            x: self.origin.x * ratio(self.destination.width, self.source.width),
            y: self.origin.y * ratio(self.destination.height, self.source.height),
        }
    }

    /// Axis-aligned world bounds `(min, max)` of the rotated quad.
    pub fn world_bounds(&self) -> (Vector2, Vector2) {
        let origin = self.destination_origin();
        let (sin, cos) = self.rotation.sin_cos();
        let (w, h) = (self.destination.width, self.destination.height);

        let mut min = Vector2 {
            x: f32::INFINITY,
            y: f32::INFINITY,
        };
        let mut max = Vector2 {
            x: f32::NEG_INFINITY,
            y: f32::NEG_INFINITY,
        };
        for (cx, cy) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
            let lx = cx - origin.x;
            let ly = cy - origin.y;
            let x = self.destination.x + lx * cos - ly * sin;
            let y = self.destination.y + lx * sin + ly * cos;
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
        }
        (min, max)
    }
}

/// Write-only accumulator of draw primitives for one frame.
pub trait DrawSink {
    fn push(&mut self, primitive: DrawPrimitive);
}

impl DrawSink for Vec<DrawPrimitive> {
    fn push(&mut self, primitive: DrawPrimitive) {
        Vec::push(self, primitive);
    }
}
