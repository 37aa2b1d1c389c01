//! 2D scale component.
//!
//! A negative component mirrors the sprite on that axis.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Per-axis size multiplier applied around the sprite pivot.
#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub scale: Vector2,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vector2 { x: sx, y: sy },
        }
    }
}

/// Identity scale `(1, 1)`: the sprite draws at its intrinsic size.
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
