//! Sprite rendering component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::sprites::SpriteSurface;

/// A drawable surface together with how it is anchored and scaled.
///
/// `pivot` is a fraction of the surface size selecting the point placed at
/// the entity's [`MapPosition`](crate::components::mapposition::MapPosition)
/// and used as the rotation center. `stretch_out` picks between stretching
/// the surface as one quad and tiling it without deformation when scaled.
#[derive(Component)]
pub struct Sprite {
    pub surface: Box<dyn SpriteSurface + Send + Sync>,
    pub pivot: Vector2,
    pub stretch_out: bool,
}

impl Sprite {
    /// Sprite anchored at its top-left corner that stretches when scaled.
    pub fn new(surface: impl SpriteSurface + Send + Sync + 'static) -> Self {
        Self {
            surface: Box::new(surface),
            pivot: Vector2 { x: 0.0, y: 0.0 },
            stretch_out: true,
        }
    }

    pub fn with_pivot(mut self, px: f32, py: f32) -> Self {
        self.pivot = Vector2 { x: px, y: py };
        self
    }

    pub fn with_stretch_out(mut self, stretch_out: bool) -> Self {
        self.stretch_out = stretch_out;
        self
    }
}
