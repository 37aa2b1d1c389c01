//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component modulates the sampled texture color of every
//! primitive a sprite emits. The alpha multiplier fades the sprite without
//! touching the base color, which is handy for fade-in/out effects.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color tint plus alpha multiplier.
///
/// The color resolved for drawing is `color` with its alpha channel scaled by
/// `alpha` (clamped to `[0, 1]`).
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
    pub alpha: f32,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values and a unit alpha multiplier.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
            alpha: 1.0,
        }
    }

    /// Set the alpha multiplier.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Final color sent with each draw primitive.
    pub fn resolve(&self) -> Color {
        let factor = self.alpha.clamp(0.0, 1.0);
        Color::new(
            self.color.r,
            self.color.g,
            self.color.b,
            (self.color.a as f32 * factor).round() as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            alpha: 1.0,
        }
    }
}
