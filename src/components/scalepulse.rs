//! Periodic scale and spin animation.
//!
//! Drives the [`Scale`](crate::components::scale::Scale) and
//! [`Rotation`](crate::components::rotation::Rotation) of an entity from
//! elapsed world time so the difference between stretched and tiled sprites
//! is visible while the scale sweeps through fractional values.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct ScalePulse {
    /// Scale at the middle of the oscillation. Signs are kept, so a negative
    /// base stays flipped.
    pub base: Vector2,
    /// Peak deviation added to the magnitude of `base`.
    pub amplitude: f32,
    /// Oscillation frequency in radians per second.
    pub speed: f32,
    /// Rotation speed in radians per second.
    pub spin: f32,
}

impl ScalePulse {
    pub fn new(bx: f32, by: f32, amplitude: f32, speed: f32) -> Self {
        Self {
            base: Vector2 { x: bx, y: by },
            amplitude,
            speed,
            spin: 0.0,
        }
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Scale at `elapsed` seconds.
    pub fn scale_at(&self, elapsed: f32) -> Vector2 {
        let offset = self.amplitude * (elapsed * self.speed).sin();
        Vector2 {
            x: self.base.x.signum() * (self.base.x.abs() + offset).max(0.0),
            y: self.base.y.signum() * (self.base.y.abs() + offset).max(0.0),
        }
    }

    /// Rotation at `elapsed` seconds.
    pub fn rotation_at(&self, elapsed: f32) -> f32 {
        self.spin * elapsed
    }
}
