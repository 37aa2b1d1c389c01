//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. Updated each frame to
//! handle window resizing, and used by the render pass to skip primitives
//! that fall completely outside the window.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Whether the axis-aligned box `min..max` overlaps the window.
    pub fn overlaps(&self, min: Vector2, max: Vector2) -> bool {
        !(max.x < 0.0 || min.x > self.w as f32 || max.y < 0.0 || min.y > self.h as f32)
    }
}
