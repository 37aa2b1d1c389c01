//! Per-frame timing.
//!
//! Written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) and read by
//! the animation systems.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    /// Multiplier applied to every frame delta; `0` pauses animation.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
