use bevy_ecs::prelude::Component;

/// Rotation angle in radians; positive turns +x toward +y (y-down screen
/// space).
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub radians: f32,
}

impl Rotation {
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }
}
