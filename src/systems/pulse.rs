//! Scale pulse system.
//!
//! Applies [`ScalePulse`] animations to [`Scale`] and, when present,
//! [`Rotation`] using the elapsed time from [`WorldTime`].

use bevy_ecs::prelude::*;

use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::scalepulse::ScalePulse;
use crate::resources::worldtime::WorldTime;

pub fn scale_pulse_system(
    time: Res<WorldTime>,
    mut query: Query<(&ScalePulse, &mut Scale, Option<&mut Rotation>)>,
) {
    for (pulse, mut scale, rotation) in query.iter_mut() {
        scale.scale = pulse.scale_at(time.elapsed);
        if let Some(mut rotation) = rotation {
            rotation.radians = pulse.rotation_at(time.elapsed);
        }
    }
}
