//! Depth component for render ordering.
//!
//! The [`Depth`] component is the draw-order key carried by every primitive
//! a sprite emits. The draw batch is flushed in ascending depth, so entities
//! with higher values are drawn on top of those with lower values.

use bevy_ecs::prelude::Component;

/// Rendering order key for 2D drawing.
///
/// Higher values are drawn later (on top). Ties keep emission order.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Depth(pub f32);
