//! Batched draw sink for one frame.
//!
//! Sprites write their primitives into the [`DrawBatch`] during the frame;
//! the render pass drains it in depth order and submits each primitive to
//! the graphics device.

use bevy_ecs::prelude::Resource;

use crate::sprites::{DrawPrimitive, DrawSink};

/// Append-only list of primitives collected during a frame.
#[derive(Resource, Debug, Default)]
pub struct DrawBatch {
    primitives: Vec<DrawPrimitive>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives in emission order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Take every primitive, sorted by ascending depth.
    ///
    /// The sort is stable, so primitives with equal depth keep emission order.
    pub fn drain_sorted(&mut self) -> Vec<DrawPrimitive> {
        let mut primitives = std::mem::take(&mut self.primitives);
        primitives.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        primitives
    }
}

impl DrawSink for DrawBatch {
    fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }
}
