//! Serializable trace of emitted draw primitives.
//!
//! Traces make the output of a draw reproducible and easy to diff: the
//! `trace` command of the binary prints one for a single sprite draw.

use serde::Serialize;

use crate::sprites::DrawPrimitive;

/// Flat, serializable copy of a [`DrawPrimitive`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveTrace {
    pub texture: String,
    /// `[x, y, width, height]`
    pub source: [f32; 4],
    /// `[x, y, width, height]`
    pub destination: [f32; 4],
    pub origin: [f32; 2],
    pub rotation: f32,
    /// `[r, g, b, a]`
    pub tint: [u8; 4],
    pub depth: f32,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl From<&DrawPrimitive> for PrimitiveTrace {
    fn from(p: &DrawPrimitive) -> Self {
        Self {
            texture: p.texture.key().to_string(),
            source: [p.source.x, p.source.y, p.source.width, p.source.height],
            destination: [
                p.destination.x,
                p.destination.y,
                p.destination.width,
                p.destination.height,
            ],
            origin: [p.origin.x, p.origin.y],
            rotation: p.rotation,
            tint: [p.tint.r, p.tint.g, p.tint.b, p.tint.a],
            depth: p.depth,
            flip_h: p.effects.flip_h,
            flip_v: p.effects.flip_v,
        }
    }
}

/// Pretty-printed JSON array of the traces of `primitives`.
pub fn to_json(primitives: &[DrawPrimitive]) -> Result<String, String> {
    let traces: Vec<PrimitiveTrace> = primitives.iter().map(PrimitiveTrace::from).collect();
    serde_json::to_string_pretty(&traces).map_err(|e| format!("Failed to serialize trace: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::{SpriteSurface, SpriteTransform, TextureHandle, TextureSprite};
    use raylib::prelude::Vector2;

    #[test]
    fn test_trace_copies_fields() {
        let sprite = TextureSprite::new(TextureHandle::new("hero", 64, 32));
        let mut out = Vec::new();
        sprite
            .draw(
                &mut out,
                Vector2 { x: 0.5, y: 0.5 },
                &SpriteTransform::at(1.0, 2.0).with_scale(-1.0, 1.0).with_depth(3.0),
                true,
            )
            .unwrap();

        let trace = PrimitiveTrace::from(&out[0]);
        assert_eq!(trace.texture, "hero");
        assert_eq!(trace.source, [0.0, 0.0, 64.0, 32.0]);
        assert_eq!(trace.destination, [1.0, 2.0, 64.0, 32.0]);
        assert_eq!(trace.origin, [32.0, 16.0]);
        assert_eq!(trace.tint, [255, 255, 255, 255]);
        assert_eq!(trace.depth, 3.0);
        assert!(trace.flip_h);
        assert!(!trace.flip_v);
    }

    #[test]
    fn test_json_is_an_array_in_emission_order() {
        let sprite = TextureSprite::new(TextureHandle::new("tile", 10, 10));
        let mut out = Vec::new();
        sprite
            .draw(
                &mut out,
                Vector2 { x: 0.0, y: 0.0 },
                &SpriteTransform::default().with_scale(2.5, 0.5),
                false,
            )
            .unwrap();

        let json = to_json(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["destination"][0], 10.0);
        assert_eq!(items[2]["destination"][2], 5.0);
        assert_eq!(items[0]["texture"], "tile");
    }
}
