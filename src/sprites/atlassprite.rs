//! Sprite surface backed by a rectangular region of a texture atlas.
//!
//! The region plays the role of the whole texture: its size is the intrinsic
//! size, pivots are fractions of the region, and tiles sample from the
//! region's top-left corner.

use raylib::prelude::{Rectangle, Vector2};

use crate::error::{Result, SpriteError};
use crate::sprites::tiling;
use crate::sprites::{DrawSink, SpriteSurface, SpriteTransform, TextureHandle};

#[derive(Clone, Debug)]
pub struct AtlasSprite {
    texture: Option<TextureHandle>,
    region: Rectangle,
}

impl AtlasSprite {
    pub fn new(texture: TextureHandle, region: Rectangle) -> Self {
        Self {
            texture: Some(texture),
            region,
        }
    }

    pub fn unbound(region: Rectangle) -> Self {
        Self {
            texture: None,
            region,
        }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    pub fn set_region(&mut self, region: Rectangle) {
        self.region = region;
    }

    fn bound(&self) -> Result<&TextureHandle> {
        self.texture.as_ref().ok_or(SpriteError::UnboundTexture)
    }

    /// The region must be non-empty and lie inside the texture.
    fn checked_region(&self, texture: &TextureHandle) -> Result<Rectangle> {
        let r = self.region;
        let inside = r.x >= 0.0
            && r.y >= 0.0
            && r.x + r.width <= texture.width() as f32
            && r.y + r.height <= texture.height() as f32;
        if r.width > 0.0 && r.height > 0.0 && inside {
            Ok(r)
        } else {
            Err(SpriteError::InvalidSurface {
                width: r.width,
                height: r.height,
            })
        }
    }
}

impl SpriteSurface for AtlasSprite {
    fn width(&self) -> Result<f32> {
        self.bound()?;
        Ok(self.region.width)
    }

    fn height(&self) -> Result<f32> {
        self.bound()?;
        Ok(self.region.height)
    }

    fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }

    fn draw(
        &self,
        sink: &mut dyn DrawSink,
        pivot: Vector2,
        transform: &SpriteTransform,
        stretch_out: bool,
    ) -> Result<()> {
        let texture = self.bound()?;
        let region = self.checked_region(texture)?;

        for primitive in tiling::plan(texture, region, pivot, transform, stretch_out)? {
            sink.push(primitive);
        }
        Ok(())
    }
}
