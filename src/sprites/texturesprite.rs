//! Sprite surface backed by a whole texture.

use raylib::prelude::{Rectangle, Vector2};

use crate::error::{Result, SpriteError};
use crate::sprites::tiling;
use crate::sprites::{DrawSink, SpriteSurface, SpriteTransform, TextureHandle};

/// A drawable wrapper around one texture.
#[derive(Clone, Debug, Default)]
pub struct TextureSprite {
    texture: Option<TextureHandle>,
}

impl TextureSprite {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
        }
    }

    /// A sprite with no texture yet. Drawing it fails until one is set.
    pub fn unbound() -> Self {
        Self::default()
    }

    fn bound(&self) -> Result<&TextureHandle> {
        self.texture.as_ref().ok_or(SpriteError::UnboundTexture)
    }
}

impl SpriteSurface for TextureSprite {
    fn width(&self) -> Result<f32> {
        Ok(self.bound()?.width() as f32)
    }

    fn height(&self) -> Result<f32> {
        Ok(self.bound()?.height() as f32)
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
        let region = Rectangle {
            x: 0.0,
            y: 0.0,
            width: texture.width() as f32,
            height: texture.height() as f32,
        };

        for primitive in tiling::plan(texture, region, pivot, transform, stretch_out)? {
            sink.push(primitive);
        }
        Ok(())
    }
}
