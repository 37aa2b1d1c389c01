//! Drawable sprite surfaces.
//!
//! A sprite surface is anything that can report an intrinsic pixel size,
//! hold a texture handle and render itself into a [`DrawSink`] given a full
//! transform. The geometry lives in [`tiling`]; the surfaces only pick the
//! texture region that the algorithm samples from.
//!
//! Submodules overview:
//! - [`primitive`] – draw primitives, flip flags and the sink contract
//! - [`tiling`] – the stretch-or-tile transform algorithm
//! - [`texturesprite`] – a surface backed by a whole texture
//! - [`atlassprite`] – a surface backed by a region of a texture atlas

pub mod atlassprite;
pub mod primitive;
pub mod texturesprite;
pub mod tiling;

use std::sync::Arc;

use raylib::prelude::Vector2;

use crate::components::tint::Tint;
use crate::error::Result;

pub use atlassprite::AtlasSprite;
pub use primitive::{DrawPrimitive, DrawSink, SpriteEffects};
pub use texturesprite::TextureSprite;

/// Opaque reference to a GPU-resident texture.
///
/// The pixel data is owned by the [`TextureStore`]; a handle only carries the
/// lookup key and the pixel size, so cloning it is cheap.
///
/// [`TextureStore`]: crate::resources::texturestore::TextureStore
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    key: Arc<str>,
    width: i32,
    height: i32,
}

impl TextureHandle {
    pub fn new(key: impl Into<Arc<str>>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// Key of the texture in the texture store.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Pixel width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// World transform of one sprite draw.
///
/// The sign of each `scale` component encodes a flip on that axis, its
/// magnitude the size multiplier. `rotation` is in radians.
#[derive(Clone, Copy, Debug)]
pub struct SpriteTransform {
    pub position: Vector2,
    pub scale: Vector2,
    pub rotation: f32,
    pub tint: Tint,
    pub depth: f32,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            scale: Vector2 { x: 1.0, y: 1.0 },
            rotation: 0.0,
            tint: Tint::default(),
            depth: 0.0,
        }
    }
}

impl SpriteTransform {
    /// Identity transform placed at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vector2 { x: sx, y: sy };
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}

/// Capability contract shared by every drawable surface.
///
/// Implementors only decide which texture region backs the surface; the
/// placement math is shared through [`tiling::plan`].
pub trait SpriteSurface {
    /// Intrinsic pixel width. Fails when no texture is bound.
    fn width(&self) -> Result<f32>;

    /// Intrinsic pixel height. Fails when no texture is bound.
    fn height(&self) -> Result<f32>;

    /// The bound texture, if any.
    fn texture(&self) -> Option<&TextureHandle>;

    /// Bind a new texture. Transforms passed to earlier draws are unaffected.
    fn set_texture(&mut self, texture: TextureHandle);

    /// Emit the primitives reproducing this surface under `transform`.
    ///
    /// With `stretch_out` the whole surface is stretched as one quad;
    /// otherwise a scaled surface is covered by undeformed tiles. On error
    /// nothing is written to `sink`.
    fn draw(
        &self,
        sink: &mut dyn DrawSink,
        pivot: Vector2,
        transform: &SpriteTransform,
        stretch_out: bool,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_handle_accessors() {
        let handle = TextureHandle::new("hero", 64, 32);
        assert_eq!(handle.key(), "hero");
        assert_eq!(handle.width(), 64);
        assert_eq!(handle.height(), 32);
        assert_eq!(handle.clone(), handle);
    }

    #[test]
    fn test_transform_builder() {
        let t = SpriteTransform::at(10.0, 20.0)
            .with_scale(-2.0, 0.5)
            .with_rotation(1.0)
            .with_depth(3.0);
        assert_eq!(t.position.x, 10.0);
        assert_eq!(t.position.y, 20.0);
        assert_eq!(t.scale.x, -2.0);
        assert_eq!(t.scale.y, 0.5);
        assert_eq!(t.rotation, 1.0);
        assert_eq!(t.depth, 3.0);
    }

    #[test]
    fn test_default_transform_is_identity() {
        let t = SpriteTransform::default();
        assert_eq!(t.scale.x, 1.0);
        assert_eq!(t.scale.y, 1.0);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.tint.alpha, 1.0);
    }
}
