//! Stretch-or-tile transform algorithm.
//!
//! Given the intrinsic size of a surface, a pivot fraction and a world
//! transform, [`plan`] computes the exact list of rectangle draws that
//! reproduce the sprite:
//!
//! - **Stretch path**: one primitive, the whole surface scaled as a single
//!   quad. Taken when the caller asks for it or when the scale is `(1, 1)`.
//! - **Tile path**: a `cols x rows` grid of whole or partial copies of the
//!   surface, each sampled 1:1 so no tile is deformed. Edge tiles absorb the
//!   fractional part of the scale. The whole grid rotates rigidly around the
//!   sprite position.
//!
//! Every function here is pure; nothing touches a graphics context.

use raylib::prelude::{Rectangle, Vector2};
use smallvec::SmallVec;

use crate::error::{Result, SpriteError};
use crate::sprites::{DrawPrimitive, SpriteEffects, SpriteTransform, TextureHandle};

/// Upper bound on the number of tiles one draw may emit.
pub const MAX_TILES: usize = 65_536;

/// Primitives produced by one draw. Most sprites fit inline.
pub type Primitives = SmallVec<[DrawPrimitive; 4]>;

/// Origin and flip flags resolved from pivot and scale.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedOrigin {
    /// Pivot in texture pixels, mirrored on flipped axes.
    pub origin: Vector2,
    pub effects: SpriteEffects,
    /// Scale magnitude per axis.
    pub abs_scale: Vector2,
}

/// Which output shape a draw takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPath {
    Stretch,
    Tile,
}

/// Column and row count of a tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub cols: usize,
    pub rows: usize,
}

impl TileGrid {
    /// Number of tiles in the grid.
    pub fn count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Convert the pivot fraction into a pixel origin and resolve flips.
///
/// The origin is computed from the unflipped size and then mirrored for each
/// negative scale component, so the anchor stays put under a flip.
pub fn resolve_origin(width: f32, height: f32, pivot: Vector2, scale: Vector2) -> ResolvedOrigin {
    let mut effects = SpriteEffects::default();
    let mut origin = Vector2 {
        x: pivot.x * width,
        y: pivot.y * height,
    };

    if scale.x < 0.0 {
        effects.flip_h = true;
        origin.x = width - origin.x;
    }
    if scale.y < 0.0 {
        effects.flip_v = true;
        origin.y = height - origin.y;
    }

    ResolvedOrigin {
        origin,
        effects,
        abs_scale: Vector2 {
            x: scale.x.abs(),
            y: scale.y.abs(),
        },
    }
}

/// Tiling only matters when the sprite is scaled away from 1:1 and the
/// caller opted out of deformation.
pub fn select_path(abs_scale: Vector2, stretch_out: bool) -> RenderPath {
    if stretch_out || (abs_scale.x == 1.0 && abs_scale.y == 1.0) {
        RenderPath::Stretch
    } else {
        RenderPath::Tile
    }
}

/// Grid dimensions: `1 + floor(scale)` per axis.
///
/// Fails with [`SpriteError::TileLimit`] when the whole grid holds more than
/// [`MAX_TILES`] tiles.
pub fn tile_grid(abs_scale: Vector2) -> Result<TileGrid> {
    let cols = tiles_along(abs_scale.x);
    let rows = tiles_along(abs_scale.y);
    if cols.saturating_mul(rows) > MAX_TILES {
        return Err(SpriteError::TileLimit { cols, rows });
    }
    Ok(TileGrid { cols, rows })
}

fn tiles_along(abs_scale: f32) -> usize {
    // float-to-int casts saturate, so absurd scales land on the limit check
    (abs_scale.floor() as usize).saturating_add(1)
}

/// Extent of the tile at `index` out of `count` along one axis.
///
/// The last tile keeps only the fractional remainder of the scale. A scale
/// below 1 shrinks the single tile; since that tile is also the last one,
/// only the first branch ever applies to it.
pub fn tile_extent(size: f32, abs_scale: f32, index: usize, count: usize) -> f32 {
    if index + 1 == count {
        size * (abs_scale - index as f32)
    } else if abs_scale < 1.0 {
        size * abs_scale
    } else {
        size
    }
}

/// Rotate `point` around `center`, given the sine and cosine of the angle.
pub fn rotate_about(point: Vector2, center: Vector2, sin: f32, cos: f32) -> Vector2 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Vector2 {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

fn ensure_finite(name: &'static str, values: &[f32]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SpriteError::InvalidTransform(name))
    }
}

/// Reject NaN and infinite inputs instead of silently sanitising them.
pub fn validate(pivot: Vector2, transform: &SpriteTransform) -> Result<()> {
    ensure_finite("pivot", &[pivot.x, pivot.y])?;
    ensure_finite("position", &[transform.position.x, transform.position.y])?;
    ensure_finite("scale", &[transform.scale.x, transform.scale.y])?;
    ensure_finite("rotation", &[transform.rotation])?;
    ensure_finite("depth", &[transform.depth])?;
    ensure_finite("alpha", &[transform.tint.alpha])
}

/// Compute every primitive for one sprite draw.
///
/// `region` is the part of `texture` that backs the surface; its size is the
/// intrinsic size and its top-left offsets every source rectangle.
pub fn plan(
    texture: &TextureHandle,
    region: Rectangle,
    pivot: Vector2,
    transform: &SpriteTransform,
    stretch_out: bool,
) -> Result<Primitives> {
    let (width, height) = (region.width, region.height);
    // also rejects NaN sizes
    if !(width > 0.0 && height > 0.0) {
        return Err(SpriteError::InvalidSurface { width, height });
    }
    validate(pivot, transform)?;

    let resolved = resolve_origin(width, height, pivot, transform.scale);
    let tint = transform.tint.resolve();
    let primitive = |source: Rectangle, destination: Rectangle| DrawPrimitive {
        texture: texture.clone(),
        source,
        destination,
        origin: resolved.origin,
        rotation: transform.rotation,
        tint,
        depth: transform.depth,
        effects: resolved.effects,
    };

    let position = transform.position;
    let abs_scale = resolved.abs_scale;
    let mut out = Primitives::new();

    match select_path(abs_scale, stretch_out) {
        RenderPath::Stretch => {
            out.push(primitive(
                region,
                Rectangle {
                    x: position.x,
                    y: position.y,
                    width: width * abs_scale.x,
                    height: height * abs_scale.y,
                },
            ));
        }
        RenderPath::Tile => {
            let grid = tile_grid(abs_scale)?;
            let (sin, cos) = transform.rotation.sin_cos();
            out.reserve(grid.count());

            for x in 0..grid.cols {
                let tile_width = tile_extent(width, abs_scale.x, x, grid.cols);
                for y in 0..grid.rows {
                    let tile_height = tile_extent(height, abs_scale.y, y, grid.rows);
                    let anchor = Vector2 {
                        x: position.x + width * x as f32,
                        y: position.y + height * y as f32,
                    };
                    let placed = rotate_about(anchor, position, sin, cos);

                    out.push(primitive(
                        Rectangle {
                            x: region.x,
                            y: region.y,
                            width: tile_width,
                            height: tile_height,
                        },
                        Rectangle {
                            x: placed.x,
                            y: placed.y,
                            width: tile_width,
                            height: tile_height,
                        },
                    ));
                }
            }
        }
    }

    Ok(out)
}
