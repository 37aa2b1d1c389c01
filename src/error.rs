//! Error types for sprite rendering.
//!
//! All errors are local to a single `draw` call. The frame driver decides
//! whether a failing sprite is skipped or aborts the frame.

use thiserror::Error;

/// Errors raised while turning a sprite transform into draw primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SpriteError {
    /// The surface has no texture bound.
    #[error("sprite surface has no texture bound")]
    UnboundTexture,

    /// The surface has a zero or negative size, or an atlas region that does
    /// not fit its texture.
    #[error("invalid sprite surface of {width}x{height} pixels")]
    InvalidSurface { width: f32, height: f32 },

    /// A numeric transform component is NaN or infinite.
    #[error("non-finite transform component: {0}")]
    InvalidTransform(&'static str),

    /// The tile grid would exceed the per-axis tile limit.
    #[error("tile grid of {cols}x{rows} exceeds the tile limit")]
    TileLimit { cols: usize, rows: usize },
}

/// Result type for sprite rendering.
pub type Result<T> = std::result::Result<T, SpriteError>;
