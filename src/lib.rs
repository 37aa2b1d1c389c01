//! Spritetile library.
//!
//! Renders 2D textured sprites with pivot-relative placement, per-axis scale
//! and flip, rotation, tint and depth. The heart of the crate is
//! [`sprites::tiling`], which turns a sprite transform into either one
//! stretched quad or a grid of undeformed tiles. The ECS components,
//! resources and systems around it drive that algorithm once per sprite per
//! frame and submit the result through raylib.

pub mod components;
pub mod error;
pub mod game;
pub mod resources;
pub mod sprites;
pub mod systems;
pub mod trace;
