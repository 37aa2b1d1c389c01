//! Engine systems.
//!
//! This module groups the ECS systems that advance time, animate sprites and
//! turn sprite entities into draw calls.
//!
//! Submodules overview:
//! - [`pulse`] – scale and spin animation driven by world time
//! - [`render`] – sprite collection into the draw batch and raylib submission
//! - [`time`] – per-frame update of the world clock

pub mod pulse;
pub mod render;
pub mod time;
