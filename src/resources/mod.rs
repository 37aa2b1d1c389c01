//! ECS resources made available to systems.
//!
//! Overview
//! - `drawbatch` – per-frame sink collecting sprite draw primitives
//! - `renderconfig` – window and render settings loaded from `config.ini`
//! - `texturestore` – resident textures keyed by string IDs
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod drawbatch;
pub mod renderconfig;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
