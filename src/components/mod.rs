//! ECS components for entities.
//!
//! Submodules overview:
//! - [`depth`] – draw-order key, higher is drawn on top
//! - [`mapposition`] – world-space position of the sprite pivot
//! - [`rotation`] – rotation angle in radians
//! - [`scale`] – 2D scale factor; negative components flip
//! - [`scalepulse`] – time-driven scale and spin animation
//! - [`sprite`] – drawable surface, pivot and stretch policy
//! - [`tint`] – color modulation with an alpha multiplier

pub mod depth;
pub mod mapposition;
pub mod rotation;
pub mod scale;
pub mod scalepulse;
pub mod sprite;
pub mod tint;
