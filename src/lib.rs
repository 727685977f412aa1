//! A swarm of rigid connectors pulled toward the origin and pushed around by
//! the pointer. Clicking cycles the accent color, which the connectors ease to.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod engine;
pub mod utils;
pub mod windowing;

pub use engine::*;
pub use windowing::*;

pub use ::log;
pub use ::winit;
