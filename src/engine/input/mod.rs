//! Pointer and click input.
//!
//! [`InputManager`] folds `winit` window events into the per-frame
//! [`PointerInput`] and a queue of clicks.

pub mod input_manager;

pub use input_manager::*;

use nalgebra::{Vector2, Vector3};

/// Pointer state of one frame.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerInput {
    /// Normalized device coordinates, `[-1, 1]`
    pub ndc: Vector2<f32>,
    /// World-space size of the visible area
    pub viewport: Vector2<f32>,
}

impl PointerInput {
    pub fn new(ndc: Vector2<f32>, viewport: Vector2<f32>) -> Self {
        PointerInput { ndc, viewport }
    }

    /// Maps the pointer onto the `z = 0` plane.
    pub fn world_position(&self) -> Vector3<f32> {
        Vector3::new(
            self.ndc.x * self.viewport.x / 2.0,
            self.ndc.y * self.viewport.y / 2.0,
            0.0,
        )
    }
}
