//! Simulated entities of the scene.
//!
//! Every entity is a long-lived struct owned by the [`Scene`](crate::scene::Scene)
//! which holds the handle of its rigid body. The physics world owns the
//! authoritative transform; components only reach it through that handle.
//!
//! A frame calls the hooks in this order:
//! 1. [`PhysicsComponent::late_update`] on every entity (impulses, kinematic targets)
//! 2. one physics step
//! 3. [`PhysicsComponent::post_update`] on every entity (mirror resolved transforms)

pub mod attraction;
pub mod camera;
pub mod connector;
pub mod decorative;
pub mod pointer;
pub mod visual;

pub use attraction::*;
pub use camera::*;
pub use connector::*;
pub use decorative::*;
pub use pointer::*;
pub use visual::*;

use crate::input::PointerInput;
use crate::physics::PhysicsManager;
use rapier3d::prelude::RigidBodyHandle;

/// Per-frame data handed to the physics hooks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickContext {
    /// Raw frame time in seconds. Components clamp it themselves where needed.
    pub delta_time: f32,
    pub pointer: PointerInput,
}

pub trait PhysicsComponent {
    /// Creates the rigid body and its colliders. Calling it twice is a no-op.
    fn init(&mut self, physics: &mut PhysicsManager);

    // Gets called before the world is stepped
    fn late_update(&mut self, physics: &mut PhysicsManager, ctx: &TickContext);

    // Gets called after physics have evolved
    fn post_update(&mut self, _physics: &PhysicsManager) {}

    // Gets called when the scene is torn down
    fn delete(&mut self, physics: &mut PhysicsManager) {
        if let Some(handle) = self.take_body_handle() {
            physics.remove_body(handle);
        }
    }

    fn body_handle(&self) -> Option<RigidBodyHandle>;

    fn take_body_handle(&mut self) -> Option<RigidBodyHandle>;
}
