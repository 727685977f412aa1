use crate::components::{PhysicsComponent, TickContext};
use crate::physics::PhysicsManager;
use nalgebra::Vector3;
use rapier3d::prelude::*;

pub const POINTER_RADIUS: f32 = 1.0;

/// Kinematic sphere following the cursor.
///
/// It has no force of its own and can't be pushed; it only shoves connectors
/// out of the way through contacts.
#[derive(Debug, Clone, Default)]
pub struct PointerProbe {
    body: Option<RigidBodyHandle>,
    target: Vector3<f32>,
}

impl PointerProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last kinematic target that was handed to the physics world.
    pub fn target(&self) -> Vector3<f32> {
        self.target
    }
}

impl PhysicsComponent for PointerProbe {
    fn init(&mut self, physics: &mut PhysicsManager) {
        if self.body.is_some() {
            return;
        }

        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(self.target)
            .build();
        let collider = ColliderBuilder::ball(POINTER_RADIUS).build();

        self.body = Some(physics.insert_body(body, [collider]));
    }

    fn late_update(&mut self, physics: &mut PhysicsManager, ctx: &TickContext) {
        self.target = ctx.pointer.world_position();

        if let Some(rb) = self.body.and_then(|handle| physics.body_mut(handle)) {
            rb.set_next_kinematic_translation(self.target);
        }
    }

    fn body_handle(&self) -> Option<RigidBodyHandle> {
        self.body
    }

    fn take_body_handle(&mut self) -> Option<RigidBodyHandle> {
        self.body.take()
    }
}
