use log::trace;
use nalgebra::Vector3;
use rapier3d::prelude::*;
use snafu::{Snafu, ensure};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum PhysicsError {
    #[snafu(display("Cannot step the physics world by {dt} seconds"))]
    InvalidTimestep { dt: f32 },
}

/// Longest single step the world is ever advanced by.
pub const MAX_STEP: f32 = 0.1;

pub struct PhysicsManager {
    pub gravity: Vector3<f32>,
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    steps: u64,
}

impl Default for PhysicsManager {
    fn default() -> Self {
        PhysicsManager {
            gravity: Vector3::zeros(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps: 0,
        }
    }
}

impl PhysicsManager {
    /// Advances the world by `dt` seconds, clamped to [`MAX_STEP`].
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        ensure!(dt.is_finite() && dt >= 0.0, InvalidTimestepErr { dt });

        self.integration_parameters.dt = dt.min(MAX_STEP);
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(), // no hooks
            &(), // no events
        );
        self.steps += 1;

        Ok(())
    }

    /// Inserts a body together with colliders attached to it.
    pub fn insert_body(
        &mut self,
        body: RigidBody,
        colliders: impl IntoIterator<Item = Collider>,
    ) -> RigidBodyHandle {
        let handle = self.rigid_body_set.insert(body);
        for collider in colliders {
            self.collider_set
                .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        }
        trace!("Inserted rigid body {handle:?}");
        handle
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Removes a body and everything attached to it. Unknown handles are ignored.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> Option<RigidBody> {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        )
    }

    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.body(handle).map(|rb| *rb.translation())
    }

    pub fn position(&self, handle: RigidBodyHandle) -> Option<Isometry<Real>> {
        self.body(handle).map(|rb| *rb.position())
    }

    /// Number of bodies currently simulated.
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Number of completed steps since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
