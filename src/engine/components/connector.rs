use crate::assets::TransmissionMaterial;
use crate::components::{AttractionForce, PhysicsComponent, TickContext, VisualState};
use crate::physics::PhysicsManager;
use crate::rendering::{LightHandle, MeshHandle};
use crate::scene::ConnectorSpec;
use log::trace;
use nalgebra::{Isometry3, Vector3};
use rand::Rng;
use rapier3d::prelude::*;

/// Half extents of the three boxes forming the pipe-cross collider.
pub const CONNECTOR_HALF_EXTENTS: [[f32; 3]; 3] = [
    [0.38, 1.27, 0.38],
    [1.27, 0.38, 0.38],
    [0.38, 0.38, 1.27],
];

/// Width of the cube random spawn positions are drawn from, centered on the origin.
pub const SPAWN_SPREAD: f32 = 10.0;

pub const LINEAR_DAMPING: f32 = 4.0;
pub const ANGULAR_DAMPING: f32 = 1.0;
pub const FRICTION: f32 = 0.1;

/// Draws every axis uniformly from `[-spread / 2, spread / 2]`.
pub fn spread_position<R: Rng>(rng: &mut R, spread: f32) -> Vector3<f32> {
    let half = spread / 2.0;
    Vector3::from_fn(|_, _| rng.gen_range(-half..=half))
}

/// A damped dynamic body. High damping keeps the swarm calm.
pub(crate) fn calm_body(position: Vector3<f32>, user_data: u128) -> RigidBody {
    RigidBodyBuilder::dynamic()
        .translation(position)
        .linear_damping(LINEAR_DAMPING)
        .angular_damping(ANGULAR_DAMPING)
        .user_data(user_data)
        .build()
}

pub fn connector_colliders() -> Vec<Collider> {
    CONNECTOR_HALF_EXTENTS
        .iter()
        .map(|[hx, hy, hz]| ColliderBuilder::cuboid(*hx, *hy, *hz).friction(FRICTION).build())
        .collect()
}

/// How a connector is shaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorLook {
    /// Opaque, spec driven and eased.
    Standard(VisualState),
    /// Glass-like, fixed.
    Transmissive(TransmissionMaterial),
}

/// Render-side handles owned by an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderHandles {
    pub mesh: Option<MeshHandle>,
    pub light: Option<LightHandle>,
}

#[derive(Debug, Clone)]
pub struct ConnectorBody {
    spawn_position: Vector3<f32>,
    body: Option<RigidBodyHandle>,
    isometry: Isometry3<f32>,
    force: AttractionForce,
    look: ConnectorLook,
    user_data: u128,
    pub render: RenderHandles,
}

impl ConnectorBody {
    /// A spec driven connector. Without a position one is drawn from `rng` once.
    pub fn new<R: Rng>(
        spec: ConnectorSpec,
        position: Option<Vector3<f32>>,
        rng: &mut R,
    ) -> Self {
        let position = position.unwrap_or_else(|| spread_position(rng, SPAWN_SPREAD));
        Self::with_look(position, ConnectorLook::Standard(VisualState::new(spec)))
    }

    /// The distinguished glass connector.
    pub fn hero(position: Vector3<f32>, material: TransmissionMaterial) -> Self {
        Self::with_look(position, ConnectorLook::Transmissive(material))
    }

    fn with_look(position: Vector3<f32>, look: ConnectorLook) -> Self {
        ConnectorBody {
            spawn_position: position,
            body: None,
            isometry: Isometry3::translation(position.x, position.y, position.z),
            force: AttractionForce::CONNECTOR,
            look,
            user_data: 0,
            render: RenderHandles::default(),
        }
    }

    pub fn with_user_data(mut self, user_data: u128) -> Self {
        self.user_data = user_data;
        self
    }

    pub fn spawn_position(&self) -> Vector3<f32> {
        self.spawn_position
    }

    /// Transform mirrored from the physics world after the last step.
    pub fn isometry(&self) -> &Isometry3<f32> {
        &self.isometry
    }

    pub fn position(&self) -> Vector3<f32> {
        self.isometry.translation.vector
    }

    pub fn force(&self) -> AttractionForce {
        self.force
    }

    pub fn look(&self) -> &ConnectorLook {
        &self.look
    }

    pub fn visual(&self) -> Option<&VisualState> {
        match &self.look {
            ConnectorLook::Standard(visual) => Some(visual),
            ConnectorLook::Transmissive(_) => None,
        }
    }

    pub fn visual_mut(&mut self) -> Option<&mut VisualState> {
        match &mut self.look {
            ConnectorLook::Standard(visual) => Some(visual),
            ConnectorLook::Transmissive(_) => None,
        }
    }

    pub fn spec(&self) -> Option<&ConnectorSpec> {
        self.visual().map(VisualState::spec)
    }

    pub fn is_accent(&self) -> bool {
        self.spec().is_some_and(|spec| spec.accent)
    }
}

impl PhysicsComponent for ConnectorBody {
    fn init(&mut self, physics: &mut PhysicsManager) {
        if self.body.is_some() {
            return;
        }

        let body = calm_body(self.spawn_position, self.user_data);
        self.body = Some(physics.insert_body(body, connector_colliders()));
    }

    fn late_update(&mut self, physics: &mut PhysicsManager, ctx: &TickContext) {
        let Some(rb) = self.body.and_then(|handle| physics.body_mut(handle)) else {
            trace!("Connector {} has no rigid body yet, skipping its tick", self.user_data);
            return;
        };

        self.force.apply(rb, ctx.delta_time);
    }

    fn post_update(&mut self, physics: &PhysicsManager) {
        if let Some(position) = self.body.and_then(|handle| physics.position(handle)) {
            self.isometry = position;
        }
    }

    fn body_handle(&self) -> Option<RigidBodyHandle> {
        self.body
    }

    fn take_body_handle(&mut self) -> Option<RigidBodyHandle> {
        self.body.take()
    }
}
