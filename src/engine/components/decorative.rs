use crate::assets::{PathShape, TransmissionMaterial};
use crate::components::connector::{FRICTION, calm_body, spread_position};
use crate::components::{AttractionForce, PhysicsComponent, TickContext};
use crate::physics::PhysicsManager;
use crate::rendering::MeshHandle;
use log::trace;
use nalgebra::{Isometry3, Vector3};
use rand::Rng;
use rapier3d::prelude::*;

pub const DECORATIVE_SPAWN_SPREAD: f32 = 2.0;
pub const DECORATIVE_MASS: f32 = 1.0;
/// The collider is a flat card in the XY plane.
pub const DECORATIVE_HALF_EXTENTS: [f32; 3] = [1.0, 1.0, 0.0];

/// Extruded body built from vector path data. It drifts more lazily than the
/// connectors since its pull is scaled by the frame time.
#[derive(Debug, Clone)]
pub struct DecorativeBody {
    spawn_position: Vector3<f32>,
    body: Option<RigidBodyHandle>,
    isometry: Isometry3<f32>,
    force: AttractionForce,
    shapes: Vec<PathShape>,
    material: TransmissionMaterial,
    pub meshes: Vec<MeshHandle>,
}

impl DecorativeBody {
    pub fn new<R: Rng>(shapes: Vec<PathShape>, material: TransmissionMaterial, rng: &mut R) -> Self {
        Self::at(spread_position(rng, DECORATIVE_SPAWN_SPREAD), shapes, material)
    }

    pub fn at(position: Vector3<f32>, shapes: Vec<PathShape>, material: TransmissionMaterial) -> Self {
        DecorativeBody {
            spawn_position: position,
            body: None,
            isometry: Isometry3::translation(position.x, position.y, position.z),
            force: AttractionForce::DECORATIVE,
            shapes,
            material,
            meshes: Vec::new(),
        }
    }

    pub fn spawn_position(&self) -> Vector3<f32> {
        self.spawn_position
    }

    pub fn isometry(&self) -> &Isometry3<f32> {
        &self.isometry
    }

    pub fn position(&self) -> Vector3<f32> {
        self.isometry.translation.vector
    }

    pub fn force(&self) -> AttractionForce {
        self.force
    }

    pub fn shapes(&self) -> &[PathShape] {
        &self.shapes
    }

    pub fn material(&self) -> &TransmissionMaterial {
        &self.material
    }
}

impl PhysicsComponent for DecorativeBody {
    fn init(&mut self, physics: &mut PhysicsManager) {
        if self.body.is_some() {
            return;
        }

        let mut body = calm_body(self.spawn_position, u128::MAX);
        // the card has no volume, so its mass can't come from density
        body.set_additional_mass(DECORATIVE_MASS, false);

        let [hx, hy, hz] = DECORATIVE_HALF_EXTENTS;
        let collider = ColliderBuilder::cuboid(hx, hy, hz)
            .density(0.0)
            .friction(FRICTION)
            .build();

        self.body = Some(physics.insert_body(body, [collider]));
    }

    fn late_update(&mut self, physics: &mut PhysicsManager, ctx: &TickContext) {
        let Some(rb) = self.body.and_then(|handle| physics.body_mut(handle)) else {
            trace!("Decorative body has no rigid body yet, skipping its tick");
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
