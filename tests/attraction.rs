use connectors::assets::{PathShape, TransmissionMaterial};
use connectors::components::{
    AttractionForce, ConnectorBody, DecorativeBody, MAX_FORCE_DELTA, PhysicsComponent, TickContext,
    clamp_delta,
};
use connectors::physics::PhysicsManager;
use connectors::scene::{ConnectorSpec, MATTE};
use connectors::utils::Color;
use nalgebra::Vector3;
use rand::SeedableRng;
use rand::rngs::StdRng;

const FRAME: f32 = 1.0 / 60.0;

fn tick(physics: &mut PhysicsManager, body: &mut dyn PhysicsComponent, frames: usize) {
    let ctx = TickContext {
        delta_time: FRAME,
        ..TickContext::default()
    };
    for _ in 0..frames {
        body.late_update(physics, &ctx);
        physics.step(FRAME).unwrap();
        body.post_update(physics);
    }
}

#[test]
fn delta_is_clamped() {
    assert_eq!(clamp_delta(-1.0), 0.0);
    assert_eq!(clamp_delta(0.05), 0.05);
    assert_eq!(clamp_delta(5.0), MAX_FORCE_DELTA);
}

#[test]
fn connector_pull_ignores_frame_time() {
    let position = Vector3::new(1.0, -2.0, 3.0);
    let expected = -position * 0.2;

    for dt in [0.0, FRAME, 0.1, 2.0] {
        let impulse = AttractionForce::CONNECTOR.impulse(&position, dt);
        assert!((impulse - expected).norm() < 1e-6);
    }
}

#[test]
fn decorative_pull_scales_with_clamped_time() {
    let position = Vector3::new(10.0, 0.0, 0.0);

    let slow = AttractionForce::DECORATIVE.impulse(&position, 0.05);
    assert!((slow.x + 10.0 * 0.02 * 0.05).abs() < 1e-6);

    let clamped = AttractionForce::DECORATIVE.impulse(&position, 3.0);
    assert!((clamped.x + 10.0 * 0.02 * MAX_FORCE_DELTA).abs() < 1e-6);

    let paused = AttractionForce::DECORATIVE.impulse(&position, 0.0);
    assert_eq!(paused.norm(), 0.0);
}

#[test]
fn connector_drifts_to_origin() {
    let mut physics = PhysicsManager::default();
    let mut rng = StdRng::seed_from_u64(0);
    let spec = ConnectorSpec::new(Color::WHITE, MATTE);
    let start = Vector3::new(4.0, -3.0, 2.0);

    let mut connector = ConnectorBody::new(spec, Some(start), &mut rng);
    connector.init(&mut physics);
    tick(&mut physics, &mut connector, 120);

    assert!(connector.position().norm() < start.norm() / 2.0);
}

#[test]
fn decorative_drifts_to_origin() {
    let mut physics = PhysicsManager::default();
    let start = Vector3::new(1.0, 0.0, 0.0);
    let mut body = DecorativeBody::at(start, vec![PathShape::default()], TransmissionMaterial::decorative());

    body.init(&mut physics);
    tick(&mut physics, &mut body, 60);

    assert!(body.position().x < start.x);
}

#[test]
fn connector_without_body_is_skipped() {
    let mut physics = PhysicsManager::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut connector = ConnectorBody::new(ConnectorSpec::new(Color::WHITE, MATTE), None, &mut rng);
    let spawn = connector.spawn_position();

    tick(&mut physics, &mut connector, 3);

    assert_eq!(connector.position(), spawn);
    assert_eq!(physics.body_count(), 0);
}

#[test]
fn init_twice_is_a_noop() {
    let mut physics = PhysicsManager::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut connector = ConnectorBody::new(ConnectorSpec::new(Color::WHITE, MATTE), None, &mut rng);

    connector.init(&mut physics);
    let handle = connector.body_handle();
    connector.init(&mut physics);

    assert_eq!(connector.body_handle(), handle);
    assert_eq!(physics.body_count(), 1);
}

#[test]
fn delete_removes_body() {
    let mut physics = PhysicsManager::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut connector = ConnectorBody::new(ConnectorSpec::new(Color::WHITE, MATTE), None, &mut rng);

    connector.init(&mut physics);
    connector.delete(&mut physics);

    assert_eq!(physics.body_count(), 0);
    assert!(connector.body_handle().is_none());
}

#[test]
fn invalid_steps_are_rejected() {
    let mut physics = PhysicsManager::default();
    assert!(physics.step(f32::NAN).is_err());
    assert!(physics.step(-0.1).is_err());
    assert!(physics.step(0.0).is_ok());
    assert_eq!(physics.steps(), 1);
}

#[test]
fn long_frames_pull_like_max_delta() {
    let position = Vector3::new(-3.0, 1.0, 2.0);

    for force in [AttractionForce::CONNECTOR, AttractionForce::DECORATIVE] {
        assert_eq!(force.impulse(&position, 0.5), force.impulse(&position, MAX_FORCE_DELTA));
    }
}

#[test]
fn connector_body_setup() {
    use connectors::components::{ANGULAR_DAMPING, CONNECTOR_HALF_EXTENTS, FRICTION, LINEAR_DAMPING};

    let mut physics = PhysicsManager::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut connector = ConnectorBody::new(ConnectorSpec::new(Color::WHITE, MATTE), None, &mut rng);
    connector.init(&mut physics);

    let body = physics.body(connector.body_handle().unwrap()).unwrap();
    assert!(body.is_dynamic());
    assert_eq!(body.linear_damping(), 4.0);
    assert_eq!(body.angular_damping(), 1.0);
    assert_eq!((LINEAR_DAMPING, ANGULAR_DAMPING), (4.0, 1.0));

    let expected = [[0.38, 1.27, 0.38], [1.27, 0.38, 0.38], [0.38, 0.38, 1.27]];
    assert_eq!(CONNECTOR_HALF_EXTENTS, expected);
    assert_eq!(body.colliders().len(), 3);

    for (handle, half_extents) in body.colliders().iter().zip(expected) {
        let collider = &physics.collider_set[*handle];
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert_eq!(cuboid.half_extents, Vector3::from(half_extents));
        assert_eq!(collider.friction(), 0.1);
        assert_eq!(FRICTION, 0.1);
    }
}
