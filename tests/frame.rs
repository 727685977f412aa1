use connectors::assets::{ConnectorModel, GeometryId, StaticAssets};
use connectors::input::CLICK_BUTTON;
use connectors::rendering::RecordingRenderer;
use connectors::scene::{SceneConfig, SceneState, TimeStep, accent_color};
use connectors::{FrameDriver, FrameError, Scene};
use nalgebra::Vector3;
use std::time::Duration;
use winit::dpi::PhysicalPosition;
use winit::event::ElementState;

const FRAME: f32 = 1.0 / 60.0;

fn driver(config: SceneConfig) -> FrameDriver<RecordingRenderer> {
    let assets = StaticAssets::new(ConnectorModel {
        geometry: GeometryId(0),
        base_texture: None,
    });
    let mut driver = FrameDriver::new(Scene::new(config), RecordingRenderer::new());
    driver.init(&assets).unwrap();
    driver
}

#[test]
fn every_tick_steps_and_draws() {
    let mut driver = driver(SceneConfig::default());

    for _ in 0..10 {
        driver.tick(FRAME).unwrap();
    }

    assert_eq!(driver.frames(), 10);
    assert_eq!(driver.physics.steps(), 10);
    assert_eq!(driver.renderer().draws(), 10);
    assert_eq!(driver.frame_counter().frames(), 10);
    assert_eq!(driver.renderer().size(), (800, 600));
}

#[test]
fn tick_before_init_fails() {
    let mut driver = FrameDriver::new(Scene::new(SceneConfig::default()), RecordingRenderer::new());

    let err = driver.tick(FRAME).unwrap_err();
    assert!(matches!(err, FrameError::Scene { .. }));
    assert_eq!(driver.scene().state(), SceneState::Uninitialized);
    assert_eq!(driver.physics.steps(), 0);
    assert_eq!(driver.renderer().draws(), 0);
}

#[test]
fn invalid_delta_is_rejected() {
    let mut driver = driver(SceneConfig::default());

    for dt in [f32::NAN, f32::INFINITY, -FRAME] {
        let err = driver.tick(dt).unwrap_err();
        assert!(matches!(err, FrameError::InvalidDelta { .. }));
    }
    assert_eq!(driver.physics.steps(), 0);
    assert_eq!(driver.frames(), 0);
}

#[test]
fn draw_failures_propagate() {
    let mut driver = driver(SceneConfig::default());
    driver.renderer_mut().fail_draws("device lost");

    let err = driver.tick(FRAME).unwrap_err();
    assert!(matches!(err, FrameError::Draw { .. }));
}

#[test]
fn long_frames_are_clamped() {
    let mut driver = driver(SceneConfig::default());

    driver.tick(5.0).unwrap();
    assert_eq!(driver.physics.integration_parameters.dt, 0.1);
}

#[test]
fn fixed_steps_are_capped() {
    let config = SceneConfig::builder()
        .time_step(TimeStep::Fixed {
            step: 0.01,
            max_substeps: 4,
        })
        .build();
    let mut driver = driver(config);

    driver.tick(0.025).unwrap();
    assert_eq!(driver.physics.steps(), 2);

    driver.tick(1.0).unwrap();
    assert_eq!(driver.physics.steps(), 6);

    driver.tick(0.0).unwrap();
    assert_eq!(driver.physics.steps(), 6);
    assert_eq!(driver.renderer().draws(), 3);
}

#[test]
fn clicks_are_applied_once() {
    let mut driver = driver(SceneConfig::default());

    driver.input.process_button(CLICK_BUTTON, ElementState::Pressed);
    driver.input.process_button(CLICK_BUTTON, ElementState::Released);
    driver.tick(FRAME).unwrap();
    driver.tick(FRAME).unwrap();

    assert_eq!(driver.scene().accent_index(), 1);
    for connector in driver.scene().connectors() {
        if let Some(light) = connector.render.light {
            assert_eq!(driver.renderer().light(light).unwrap().light.color, accent_color(1));
        }
    }
}

#[test]
fn pointer_target_tracks_cursor() {
    let mut driver = driver(SceneConfig::default());

    driver.input.set_cursor_position(PhysicalPosition::new(400.0, 300.0));
    driver.tick(FRAME).unwrap();
    assert_eq!(driver.scene().pointer().target(), Vector3::zeros());

    driver.input.set_cursor_position(PhysicalPosition::new(800.0, 0.0));
    driver.tick(FRAME).unwrap();
    let target = driver.scene().pointer().target();
    assert!(target.x > 0.0 && target.y > 0.0);
    assert_eq!(target.z, 0.0);
}

#[test]
fn wall_clock_frames() {
    let mut driver = driver(SceneConfig::default());

    std::thread::sleep(Duration::from_millis(1));
    driver.frame().unwrap();
    assert!(driver.delta_time() > Duration::ZERO);
}

#[test]
fn teardown_returns_clean_renderer() {
    let mut driver = driver(SceneConfig::default());
    driver.tick(FRAME).unwrap();

    let renderer = driver.teardown();
    assert_eq!(renderer.mesh_count(), 0);
    assert_eq!(renderer.draws(), 1);
}

#[test]
fn unusable_time_steps_are_rejected() {
    let assets = StaticAssets::new(ConnectorModel {
        geometry: GeometryId(0),
        base_texture: None,
    });

    for time_step in [
        TimeStep::Fixed { step: 0.0, max_substeps: 4 },
        TimeStep::Fixed { step: -0.01, max_substeps: 4 },
        TimeStep::Fixed { step: f32::NAN, max_substeps: 4 },
        TimeStep::Fixed { step: 0.01, max_substeps: 0 },
        TimeStep::Variable { max: 0.0 },
        TimeStep::Variable { max: f32::INFINITY },
    ] {
        let config = SceneConfig::builder().time_step(time_step).build();
        let mut driver = FrameDriver::new(Scene::new(config), RecordingRenderer::new());

        let err = driver.init(&assets).unwrap_err();
        assert!(matches!(err, FrameError::InvalidTimeStep { .. }));
        assert_eq!(driver.physics.body_count(), 0);
        assert!(driver.tick(FRAME).is_err());
        assert_eq!(driver.physics.steps(), 0);
    }
}

#[test]
fn fixed_steps_keep_running() {
    let config = SceneConfig::builder()
        .time_step(TimeStep::Fixed {
            step: 0.01,
            max_substeps: 2,
        })
        .build();
    let mut driver = driver(config);

    for _ in 0..5 {
        driver.tick(1.0).unwrap();
    }
    assert_eq!(driver.physics.steps(), 10);
}
