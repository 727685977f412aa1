//! The [`FrameDriver`] runs one full tick per display refresh.
//!
//! A tick is never split: clicks, physics hooks, the physics step, material
//! easing and the draw all happen synchronously, in that order.

use crate::assets::AssetService;
use crate::components::TickContext;
use crate::input::InputManager;
use crate::physics::{PhysicsError, PhysicsManager};
use crate::rendering::{RenderError, RenderService};
use crate::scene::{Scene, SceneError, SceneState, TimeStep};
use crate::utils::FrameCounter;
use log::{debug, trace};
use snafu::{ResultExt, Snafu, ensure};
use std::time::{Duration, Instant};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum FrameError {
    #[snafu(display("A frame can't last {delta_time} seconds"))]
    InvalidDelta { delta_time: f32 },

    #[snafu(display("The physics world can't be advanced with {time_step:?}"))]
    InvalidTimeStep { time_step: TimeStep },

    #[snafu(display("Physics step failed: {source}"))]
    Physics { source: PhysicsError },

    #[snafu(display("Scene failed: {source}"))]
    Scene { source: SceneError },

    #[snafu(display("Draw failed: {source}"))]
    Draw { source: RenderError },
}

const STATS_INTERVAL: Duration = Duration::from_secs(1);

pub struct FrameDriver<R: RenderService> {
    pub physics: PhysicsManager,
    pub input: InputManager,
    scene: Scene,
    renderer: R,
    accumulator: f32,
    frame_counter: FrameCounter,
    frames: u64,

    start_time: Instant,
    delta_time: Duration,
    last_frame_time: Instant,
    last_stats: Instant,
}

impl<R: RenderService> FrameDriver<R> {
    pub fn new(scene: Scene, renderer: R) -> Self {
        let now = Instant::now();
        FrameDriver {
            physics: PhysicsManager::default(),
            input: InputManager::default(),
            scene,
            renderer,
            accumulator: 0.0,
            frame_counter: FrameCounter::default(),
            frames: 0,
            start_time: now,
            delta_time: Duration::default(),
            last_frame_time: now,
            last_stats: now,
        }
    }

    pub fn init(&mut self, assets: &dyn AssetService) -> Result<(), FrameError> {
        let time_step = self.scene.config().time_step;
        ensure!(time_step.is_valid(), InvalidTimeStepErr { time_step });

        self.scene
            .init(&mut self.physics, &mut self.renderer, assets)
            .context(SceneErr)?;

        let size = self.input.window_size();
        self.renderer.resize(size.width, size.height);
        self.last_frame_time = Instant::now();
        Ok(())
    }

    /// Runs a tick with the wall-clock time since the previous one.
    pub fn frame(&mut self) -> Result<(), FrameError> {
        self.tick_delta_time();
        self.tick(self.delta_time.as_secs_f32())
    }

    /// Runs one tick that lasted `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32) -> Result<(), FrameError> {
        ensure!(
            delta_time.is_finite() && delta_time >= 0.0,
            InvalidDeltaErr { delta_time }
        );
        if self.scene.state() != SceneState::Active {
            return Err(SceneError::NotActive).context(SceneErr);
        }

        for _ in 0..self.input.take_clicks() {
            self.scene.click(&mut self.renderer).context(SceneErr)?;
        }

        let ctx = TickContext {
            delta_time,
            pointer: self.input.pointer(&self.scene.config().camera),
        };

        self.scene.physics_tick(&mut self.physics, &ctx);
        self.step_physics(delta_time)?;
        self.scene.post_physics(&self.physics);

        self.scene
            .render_tick(delta_time, &mut self.renderer)
            .context(SceneErr)?;
        self.renderer.draw().context(DrawErr)?;

        self.record_frame(delta_time);
        Ok(())
    }

    fn step_physics(&mut self, delta_time: f32) -> Result<(), FrameError> {
        match self.scene.config().time_step {
            TimeStep::Variable { max } => {
                self.physics
                    .step(delta_time.min(max))
                    .context(PhysicsErr)?;
            }
            TimeStep::Fixed { step, max_substeps } => {
                self.accumulator += delta_time;

                let mut substeps = 0;
                while self.accumulator >= step && substeps < max_substeps {
                    self.physics.step(step).context(PhysicsErr)?;
                    self.accumulator -= step;
                    substeps += 1;
                }

                if self.accumulator >= step {
                    trace!("Dropping {:.3}s of physics lag", self.accumulator);
                    self.accumulator %= step;
                }
            }
        }
        Ok(())
    }

    fn record_frame(&mut self, delta_time: f32) {
        self.frames += 1;
        self.frame_counter.new_frame(delta_time);

        if self.last_stats.elapsed() >= STATS_INTERVAL {
            self.last_stats = Instant::now();
            debug!(
                "{} fps, {:.2} ms mean frame time, {} bodies",
                self.frame_counter.fps(),
                self.frame_counter.mean_delta_time() * 1000.0,
                self.physics.body_count()
            );
        }
    }

    fn tick_delta_time(&mut self) {
        self.delta_time = self.last_frame_time.elapsed();
        self.last_frame_time = Instant::now();
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    pub fn time(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_counter(&self) -> &FrameCounter {
        &self.frame_counter
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Stops the simulation for good, handing the renderer back.
    pub fn teardown(mut self) -> R {
        self.scene.teardown(&mut self.physics, &mut self.renderer);
        self.renderer
    }
}
