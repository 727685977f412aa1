use crate::assets::AssetService;
use crate::frame::{FrameDriver, FrameError};
use crate::rendering::RenderService;
use crate::scene::{Scene, SceneConfig};
use log::{error, info};
use snafu::{ResultExt, Snafu};
use winit::application::ApplicationHandler;
use winit::error::{EventLoopError, OsError};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum AppError {
    #[snafu(display("No windowing backend could be used: {source}"))]
    EventLoop { source: EventLoopError },

    #[snafu(display("Couldn't open the window: {source}"))]
    Window { source: OsError },

    #[snafu(display("The frame loop stopped: {source}"))]
    Frame { source: FrameError },
}

pub struct App<R: RenderService> {
    window: Option<Window>,
    driver: Option<FrameDriver<R>>,
    assets: Box<dyn AssetService>,
    window_attributes: WindowAttributes,
    error: Option<AppError>,
}

pub struct AppSettings {
    pub window: WindowAttributes,
    pub config: SceneConfig,
}

impl AppSettings {
    /// Opens the window and runs frames until it's closed.
    pub fn run<R: RenderService>(self, renderer: R, assets: Box<dyn AssetService>) -> Result<(), AppError> {
        let event_loop = EventLoop::new().context(EventLoopErr)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            window: None,
            driver: Some(FrameDriver::new(Scene::new(self.config), renderer)),
            assets,
            window_attributes: self.window,
            error: None,
        };

        event_loop.run_app(&mut app).context(EventLoopErr)?;
        app.error.map_or(Ok(()), Err)
    }
}

impl<R: RenderService> App<R> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!("{err}");
        self.error = Some(err);
        self.shutdown(event_loop);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(driver) = self.driver.take() {
            info!("Shutting down after {} frames", driver.frames());
            driver.teardown();
        }
        event_loop.exit();
    }
}

impl<R: RenderService> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes.clone()) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, AppError::Window { source: e }),
        };

        let Some(driver) = self.driver.as_mut() else {
            return;
        };

        let size = window.inner_size();
        driver.input.resize(size);
        driver.renderer_mut().resize(size.width, size.height);

        if let Err(e) = driver.init(self.assets.as_ref()) {
            return self.fail(event_loop, AppError::Frame { source: e });
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if event_loop.exiting() {
            return;
        }

        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        driver.input.process_event(&event);

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = driver.frame() {
                    return self.fail(event_loop, AppError::Frame { source: e });
                }
                window.request_redraw();
            }
            WindowEvent::Resized(size) => driver.renderer_mut().resize(size.width, size.height),
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
