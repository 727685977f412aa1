//! Windowing and the event loop.
//!
//! [`AppSettings::run`] opens a `winit` window, feeds its events into the
//! [`FrameDriver`](crate::frame::FrameDriver) and runs one frame per redraw.

pub mod app;
pub mod state;

pub use app::*;
pub use state::*;
