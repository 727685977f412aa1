pub mod assets;
pub mod components;
pub mod frame;
pub mod input;
pub mod physics;
pub mod rendering;
pub mod scene;

pub use self::frame::{FrameDriver, FrameError};
pub use self::scene::{Scene, SceneConfig};
