use crate::AppSettings;
use crate::scene::SceneConfig;
use winit::dpi::{PhysicalSize, Size};
use winit::window::WindowAttributes;

pub trait AppRuntime: Sized {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings;

    fn default_config(self) -> AppSettings {
        self.configure("Connectors", 800, 600)
    }
}

impl AppRuntime for SceneConfig {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings {
        AppSettings {
            window: WindowAttributes::default()
                .with_inner_size(Size::Physical(PhysicalSize { width, height }))
                .with_title(title),
            config: self,
        }
    }
}
