use crate::components::Camera;
use crate::input::PointerInput;
use nalgebra::Vector2;
use std::collections::HashMap;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Button that cycles the accent color.
pub const CLICK_BUTTON: MouseButton = MouseButton::Left;

pub struct InputManager {
    button_states: HashMap<MouseButton, ElementState>,
    cursor_pos: Option<PhysicalPosition<f32>>,
    window_size: PhysicalSize<u32>,
    pending_clicks: usize,
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager {
            button_states: HashMap::default(),
            cursor_pos: None,
            window_size: PhysicalSize::new(800, 600),
            pending_clicks: 0,
        }
    }
}

impl InputManager {
    pub fn new(window_size: PhysicalSize<u32>) -> Self {
        InputManager {
            window_size,
            ..Self::default()
        }
    }

    pub fn process_event(&mut self, window_event: &WindowEvent) {
        match window_event {
            WindowEvent::CursorMoved { position, .. } => self.set_cursor_position(*position),
            WindowEvent::Resized(size) => self.resize(*size),
            WindowEvent::MouseInput { button, state, .. } => self.process_button(*button, *state),
            _ => {}
        }
    }

    pub fn set_cursor_position(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_pos = Some(PhysicalPosition::new(position.x as f32, position.y as f32));
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.window_size = size;
    }

    pub fn process_button(&mut self, button: MouseButton, state: ElementState) {
        let was_pressed = self.is_button_pressed(button);

        // a click is a press followed by a release
        if button == CLICK_BUTTON && was_pressed && !state.is_pressed() {
            self.pending_clicks += 1;
        }

        self.button_states.insert(button, state);
    }

    pub fn get_button_state(&self, button: MouseButton) -> ElementState {
        *self.button_states.get(&button).unwrap_or(&ElementState::Released)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.get_button_state(button) == ElementState::Pressed
    }

    pub fn window_size(&self) -> PhysicalSize<u32> {
        self.window_size
    }

    pub fn aspect(&self) -> f32 {
        if self.window_size.height == 0 {
            return 1.0;
        }
        self.window_size.width as f32 / self.window_size.height as f32
    }

    /// Cursor in normalized device coordinates, `[-1, 1]` on both axes with +y up.
    /// Before the cursor entered the window this is the center.
    pub fn pointer_ndc(&self) -> Vector2<f32> {
        let Some(pos) = self.cursor_pos else {
            return Vector2::zeros();
        };
        let PhysicalSize { width, height } = self.window_size;
        if width == 0 || height == 0 {
            return Vector2::zeros();
        }

        Vector2::new(
            pos.x / width as f32 * 2.0 - 1.0,
            1.0 - pos.y / height as f32 * 2.0,
        )
    }

    pub fn pointer(&self, camera: &Camera) -> PointerInput {
        PointerInput {
            ndc: self.pointer_ndc(),
            viewport: camera.viewport(self.aspect()),
        }
    }

    /// Returns the clicks since the last call and forgets them.
    pub fn take_clicks(&mut self) -> usize {
        std::mem::take(&mut self.pending_clicks)
    }
}
