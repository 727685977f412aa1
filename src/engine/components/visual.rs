use crate::scene::ConnectorSpec;
use crate::utils::{Color, smooth_damp};

/// Smoothing time of the color transition, in seconds.
pub const COLOR_SMOOTH_TIME: f32 = 0.2;

/// Live material state of an opaque connector.
///
/// The color eases toward the spec color on every render tick using the raw
/// frame time. Physics never touches this.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    spec: ConnectorSpec,
    current: Color,
    velocity: [f32; 3],
}

impl VisualState {
    /// Starts from white, the untinted material color, and fades toward the spec.
    pub fn new(spec: ConnectorSpec) -> Self {
        Self::starting_at(spec, Color::WHITE)
    }

    pub fn starting_at(spec: ConnectorSpec, current: Color) -> Self {
        VisualState {
            spec,
            current,
            velocity: [0.0; 3],
        }
    }

    pub fn spec(&self) -> &ConnectorSpec {
        &self.spec
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn roughness(&self) -> f32 {
        self.spec.roughness
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.spec.color
    }

    /// Swaps in a new target. The current color stays and eases from rest, so
    /// it never swings away from the new target.
    pub fn retarget(&mut self, spec: ConnectorSpec) {
        self.spec = spec;
        self.velocity = [0.0; 3];
    }

    /// Eases the color by `delta_time` seconds. Returns whether it changed.
    pub fn render_tick(&mut self, delta_time: f32) -> bool {
        let target = self.spec.color;
        let Color { r, g, b } = &mut self.current;
        let [vr, vg, vb] = &mut self.velocity;

        let moved_r = smooth_damp(r, vr, target.r, COLOR_SMOOTH_TIME, delta_time);
        let moved_g = smooth_damp(g, vg, target.g, COLOR_SMOOTH_TIME, delta_time);
        let moved_b = smooth_damp(b, vb, target.b, COLOR_SMOOTH_TIME, delta_time);

        moved_r || moved_g || moved_b
    }
}
