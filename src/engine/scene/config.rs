use crate::components::Camera;
use crate::physics::MAX_STEP;
use crate::scene::PaletteLayout;
use crate::utils::Color;
use bon::Builder;

/// How the physics world is advanced each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TimeStep {
    /// One step per frame by the frame time, clamped to `max`.
    Variable { max: f32 },
    /// Fixed increments out of an accumulator, at most `max_substeps` per frame.
    Fixed { step: f32, max_substeps: u32 },
}

impl TimeStep {
    /// Whether the world can be advanced with this at all.
    pub fn is_valid(&self) -> bool {
        match *self {
            TimeStep::Variable { max } => max.is_finite() && max > 0.0,
            TimeStep::Fixed { step, max_substeps } => step.is_finite() && step > 0.0 && max_substeps > 0,
        }
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::Variable { max: MAX_STEP }
    }
}

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SceneConfig {
    #[builder(default = 0)]
    pub accent_index: usize,
    /// Seed of the spawn placement and palette permutation
    #[builder(default = 0)]
    pub seed: u64,
    #[builder(default)]
    pub layout: PaletteLayout,
    /// Permute the palette once at startup
    #[builder(default = false)]
    pub shuffle: bool,
    /// Spawn the glass connector
    #[builder(default = true)]
    pub hero: bool,
    /// Name of the vector path to extrude into a decorative body
    #[builder(into)]
    pub decorative: Option<String>,
    #[builder(default)]
    pub camera: Camera,
    #[builder(default = Color::BLACK)]
    pub background: Color,
    #[builder(default)]
    pub time_step: TimeStep,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig::builder().build()
    }
}
