use nalgebra::Vector3;
use rapier3d::prelude::RigidBody;

/// Frame times above this are treated as exactly this long by the force step.
pub const MAX_FORCE_DELTA: f32 = 0.1;

/// Clamps a frame time into `[0, MAX_FORCE_DELTA]`.
#[inline]
pub fn clamp_delta(delta_time: f32) -> f32 {
    delta_time.min(MAX_FORCE_DELTA).max(0.0)
}

/// Spring-like pull toward the world origin, applied as one impulse per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AttractionForce {
    /// `-position * strength`, independent of the frame time.
    Constant { strength: f32 },
    /// `-position * strength * dt` with the clamped frame time.
    TimeScaled { strength: f32 },
}

impl AttractionForce {
    pub const CONNECTOR: AttractionForce = AttractionForce::Constant { strength: 0.2 };
    pub const DECORATIVE: AttractionForce = AttractionForce::TimeScaled { strength: 0.02 };

    pub fn scale(&self, delta_time: f32) -> f32 {
        let dt = clamp_delta(delta_time);
        match *self {
            AttractionForce::Constant { strength } => strength,
            AttractionForce::TimeScaled { strength } => strength * dt,
        }
    }

    pub fn impulse(&self, position: &Vector3<f32>, delta_time: f32) -> Vector3<f32> {
        -position * self.scale(delta_time)
    }

    /// Pushes the body toward the origin and wakes it up.
    pub fn apply(&self, body: &mut RigidBody, delta_time: f32) -> Vector3<f32> {
        let impulse = self.impulse(body.translation(), delta_time);
        body.apply_impulse(impulse, true);
        impulse
    }
}
