use nalgebra::{Vector2, Vector3};

/// Perspective camera looking at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vector3::new(0.0, 0.0, 15.0),
            fov: 17.5,
            near: 1.0,
            far: 20.0,
        }
    }
}

impl Camera {
    /// World-space width and height visible on the plane through the origin.
    pub fn viewport(&self, aspect: f32) -> Vector2<f32> {
        let distance = self.position.norm();
        let height = 2.0 * (self.fov.to_radians() / 2.0).tan() * distance;
        Vector2::new(height * aspect, height)
    }
}
