use foundation::math::{Vec2, Vec3};

use crate::picking::Ray;

/// Perspective look-at camera.
///
/// Only the ray-casting side of the camera lives in the core; rendering and
/// orbit control are collaborator concerns. The default matches the source
/// view: eye at (0, 0, 150) looking at the origin with a 45° vertical fov.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_deg: f64,
    pub aspect: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 150.0),
            target: Vec3::new(0.0, 0.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y_deg: 45.0,
            aspect: 1.0,
        }
    }
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, fov_y_deg: f64, aspect: f64) -> Self {
        Self {
            eye,
            target,
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y_deg,
            aspect,
        }
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Ray from the eye through a normalized device coordinate.
    ///
    /// NDC outside [-1, 1] is passed through unchanged; the ray then misses
    /// the scene rather than erroring.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let forward = (self.target - self.eye)
            .normalized()
            .unwrap_or(Vec3::new(0.0, 0.0, -1.0));
        let right = forward
            .cross(self.up)
            .normalized()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = right.cross(forward);

        let tan_half = (self.fov_y_deg.to_radians() * 0.5).tan();
        let dir = forward + right * (ndc.x * tan_half * self.aspect) + up * (ndc.y * tan_half);
        Ray::new(self.eye, dir)
    }
}
