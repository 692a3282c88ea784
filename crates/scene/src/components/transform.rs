use foundation::math::Vec3;

/// Translation plus per-axis scale. Scale is applied in local space before
/// the translation; the expand gesture stretches a solid's z axis this way.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn translate(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn apply(&self, local: Vec3) -> Vec3 {
        Vec3::new(
            self.position.x + local.x * self.scale.x,
            self.position.y + local.y * self.scale.y,
            self.position.z + local.z * self.scale.z,
        )
    }
}
