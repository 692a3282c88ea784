use foundation::math::Vec2;

/// Window extent and the pixel -> normalized-device-coordinate mapping.
///
/// NDC spans [-1, 1] on both axes with +y up; pixel y grows downward.
/// Out-of-window pixels map outside that range unchanged: the pick ray then
/// simply misses everything.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width_px: f64,
    height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px: width_px.max(1.0),
            height_px: height_px.max(1.0),
        }
    }

    pub fn resize(&mut self, width_px: f64, height_px: f64) {
        *self = Self::new(width_px, height_px);
    }

    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    pub fn aspect(&self) -> f64 {
        self.width_px / self.height_px
    }

    pub fn ndc_from_px(&self, x_px: f64, y_px: f64) -> Vec2 {
        Vec2::new(
            (x_px / self.width_px) * 2.0 - 1.0,
            -(y_px / self.height_px) * 2.0 + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn window_center_is_ndc_origin() {
        let vp = Viewport::new(800.0, 600.0);
        let ndc = vp.ndc_from_px(400.0, 300.0);
        assert_eq!((ndc.x, ndc.y), (0.0, 0.0));
    }

    #[test]
    fn corners_map_to_unit_extents() {
        let vp = Viewport::new(800.0, 600.0);
        let tl = vp.ndc_from_px(0.0, 0.0);
        let br = vp.ndc_from_px(800.0, 600.0);
        assert_eq!((tl.x, tl.y), (-1.0, 1.0));
        assert_eq!((br.x, br.y), (1.0, -1.0));
    }

    #[test]
    fn resize_changes_mapping_and_aspect() {
        let mut vp = Viewport::new(100.0, 100.0);
        assert_eq!(vp.aspect(), 1.0);
        vp.resize(200.0, 100.0);
        assert_eq!(vp.aspect(), 2.0);
        let c = vp.ndc_from_px(100.0, 50.0);
        assert_eq!((c.x, c.y), (0.0, 0.0));
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let vp = Viewport::new(0.0, -5.0);
        assert!(vp.aspect().is_finite());
    }
}
