//! Cylindrical Mercator projector for country-scale extents.
//!
//! The projector is pure: identical inputs always produce identical outputs,
//! and any finite (lon, lat) away from the poles produces a finite point.
//! Projected y grows southward (screen convention); callers that want y-up
//! display space negate it.

use super::Vec2;

/// Mercator projection configured with a center, linear scale and
/// post-projection translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mercator {
    center_lon_deg: f64,
    center_lat_deg: f64,
    scale: f64,
    translate: Vec2,
}

impl Mercator {
    pub fn new(center_lon_deg: f64, center_lat_deg: f64, scale: f64, translate: Vec2) -> Self {
        Self {
            center_lon_deg,
            center_lat_deg,
            scale,
            translate,
        }
    }

    /// Projects geographic degrees to planar coordinates.
    ///
    /// `x = tx + k (λ − λ0)`, `y = ty − k (ψ − ψ0)` with
    /// `ψ = ln tan(π/4 + φ/2)`.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Vec2 {
        let lam = lon_deg.to_radians();
        let lam0 = self.center_lon_deg.to_radians();
        let psi = vertical_stretch(lat_deg);
        let psi0 = vertical_stretch(self.center_lat_deg);

        Vec2::new(
            self.translate.x + self.scale * (lam - lam0),
            self.translate.y - self.scale * (psi - psi0),
        )
    }
}

fn vertical_stretch(lat_deg: f64) -> f64 {
    let phi = lat_deg.to_radians();
    (std::f64::consts::FRAC_PI_4 + phi * 0.5).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::Mercator;
    use crate::math::Vec2;

    fn china_projector() -> Mercator {
        Mercator::new(104.0, 37.5, 80.0, Vec2::new(0.0, 0.0))
    }

    #[test]
    fn center_maps_to_translation() {
        let p = Mercator::new(104.0, 37.5, 80.0, Vec2::new(3.0, -2.0));
        let out = p.project(104.0, 37.5);
        assert!((out.x - 3.0).abs() < 1e-12);
        assert!((out.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn finite_over_china_extent() {
        let p = china_projector();
        let mut lon = 73.0;
        while lon <= 135.0 {
            let mut lat = 18.0;
            while lat <= 54.0 {
                let out = p.project(lon, lat);
                assert!(out.x.is_finite() && out.y.is_finite(), "({lon}, {lat})");
                lat += 1.0;
            }
            lon += 1.0;
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let p = china_projector();
        assert_eq!(p.project(116.4, 39.9), p.project(116.4, 39.9));
    }

    #[test]
    fn north_has_smaller_projected_y() {
        // Screen convention: y grows southward.
        let p = china_projector();
        let harbin = p.project(126.5, 45.8);
        let guangzhou = p.project(113.3, 23.1);
        assert!(harbin.y < guangzhou.y);
    }

    #[test]
    fn east_has_larger_x() {
        let p = china_projector();
        let shanghai = p.project(121.5, 31.2);
        let chengdu = p.project(104.1, 30.7);
        assert!(shanghai.x > chengdu.x);
    }
}
