//! Decorative ribbon for the designated wrap-boundary region.
//!
//! A narrow vertical strip that follows the region's outer ring, floating
//! above the extruded solid. One hardcoded region receives it in the source
//! map (the one whose shape spans the visual wrap boundary); the treatment is
//! additive and never replaces the normal solid/outline pair.

use foundation::math::{Vec2, Vec3};
use scene::components::Mesh;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RibbonStyle {
    /// Height of the strip along z.
    pub width: f64,
    /// z of the strip's lower edge.
    pub lift: f64,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            width: 4.0,
            lift: 10.0,
        }
    }
}

/// Builds the ribbon strip along `ring` (projected display coordinates).
///
/// The ring closes implicitly: the strip's last segment connects the final
/// point back to the first. Returns `None` for rings with fewer than 2
/// distinct points.
pub fn ribbon_strip(ring: &[Vec2], style: RibbonStyle) -> Option<Mesh> {
    if ring.len() < 2 {
        return None;
    }

    let mut vertices: Vec<Vec3> = Vec::with_capacity((ring.len() + 1) * 2);
    for p in ring.iter().chain(std::iter::once(&ring[0])) {
        vertices.push(Vec3::new(p.x, p.y, style.lift));
        vertices.push(Vec3::new(p.x, p.y, style.lift + style.width));
    }

    let segments = ring.len();
    let mut indices: Vec<u32> = Vec::with_capacity(segments * 6);
    for s in 0..segments {
        let low = (s * 2) as u32;
        let high = low + 1;
        let next_low = low + 2;
        let next_high = low + 3;
        indices.extend([low, next_low, next_high]);
        indices.extend([low, next_high, high]);
    }

    Some(Mesh::new(vertices, indices))
}
