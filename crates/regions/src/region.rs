#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Ordered, implicitly-closed boundary ring in geographic degrees.
pub type Ring = Vec<GeoPoint>;

/// One polygon of a region: an exterior ring plus its holes.
///
/// Rings after the first in the source data belong to the preceding exterior
/// as holes; they never start a new region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoPolygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl GeoPolygon {
    pub fn new(exterior: Ring) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    pub fn ring_count(&self) -> usize {
        1 + self.holes.len()
    }
}

/// A named geographic area, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRegion {
    pub name: String,
    pub polygons: Vec<GeoPolygon>,
    pub center: Option<GeoPoint>,
}

impl GeoRegion {
    pub fn new(name: impl Into<String>, polygons: Vec<GeoPolygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
            center: None,
        }
    }

    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(GeoPolygon::ring_count).sum()
    }
}
