use foundation::math::Vec3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryId(pub u32);

/// Role of a primitive within its region.
///
/// Only `Solid` primitives participate in picking; outlines and decorative
/// geometry (ribbon, backdrop) are render-only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Solid,
    Outline,
    Decor,
}

/// Indexed triangle mesh in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    /// Flat triangle index list, 3 entries per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangle(&self, i: usize) -> Option<[Vec3; 3]> {
        let a = *self.vertices.get(*self.indices.get(i * 3)? as usize)?;
        let b = *self.vertices.get(*self.indices.get(i * 3 + 1)? as usize)?;
        let c = *self.vertices.get(*self.indices.get(i * 3 + 2)? as usize)?;
        Some([a, b, c])
    }
}

/// Open polyline in local coordinates (a ring outline repeats no point;
/// closure back to the first vertex is implicit).
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub vertices: Vec<Vec3>,
}

impl Polyline {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Mesh(Mesh),
    Polyline(Polyline),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComponentPrimitive {
    pub geometry: GeometryId,
    pub kind: PrimitiveKind,
}

impl ComponentPrimitive {
    pub fn new(geometry: GeometryId, kind: PrimitiveKind) -> Self {
        Self { geometry, kind }
    }
}
