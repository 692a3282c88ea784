/// Identity of a built region within the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

/// Back-reference from a primitive entity to its owning region.
///
/// Stored at build time so pick hits resolve to a region in O(1), without
/// walking any containment hierarchy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RegionTag {
    pub region: RegionId,
}

impl RegionTag {
    pub fn new(region: RegionId) -> Self {
        Self { region }
    }
}
