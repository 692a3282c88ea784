use crate::components::{
    Appearance, AppearanceState, ComponentBounds, ComponentPrimitive, Geometry, GeometryId,
    PrimitiveKind, RegionId, RegionTag, Transform, Visibility,
};
use crate::entity::EntityId;
use foundation::handles::Handle;
use foundation::math::Vec2;

/// One built region: identity plus the primitives generated for it.
///
/// The record is total over a region's primitives; rejected (empty) regions
/// never get a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub name: String,
    /// Projected, display-space representative point, when the source data
    /// provides one.
    pub center: Option<Vec2>,
    pub solids: Vec<EntityId>,
    pub outlines: Vec<EntityId>,
    pub decors: Vec<EntityId>,
}

impl RegionRecord {
    fn new(name: String, center: Option<Vec2>) -> Self {
        Self {
            name,
            center,
            solids: Vec::new(),
            outlines: Vec::new(),
            decors: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    transforms: Vec<Option<Transform>>,
    bounds: Vec<Option<ComponentBounds>>,
    visibility: Vec<Option<Visibility>>,
    appearances: Vec<Option<Appearance>>,
    region_tags: Vec<Option<RegionTag>>,
    primitives: Vec<Option<ComponentPrimitive>>,
    geometries: Vec<Geometry>,
    regions: Vec<RegionRecord>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        let idx = id.index() as usize;
        self.ensure_capacity(idx);
        id
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.ensure_capacity(entity.index() as usize);
        self.transforms[entity.index() as usize] = Some(transform);
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(entity.index() as usize).and_then(|t| *t)
    }

    pub fn set_bounds(&mut self, entity: EntityId, bounds: ComponentBounds) {
        self.ensure_capacity(entity.index() as usize);
        self.bounds[entity.index() as usize] = Some(bounds);
    }

    pub fn bounds(&self, entity: EntityId) -> Option<ComponentBounds> {
        self.bounds.get(entity.index() as usize).and_then(|b| *b)
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        self.ensure_capacity(entity.index() as usize);
        self.visibility[entity.index() as usize] = Some(visibility);
    }

    pub fn set_appearance(&mut self, entity: EntityId, appearance: Appearance) {
        self.ensure_capacity(entity.index() as usize);
        self.appearances[entity.index() as usize] = Some(appearance);
    }

    pub fn appearance(&self, entity: EntityId) -> Option<Appearance> {
        self.appearances.get(entity.index() as usize).and_then(|a| *a)
    }

    pub fn set_appearance_state(&mut self, entity: EntityId, state: AppearanceState) {
        if let Some(Some(a)) = self.appearances.get_mut(entity.index() as usize) {
            a.state = state;
        }
    }

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryId {
        let id = GeometryId(self.geometries.len() as u32);
        self.geometries.push(geometry);
        id
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(id.0 as usize)
    }

    pub fn set_primitive(&mut self, entity: EntityId, component: ComponentPrimitive) {
        self.ensure_capacity(entity.index() as usize);
        self.primitives[entity.index() as usize] = Some(component);
    }

    pub fn primitive(&self, entity: EntityId) -> Option<ComponentPrimitive> {
        self.primitives.get(entity.index() as usize).and_then(|p| *p)
    }

    /// Visible primitive entities with their transforms, in ascending entity
    /// index order.
    pub fn primitives_by_entity(&self) -> Vec<(EntityId, Transform, ComponentPrimitive)> {
        let mut out = Vec::new();
        for (idx, comp) in self.primitives.iter().enumerate() {
            let Some(comp) = comp else { continue };
            let Some(transform) = self.transforms.get(idx).and_then(|t| *t) else {
                continue;
            };
            let visible = self
                .visibility
                .get(idx)
                .and_then(|v| *v)
                .map(|v| v.visible)
                .unwrap_or(true);
            if !visible {
                continue;
            }

            out.push((EntityId(Handle::new(idx as u32, 0)), transform, *comp));
        }
        out
    }

    /// Visible solid primitives only (the pickable set).
    pub fn solids_by_entity(&self) -> Vec<(EntityId, Transform, ComponentPrimitive)> {
        self.primitives_by_entity()
            .into_iter()
            .filter(|(_, _, comp)| comp.kind == PrimitiveKind::Solid)
            .collect()
    }

    pub fn register_region(&mut self, name: impl Into<String>, center: Option<Vec2>) -> RegionId {
        let id = RegionId(self.regions.len() as u32);
        self.regions.push(RegionRecord::new(name.into(), center));
        id
    }

    /// Records `entity` under `region` and stores the back-reference tag.
    pub fn attach_primitive(&mut self, region: RegionId, entity: EntityId, kind: PrimitiveKind) {
        self.ensure_capacity(entity.index() as usize);
        self.region_tags[entity.index() as usize] = Some(RegionTag::new(region));
        let Some(record) = self.regions.get_mut(region.0 as usize) else {
            return;
        };
        match kind {
            PrimitiveKind::Solid => record.solids.push(entity),
            PrimitiveKind::Outline => record.outlines.push(entity),
            PrimitiveKind::Decor => record.decors.push(entity),
        }
    }

    /// Reverse lookup from a primitive entity to its owning region, O(1).
    pub fn region_of(&self, entity: EntityId) -> Option<RegionId> {
        self.region_tags
            .get(entity.index() as usize)
            .and_then(|t| *t)
            .map(|t| t.region)
    }

    pub fn region(&self, id: RegionId) -> Option<&RegionRecord> {
        self.regions.get(id.0 as usize)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.regions.len() as u32).map(RegionId)
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.bounds.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.appearances.resize(new_len, None);
            self.region_tags.resize(new_len, None);
            self.primitives.resize(new_len, None);
        }
    }
}
