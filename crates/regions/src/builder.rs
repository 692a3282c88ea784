use foundation::math::{Mercator, Vec2};
use scene::World;
use scene::components::{
    Appearance, ComponentBounds, ComponentPrimitive, Geometry, Mesh, Polyline, PrimitiveKind,
    RegionId, Transform,
};
use scene::entity::EntityId;
use tracing::{debug, warn};

use crate::extrude::extrude_polygon;
use crate::region::{GeoPoint, GeoRegion};
use crate::ribbon::{RibbonStyle, ribbon_strip};
use crate::style::Palette;

/// The one region that receives the decorative ribbon treatment: the
/// province whose shape spans the map's visual wrap boundary. Hardcoded in
/// the source map; kept as an explicit special case rather than generalized.
pub const DESIGNATED_RIBBON_REGION: &str = "内蒙古自治区";

#[derive(Debug, Clone, PartialEq)]
pub struct BuildSettings {
    /// Solid extrusion depth, no bevel.
    pub extrude_depth: f64,
    /// Outline z, slightly above the solid top so lines never z-fight.
    pub outline_offset: f64,
    /// Region name that receives the ribbon, if any.
    pub ribbon_region: Option<String>,
    pub ribbon: RibbonStyle,
    pub palette: Palette,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            extrude_depth: 4.0,
            outline_offset: 4.01,
            ribbon_region: Some(DESIGNATED_RIBBON_REGION.to_string()),
            ribbon: RibbonStyle::default(),
            palette: Palette::default(),
        }
    }
}

#[derive(Debug)]
pub enum BuildError {
    /// A region with zero rings carries nothing to project or extrude.
    EmptyRegion { name: String },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyRegion { name } => {
                write!(f, "region {name:?} has no boundary rings")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// One-shot batch transform from boundary rings to scene primitives.
///
/// Runs once at load time; per polygon it emits one extruded solid (holes
/// subtracted) and one outline per ring, all tagged back to the region.
#[derive(Debug, Clone)]
pub struct RegionBuilder {
    projector: Mercator,
    settings: BuildSettings,
}

impl RegionBuilder {
    pub fn new(projector: Mercator, settings: BuildSettings) -> Self {
        Self {
            projector,
            settings,
        }
    }

    /// Projector and constants matching the source China map.
    pub fn china_defaults() -> Self {
        Self::new(
            Mercator::new(104.0, 37.5, 80.0, Vec2::new(0.0, 0.0)),
            BuildSettings::default(),
        )
    }

    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Projects to display space: display y is the negation of projected y
    /// (the projection's y axis grows southward; display space is y-up).
    /// Fixed sign convention, not a bug.
    pub fn project_display(&self, p: GeoPoint) -> Vec2 {
        let out = self.projector.project(p.lon_deg, p.lat_deg);
        Vec2::new(out.x, -out.y)
    }

    /// Builds one region into the world.
    ///
    /// Every successfully built region gets a record; a zero-ring region is
    /// rejected and leaves no trace in the scene.
    pub fn build(&self, world: &mut World, region: &GeoRegion) -> Result<RegionId, BuildError> {
        if region.ring_count() == 0 {
            return Err(BuildError::EmptyRegion {
                name: region.name.clone(),
            });
        }

        let center = region.center.map(|c| self.project_display(c));
        let id = world.register_region(region.name.clone(), center);

        for polygon in &region.polygons {
            let exterior: Vec<Vec2> = polygon
                .exterior
                .iter()
                .map(|p| self.project_display(*p))
                .collect();
            let holes: Vec<Vec<Vec2>> = polygon
                .holes
                .iter()
                .map(|ring| ring.iter().map(|p| self.project_display(*p)).collect())
                .collect();

            match extrude_polygon(&exterior, &holes, self.settings.extrude_depth) {
                Some(mesh) => {
                    self.spawn_solid(world, id, mesh);
                }
                None => {
                    debug!(region = %region.name, "degenerate polygon, no solid extruded");
                }
            }

            for ring in std::iter::once(&exterior).chain(holes.iter()) {
                self.spawn_outline(world, id, ring);
            }
        }

        if self
            .settings
            .ribbon_region
            .as_deref()
            .is_some_and(|name| name == region.name)
        {
            self.spawn_ribbon(world, id, region);
        }

        Ok(id)
    }

    /// Builds every region, skipping (and logging) rejected ones.
    pub fn build_all<'a>(
        &self,
        world: &mut World,
        regions: impl IntoIterator<Item = &'a GeoRegion>,
    ) -> Vec<RegionId> {
        let mut built = Vec::new();
        for region in regions {
            match self.build(world, region) {
                Ok(id) => built.push(id),
                Err(e) => warn!("skipping region: {e}"),
            }
        }
        built
    }

    fn spawn_solid(&self, world: &mut World, region: RegionId, mesh: Mesh) -> EntityId {
        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        if let Some(bounds) = ComponentBounds::from_points(mesh.vertices.iter().copied()) {
            world.set_bounds(entity, bounds);
        }
        world.set_appearance(entity, Appearance::new(self.settings.palette.solid));
        let geom = world.add_geometry(Geometry::Mesh(mesh));
        world.set_primitive(entity, ComponentPrimitive::new(geom, PrimitiveKind::Solid));
        world.attach_primitive(region, entity, PrimitiveKind::Solid);
        entity
    }

    /// Outline polyline at the fixed z offset; point count matches the
    /// source ring exactly.
    fn spawn_outline(&self, world: &mut World, region: RegionId, ring: &[Vec2]) -> EntityId {
        let z = self.settings.outline_offset;
        let vertices = ring
            .iter()
            .map(|p| foundation::math::Vec3::new(p.x, p.y, z))
            .collect();
        let polyline = Polyline::new(vertices);

        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        if let Some(bounds) = ComponentBounds::from_points(polyline.vertices.iter().copied()) {
            world.set_bounds(entity, bounds);
        }
        let geom = world.add_geometry(Geometry::Polyline(polyline));
        world.set_primitive(entity, ComponentPrimitive::new(geom, PrimitiveKind::Outline));
        world.attach_primitive(region, entity, PrimitiveKind::Outline);
        entity
    }

    fn spawn_ribbon(&self, world: &mut World, region: RegionId, source: &GeoRegion) {
        let Some(first) = source.polygons.first() else {
            return;
        };
        let mut ring: Vec<Vec2> = first
            .exterior
            .iter()
            .map(|p| self.project_display(*p))
            .collect();
        if ring.len() >= 2 {
            let first_p = ring[0];
            let last_p = ring[ring.len() - 1];
            if (first_p.x - last_p.x).abs() < 1e-9 && (first_p.y - last_p.y).abs() < 1e-9 {
                ring.pop();
            }
        }

        let Some(mesh) = ribbon_strip(&ring, self.settings.ribbon) else {
            debug!(region = %source.name, "ribbon ring too short, skipped");
            return;
        };

        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        if let Some(bounds) = ComponentBounds::from_points(mesh.vertices.iter().copied()) {
            world.set_bounds(entity, bounds);
        }
        let geom = world.add_geometry(Geometry::Mesh(mesh));
        world.set_primitive(entity, ComponentPrimitive::new(geom, PrimitiveKind::Decor));
        world.attach_primitive(region, entity, PrimitiveKind::Decor);
    }
}
