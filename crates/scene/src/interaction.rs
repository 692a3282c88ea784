//! Click selection and per-frame hover.
//!
//! Selection is a two-state machine: `Idle` or exactly one expanded region.
//! Hover is not diffed against previous frames; every solid is reset to its
//! resting state and the highlight re-applied from a fresh pick, so hover can
//! never stick after the pointer leaves a region.

use foundation::math::Vec2;
use runtime::{EventBus, Frame, PointerGesture};

use crate::World;
use crate::camera::Camera;
use crate::components::{AppearanceState, ComponentBounds, Geometry, RegionId};
use crate::picking::{PickOptions, pick_ndc};

/// How an expanded region is pulled toward the viewer: the solid's extrusion
/// axis is scaled by `stretch`, and outlines move forward so they keep
/// sitting just above the stretched solid top.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExpandStyle {
    pub stretch: f64,
    /// Baseline outline z offset (outline geometry is baked at this height).
    pub outline_offset: f64,
}

impl Default for ExpandStyle {
    fn default() -> Self {
        Self {
            stretch: 1.5,
            outline_offset: 4.01,
        }
    }
}

/// Outcome of a pointer release, for callers and tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickResolution {
    /// Release ended a camera drag; selection untouched.
    Drag,
    /// Pick missed every solid; any expanded region was reverted.
    Miss,
    Selected(RegionId),
    Deselected(RegionId),
}

/// Selection state machine driven by press/move/release.
#[derive(Debug, Default)]
pub struct SelectionController {
    gesture: PointerGesture,
    expanded: Option<RegionId>,
    style: ExpandStyle,
}

impl SelectionController {
    pub fn new(style: ExpandStyle) -> Self {
        Self {
            gesture: PointerGesture::new(),
            expanded: None,
            style,
        }
    }

    pub fn expanded(&self) -> Option<RegionId> {
        self.expanded
    }

    pub fn on_press(&mut self) {
        self.gesture.on_press();
    }

    pub fn on_move(&mut self) {
        self.gesture.on_move();
    }

    /// Resolves a pointer release at `ndc`.
    ///
    /// A drag release never changes selection. A click toggles the hit
    /// region: expanding it, collapsing it if it was already expanded, or
    /// collapsing everything on a miss. The previously expanded region is
    /// always reverted before a new one is applied.
    pub fn on_release(
        &mut self,
        world: &mut World,
        camera: &Camera,
        ndc: Vec2,
        frame: Frame,
        bus: &mut EventBus,
    ) -> ClickResolution {
        if !self.gesture.on_release() {
            return ClickResolution::Drag;
        }

        let hit_region = pick_ndc(world, camera, ndc, PickOptions::default()).map(|h| h.region);

        match (self.expanded, hit_region) {
            (Some(current), Some(hit)) if current == hit => {
                self.revert(world, current);
                self.expanded = None;
                bus.emit(frame, "selection", region_message(world, "collapse", current));
                ClickResolution::Deselected(current)
            }
            (previous, Some(hit)) => {
                if let Some(prev) = previous {
                    self.revert(world, prev);
                }
                self.apply(world, hit);
                self.expanded = Some(hit);
                bus.emit(frame, "selection", region_message(world, "expand", hit));
                ClickResolution::Selected(hit)
            }
            (previous, None) => {
                if let Some(prev) = previous {
                    self.revert(world, prev);
                    bus.emit(frame, "selection", region_message(world, "collapse", prev));
                }
                self.expanded = None;
                ClickResolution::Miss
            }
        }
    }

    fn apply(&self, world: &mut World, region: RegionId) {
        self.set_region_stretch(world, region, self.style.stretch);
    }

    fn revert(&self, world: &mut World, region: RegionId) {
        self.set_region_stretch(world, region, 1.0);
    }

    /// Absolute, idempotent placement: solids get `scale.z = stretch`,
    /// outlines sit `outline_offset * (stretch - 1)` further forward.
    fn set_region_stretch(&self, world: &mut World, region: RegionId, stretch: f64) {
        let Some(record) = world.region(region) else {
            return;
        };
        let solids = record.solids.clone();
        let outlines = record.outlines.clone();

        for entity in solids {
            let Some(mut transform) = world.transform(entity) else {
                continue;
            };
            transform.scale.z = stretch;
            world.set_transform(entity, transform);
            refresh_bounds(world, entity);
        }

        let lift = self.style.outline_offset * (stretch - 1.0);
        for entity in outlines {
            let Some(mut transform) = world.transform(entity) else {
                continue;
            };
            transform.position.z = lift;
            world.set_transform(entity, transform);
        }
    }
}

/// Hover label for the display collaborator, refreshed every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverLabel {
    pub text: String,
    pub visible: bool,
}

/// Per-frame hover pass.
///
/// Resets every solid to its resting appearance (`Base`, or `Expanded` for
/// the selected region), then marks the nearest solid under the pointer as
/// `Hovered`. Returns the label state for the hovered region.
pub fn hover_pass(
    world: &mut World,
    camera: &Camera,
    pointer_ndc: Vec2,
    expanded: Option<RegionId>,
) -> HoverLabel {
    let hit = pick_ndc(world, camera, pointer_ndc, PickOptions::default());

    let solids: Vec<_> = world.solids_by_entity().iter().map(|(e, _, _)| *e).collect();
    for entity in solids {
        let resting = match (expanded, world.region_of(entity)) {
            (Some(sel), Some(owner)) if sel == owner => AppearanceState::Expanded,
            _ => AppearanceState::Base,
        };
        world.set_appearance_state(entity, resting);
    }

    let Some(hit) = hit else {
        return HoverLabel::default();
    };
    world.set_appearance_state(hit.entity, AppearanceState::Hovered);

    let text = world
        .region(hit.region)
        .map(|r| r.name.clone())
        .unwrap_or_default();
    HoverLabel {
        visible: !text.is_empty(),
        text,
    }
}

fn region_message(world: &World, verb: &str, region: RegionId) -> String {
    match world.region(region) {
        Some(record) => format!("{verb} {}", record.name),
        None => format!("{verb} region {}", region.0),
    }
}

fn refresh_bounds(world: &mut World, entity: crate::entity::EntityId) {
    let Some(transform) = world.transform(entity) else {
        return;
    };
    let Some(Geometry::Mesh(mesh)) = world
        .primitive(entity)
        .and_then(|p| world.geometry(p.geometry))
    else {
        return;
    };
    if let Some(bounds) =
        ComponentBounds::from_points(mesh.vertices.iter().map(|v| transform.apply(*v)))
    {
        world.set_bounds(entity, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickResolution, ExpandStyle, HoverLabel, SelectionController, hover_pass};
    use crate::World;
    use crate::camera::Camera;
    use crate::components::{
        Appearance, AppearanceState, ColorPair, ComponentBounds, ComponentPrimitive, Geometry,
        Mesh, Polyline, PrimitiveKind, RegionId, Transform,
    };
    use crate::entity::EntityId;
    use foundation::math::{Vec2, Vec3};
    use runtime::{EventBus, Frame};

    const BASE: ColorPair = ColorPair::new([0.0, 0.6, 0.9, 0.6], [0.2, 0.5, 0.8, 0.5]);

    /// Flat unit quad at `center` in the z = 0 plane, plus its outline.
    fn spawn_region(world: &mut World, name: &str, cx: f64, cy: f64) -> (RegionId, EntityId) {
        let region = world.register_region(name, Some(Vec2::new(cx, cy)));

        let solid = world.spawn();
        world.set_transform(solid, Transform::identity());
        let mesh = Mesh::new(
            vec![
                Vec3::new(cx - 0.5, cy - 0.5, 0.0),
                Vec3::new(cx + 0.5, cy - 0.5, 0.0),
                Vec3::new(cx + 0.5, cy + 0.5, 0.0),
                Vec3::new(cx - 0.5, cy + 0.5, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        world.set_bounds(
            solid,
            ComponentBounds::from_points(mesh.vertices.iter().copied()).unwrap(),
        );
        let geom = world.add_geometry(Geometry::Mesh(mesh));
        world.set_primitive(solid, ComponentPrimitive::new(geom, PrimitiveKind::Solid));
        world.set_appearance(solid, Appearance::new(BASE));
        world.attach_primitive(region, solid, PrimitiveKind::Solid);

        let outline = world.spawn();
        world.set_transform(outline, Transform::identity());
        let line = world.add_geometry(Geometry::Polyline(Polyline::new(vec![
            Vec3::new(cx - 0.5, cy - 0.5, 4.01),
            Vec3::new(cx + 0.5, cy - 0.5, 4.01),
        ])));
        world.set_primitive(outline, ComponentPrimitive::new(line, PrimitiveKind::Outline));
        world.attach_primitive(region, outline, PrimitiveKind::Outline);

        (region, solid)
    }

    /// Camera straight above the z = 0 plane so NDC x/y track plane x/y.
    fn overhead_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 0.0, 0.0),
            45.0,
            1.0,
        )
    }

    /// NDC that lands the overhead camera's ray on plane point (x, y).
    fn ndc_over(x: f64, y: f64) -> Vec2 {
        let tan_half = (45.0f64.to_radians() * 0.5).tan();
        Vec2::new(x / (100.0 * tan_half), y / (100.0 * tan_half))
    }

    fn click(
        ctl: &mut SelectionController,
        world: &mut World,
        camera: &Camera,
        ndc: Vec2,
        bus: &mut EventBus,
    ) -> ClickResolution {
        ctl.on_press();
        ctl.on_release(world, camera, ndc, Frame::new(0, 1.0 / 60.0), bus)
    }

    #[test]
    fn click_expands_then_collapses_same_region() {
        let mut world = World::new();
        let (region, solid) = spawn_region(&mut world, "四川省", 0.0, 0.0);
        let camera = overhead_camera();
        let mut bus = EventBus::new();
        let mut ctl = SelectionController::new(ExpandStyle::default());

        let r = click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        assert_eq!(r, ClickResolution::Selected(region));
        assert_eq!(ctl.expanded(), Some(region));
        assert_eq!(world.transform(solid).unwrap().scale.z, 1.5);

        let r = click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        assert_eq!(r, ClickResolution::Deselected(region));
        assert_eq!(ctl.expanded(), None);
        assert_eq!(world.transform(solid).unwrap().scale.z, 1.0);
    }

    #[test]
    fn clicking_another_region_reverts_the_first() {
        let mut world = World::new();
        let (region_a, solid_a) = spawn_region(&mut world, "四川省", -2.0, 0.0);
        let (region_b, solid_b) = spawn_region(&mut world, "云南省", 2.0, 0.0);
        let camera = overhead_camera();
        let mut bus = EventBus::new();
        let mut ctl = SelectionController::new(ExpandStyle::default());

        assert_eq!(
            click(&mut ctl, &mut world, &camera, ndc_over(-2.0, 0.0), &mut bus),
            ClickResolution::Selected(region_a)
        );
        assert_eq!(
            click(&mut ctl, &mut world, &camera, ndc_over(2.0, 0.0), &mut bus),
            ClickResolution::Selected(region_b)
        );
        assert_eq!(ctl.expanded(), Some(region_b));
        assert_eq!(world.transform(solid_a).unwrap().scale.z, 1.0);
        assert_eq!(world.transform(solid_b).unwrap().scale.z, 1.5);
    }

    #[test]
    fn click_miss_collapses_selection() {
        let mut world = World::new();
        let (region, solid) = spawn_region(&mut world, "四川省", 0.0, 0.0);
        let camera = overhead_camera();
        let mut bus = EventBus::new();
        let mut ctl = SelectionController::new(ExpandStyle::default());

        click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        assert_eq!(ctl.expanded(), Some(region));

        let r = click(&mut ctl, &mut world, &camera, ndc_over(40.0, 40.0), &mut bus);
        assert_eq!(r, ClickResolution::Miss);
        assert_eq!(ctl.expanded(), None);
        assert_eq!(world.transform(solid).unwrap().scale.z, 1.0);
    }

    #[test]
    fn drag_release_never_changes_selection() {
        let mut world = World::new();
        let (region, _) = spawn_region(&mut world, "四川省", 0.0, 0.0);
        let camera = overhead_camera();
        let mut bus = EventBus::new();
        let mut ctl = SelectionController::new(ExpandStyle::default());

        click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        assert_eq!(ctl.expanded(), Some(region));

        // Press, move (camera drag), release right on top of the region.
        ctl.on_press();
        ctl.on_move();
        let r = ctl.on_release(
            &mut world,
            &camera,
            ndc_over(0.0, 0.0),
            Frame::new(1, 1.0 / 60.0),
            &mut bus,
        );
        assert_eq!(r, ClickResolution::Drag);
        assert_eq!(ctl.expanded(), Some(region));
    }

    #[test]
    fn expand_lifts_outlines_and_revert_restores_them() {
        let mut world = World::new();
        let (region, _) = spawn_region(&mut world, "四川省", 0.0, 0.0);
        let camera = overhead_camera();
        let mut bus = EventBus::new();
        let mut ctl = SelectionController::new(ExpandStyle::default());

        click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        let outline = world.region(region).unwrap().outlines[0];
        let lifted = world.transform(outline).unwrap().position.z;
        assert!((lifted - 4.01 * 0.5).abs() < 1e-12);

        click(&mut ctl, &mut world, &camera, ndc_over(0.0, 0.0), &mut bus);
        assert_eq!(world.transform(outline).unwrap().position.z, 0.0);
    }

    #[test]
    fn hover_marks_exactly_the_hit_solid() {
        let mut world = World::new();
        let (_, solid_a) = spawn_region(&mut world, "四川省", -2.0, 0.0);
        let (_, solid_b) = spawn_region(&mut world, "云南省", 2.0, 0.0);
        let camera = overhead_camera();

        let label = hover_pass(&mut world, &camera, ndc_over(-2.0, 0.0), None);
        assert_eq!(
            label,
            HoverLabel {
                text: "四川省".to_string(),
                visible: true
            }
        );
        assert_eq!(
            world.appearance(solid_a).unwrap().state,
            AppearanceState::Hovered
        );
        assert_eq!(
            world.appearance(solid_b).unwrap().state,
            AppearanceState::Base
        );

        // Pointer moves off every region: everything restores in one pass.
        let label = hover_pass(&mut world, &camera, ndc_over(40.0, 40.0), None);
        assert_eq!(label, HoverLabel::default());
        assert_eq!(
            world.appearance(solid_a).unwrap().state,
            AppearanceState::Base
        );
        assert_eq!(
            world.appearance(solid_b).unwrap().state,
            AppearanceState::Base
        );
    }

    #[test]
    fn expanded_region_rests_at_expanded_not_base() {
        let mut world = World::new();
        let (region_a, solid_a) = spawn_region(&mut world, "四川省", -2.0, 0.0);
        let (_, solid_b) = spawn_region(&mut world, "云南省", 2.0, 0.0);
        let camera = overhead_camera();

        let _ = hover_pass(&mut world, &camera, ndc_over(2.0, 0.0), Some(region_a));
        assert_eq!(
            world.appearance(solid_a).unwrap().state,
            AppearanceState::Expanded
        );
        assert_eq!(
            world.appearance(solid_b).unwrap().state,
            AppearanceState::Hovered
        );
    }
}
