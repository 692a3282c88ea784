//! Per-view wiring: one `MapView` owns the world, camera, viewport and
//! interaction state, and is driven by the host's pointer events and frame
//! ticks. Everything runs on one thread; pointer handlers and frame passes
//! never overlap.

use formats::ViewerConfig;
use foundation::math::{Mercator, Vec2, Vec3};
use regions::{BuildSettings, GeoRegion, RegionBuilder};
use runtime::{EventBus, Frame, PointerEvent, Viewport};
use scene::World;
use scene::camera::Camera;
use scene::components::RegionId;
use scene::interaction::{ClickResolution, ExpandStyle, HoverLabel, SelectionController, hover_pass};

pub struct MapView {
    world: World,
    camera: Camera,
    viewport: Viewport,
    builder: RegionBuilder,
    selection: SelectionController,
    events: EventBus,
    frame: Frame,
    pointer_ndc: Vec2,
    label: HoverLabel,
}

impl MapView {
    pub fn new(config: &ViewerConfig, width_px: f64, height_px: f64) -> Self {
        let viewport = Viewport::new(width_px, height_px);

        let [ex, ey, ez] = config.camera.eye;
        let mut camera = Camera::new(
            Vec3::new(ex, ey, ez),
            Vec3::new(0.0, 0.0, 0.0),
            config.camera.fov_y_deg,
            1.0,
        );
        camera.set_aspect(viewport.aspect());

        let [clon, clat] = config.projection.center;
        let [tx, ty] = config.projection.translate;
        let projector = Mercator::new(clon, clat, config.projection.scale, Vec2::new(tx, ty));
        let builder = RegionBuilder::new(
            projector,
            BuildSettings {
                extrude_depth: config.extrusion.depth,
                outline_offset: config.extrusion.outline_offset,
                ribbon_region: config.ribbon_region_name(),
                ..BuildSettings::default()
            },
        );

        let selection = SelectionController::new(ExpandStyle {
            stretch: config.extrusion.stretch,
            outline_offset: config.extrusion.outline_offset,
        });

        let mut world = World::new();
        crate::backdrop::spawn_backdrop(&mut world);

        Self {
            world,
            camera,
            viewport,
            builder,
            selection,
            events: EventBus::new(),
            frame: Frame::new(0, 1.0 / 60.0),
            pointer_ndc: Vec2::new(0.0, 0.0),
            label: HoverLabel::default(),
        }
    }

    /// Builds all loaded regions into the view. Runs once, before the frame
    /// loop; rejected regions are skipped inside the builder.
    pub fn load_regions(&mut self, loaded: &[GeoRegion]) -> Vec<RegionId> {
        self.builder.build_all(&mut self.world, loaded)
    }

    /// Host pointer input. Press/move feed the gesture tracker; release may
    /// resolve a click against the scene.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<ClickResolution> {
        let (x_px, y_px) = event.position_px();
        self.pointer_ndc = self.viewport.ndc_from_px(x_px, y_px);

        match event {
            PointerEvent::Press { .. } => {
                self.selection.on_press();
                None
            }
            PointerEvent::Move { .. } => {
                self.selection.on_move();
                None
            }
            PointerEvent::Release { .. } => Some(self.selection.on_release(
                &mut self.world,
                &self.camera,
                self.pointer_ndc,
                self.frame,
                &mut self.events,
            )),
        }
    }

    /// One frame pass: recompute hover from the live pointer position and
    /// refresh the label. Hover state is rebuilt, not diffed.
    pub fn tick(&mut self) -> HoverLabel {
        self.label = hover_pass(
            &mut self.world,
            &self.camera,
            self.pointer_ndc,
            self.selection.expanded(),
        );
        self.frame = self.frame.next();
        self.label.clone()
    }

    /// Window resize: the viewport mapping and camera aspect re-derive; the
    /// scene itself is unaffected.
    pub fn resize(&mut self, width_px: f64, height_px: f64) {
        self.viewport.resize(width_px, height_px);
        self.camera.set_aspect(self.viewport.aspect());
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn expanded_region(&self) -> Option<RegionId> {
        self.selection.expanded()
    }

    pub fn label(&self) -> &HoverLabel {
        &self.label
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn drain_events(&mut self) -> Vec<runtime::Event> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::MapView;
    use formats::ViewerConfig;
    use regions::{GeoPoint, GeoPolygon, GeoRegion};
    use runtime::PointerEvent;
    use scene::components::AppearanceState;
    use scene::interaction::ClickResolution;

    const W: f64 = 800.0;
    const H: f64 = 800.0;

    fn view_with_square() -> (MapView, scene::components::RegionId) {
        let mut view = MapView::new(&ViewerConfig::default(), W, H);
        // 1°x1° square centered on the projection center, so its projected
        // center lands at display (0, 0) — the middle of the window.
        let region = GeoRegion::new(
            "中心省",
            vec![GeoPolygon::new(vec![
                GeoPoint::new(103.5, 37.0),
                GeoPoint::new(104.5, 37.0),
                GeoPoint::new(104.5, 38.0),
                GeoPoint::new(103.5, 38.0),
            ])],
        );
        let built = view.load_regions(&[region]);
        assert_eq!(built.len(), 1);
        (view, built[0])
    }

    fn click_at(view: &mut MapView, x_px: f64, y_px: f64) -> Option<ClickResolution> {
        view.handle_pointer(PointerEvent::Press { x_px, y_px });
        view.handle_pointer(PointerEvent::Release { x_px, y_px })
    }

    #[test]
    fn hover_in_window_center_labels_the_region() {
        let (mut view, _) = view_with_square();
        view.handle_pointer(PointerEvent::Move {
            x_px: W / 2.0,
            y_px: H / 2.0,
        });
        let label = view.tick();
        assert!(label.visible);
        assert_eq!(label.text, "中心省");

        // Off the map: label hides within one frame.
        view.handle_pointer(PointerEvent::Move { x_px: 5.0, y_px: 5.0 });
        let label = view.tick();
        assert!(!label.visible);
    }

    #[test]
    fn click_toggles_expansion() {
        let (mut view, region) = view_with_square();

        let r = click_at(&mut view, W / 2.0, H / 2.0);
        assert_eq!(r, Some(ClickResolution::Selected(region)));
        assert_eq!(view.expanded_region(), Some(region));

        let r = click_at(&mut view, W / 2.0, H / 2.0);
        assert_eq!(r, Some(ClickResolution::Deselected(region)));
        assert_eq!(view.expanded_region(), None);
    }

    #[test]
    fn drag_gesture_is_ignored() {
        let (mut view, _) = view_with_square();
        view.handle_pointer(PointerEvent::Press {
            x_px: W / 2.0,
            y_px: H / 2.0,
        });
        view.handle_pointer(PointerEvent::Move {
            x_px: W / 2.0 + 30.0,
            y_px: H / 2.0,
        });
        let r = view.handle_pointer(PointerEvent::Release {
            x_px: W / 2.0,
            y_px: H / 2.0,
        });
        assert_eq!(r, Some(ClickResolution::Drag));
        assert_eq!(view.expanded_region(), None);
    }

    #[test]
    fn expanded_solid_rests_expanded_during_hover_elsewhere() {
        let (mut view, region) = view_with_square();
        click_at(&mut view, W / 2.0, H / 2.0);

        view.handle_pointer(PointerEvent::Move { x_px: 5.0, y_px: 5.0 });
        view.tick();

        let solid = view.world().region(region).unwrap().solids[0];
        assert_eq!(
            view.world().appearance(solid).unwrap().state,
            AppearanceState::Expanded
        );
    }

    #[test]
    fn resize_rederives_camera_aspect() {
        let (mut view, _) = view_with_square();
        assert_eq!(view.camera().aspect, 1.0);
        view.resize(1600.0, 800.0);
        assert_eq!(view.camera().aspect, 2.0);
        // The window center still maps to NDC origin after resize.
        let ndc = view.viewport().ndc_from_px(800.0, 400.0);
        assert_eq!((ndc.x, ndc.y), (0.0, 0.0));
    }

    #[test]
    fn selection_transitions_are_recorded() {
        let (mut view, _) = view_with_square();
        click_at(&mut view, W / 2.0, H / 2.0);
        let events = view.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, "selection");
        assert!(events[0].message.contains("中心省"));
    }
}
