//! Scene composition: house placement, the bounds-driven bootstrap, and the
//! per-frame state both front-ends drive.

use crate::camera::Camera;
use crate::constants::{
    FOLLOWER_FORWARD_LIMIT, FOLLOWER_GROUND_OFFSET, FOLLOWER_ROOF_CLEARANCE, HERO_WAYPOINT_DY,
    HOUSE_FIT_PADDING, HOUSE_HEIGHT, HOUSE_YAW_DEG, PROJECTS_WAYPOINT_DY, SECTION_TWEEN_SEC,
};
use crate::controls::{CameraRig, ControlsLimits};
use crate::follower::{Follower, FollowerParams, FollowerTransform};
use crate::geometry::Aabb;
use crate::glb::ModelSummary;
use crate::panels::{panel_visible, HudAnchor, PanelId, PanelLayout, PanelTransform};
use crate::sections::{FitOptions, SectionId, SectionNavigator};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Orientation and uniform scale of the house model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HousePlacement {
    model_bounds: Aabb,
    yaw_deg: f32,
    scale: f32,
}

impl HousePlacement {
    /// Default site placement: turned `HOUSE_YAW_DEG` and scaled to
    /// `HOUSE_HEIGHT` metres tall.
    pub fn new(model_bounds: Aabb) -> Self {
        let h = model_bounds.size().y;
        let h = if h > 1e-6 && h.is_finite() { h } else { 1.0 };
        Self {
            model_bounds,
            yaw_deg: HOUSE_YAW_DEG,
            scale: HOUSE_HEIGHT / h,
        }
    }

    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn rotate_deg(&mut self, d: f32) {
        self.yaw_deg += d;
    }

    pub fn scale_by(&mut self, f: f32) {
        if f > 0.0 && f.is_finite() {
            self.scale *= f;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw_deg.to_radians()),
            Vec3::ZERO,
        )
    }

    pub fn world_bounds(&self) -> Aabb {
        self.model_bounds.transformed(self.matrix())
    }
}

/// Fit the three waypoints to the house, then lower Hero and raise Projects.
pub fn configure_sections(nav: &mut SectionNavigator, rig: &CameraRig, bounds: Aabb) {
    nav.configure_from_bounds(rig, bounds, FitOptions::with_padding(HOUSE_FIT_PADDING));
    for (id, dy) in [
        (SectionId::Hero, HERO_WAYPOINT_DY),
        (SectionId::Projects, PROJECTS_WAYPOINT_DY),
    ] {
        if let Some(wp) = nav.waypoint(id) {
            let wp = wp.shifted_y(dy);
            nav.set_waypoint(id, wp.position, wp.look_target);
        }
    }
}

/// Everything that depends on the house's world bounds.
pub fn apply_house_bounds(
    nav: &mut SectionNavigator,
    rig: &mut CameraRig,
    follower: &mut Follower,
    bounds: Aabb,
) {
    let bounds = match bounds.validated() {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[scene] house bounds rejected: {}", e);
            return;
        }
    };
    configure_sections(nav, rig, bounds);
    nav.snap_to(rig, SectionId::Hero);

    follower.set_ground_from_bounds(bounds, FOLLOWER_GROUND_OFFSET);
    follower.set_forward_limit(Some(FOLLOWER_FORWARD_LIMIT));
    let c = bounds.center();
    let roof = Vec3::new(c.x, bounds.max.y + FOLLOWER_ROOF_CLEARANCE, c.z);
    follower.set_anchor(&rig.camera, roof, true);
    follower.set_base_length(0.6);
    follower.set_rope_limits(0.25, 2.0);
}

/// All per-frame state of the portfolio scene.
pub struct Portfolio {
    pub rig: CameraRig,
    pub nav: SectionNavigator,
    pub follower: Follower,
    pub panels: PanelLayout,
    pub hud: HudAnchor,
    house: Option<HousePlacement>,
    viewport: Vec2,
}

impl Portfolio {
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        let mut camera = Camera::default();
        camera.set_viewport(viewport.x, viewport.y);
        let mut rig = CameraRig::new(camera);
        rig.controls.limits = ControlsLimits::site();
        let follower = Follower::new(FollowerParams::default(), &rig.camera, viewport, seed);
        Self {
            rig,
            nav: SectionNavigator::new(),
            follower,
            panels: PanelLayout::default(),
            hud: HudAnchor::default(),
            house: None,
            viewport,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.rig.camera.set_viewport(viewport.x, viewport.y);
    }

    pub fn house(&self) -> Option<&HousePlacement> {
        self.house.as_ref()
    }

    /// Place a loaded model as the house; models without geometry fall back
    /// to a unit cube.
    pub fn install_house(&mut self, model: &ModelSummary) {
        let bounds = model.bounds.unwrap_or_else(|| {
            log::warn!("[scene] house model has no position bounds; using a unit cube");
            Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))
        });
        let placement = HousePlacement::new(bounds);
        self.house = Some(placement);
        apply_house_bounds(
            &mut self.nav,
            &mut self.rig,
            &mut self.follower,
            placement.world_bounds(),
        );
    }

    /// Change the placement and refit the waypoints to it.
    pub fn modify_house(&mut self, f: impl FnOnce(&mut HousePlacement)) -> Option<Aabb> {
        let house = self.house.as_mut()?;
        f(house);
        let bounds = house.world_bounds();
        configure_sections(&mut self.nav, &self.rig, bounds);
        Some(bounds)
    }

    pub fn go_to(&mut self, id: SectionId) -> bool {
        self.nav.go_to(&mut self.rig, id, SECTION_TWEEN_SEC)
    }

    pub fn on_pointer_move(&mut self, client_px: Vec2) {
        self.follower.on_pointer_move(client_px, self.viewport);
    }

    /// Navigator, follower, then orbit controls.
    pub fn tick(&mut self, dt: f32) -> FollowerTransform {
        self.nav.update(&mut self.rig, dt);
        let t = self.follower.update(dt, &self.rig.camera);
        let CameraRig { camera, controls } = &mut self.rig;
        controls.update(camera);
        t
    }

    /// Visible panels with their billboarded transforms.
    pub fn visible_panels(&self) -> Vec<(PanelId, PanelTransform)> {
        let current = self.nav.current();
        PanelId::ALL
            .iter()
            .filter(|id| panel_visible(**id, current))
            .map(|&id| (id, self.panels.transform(id, self.rig.position())))
            .collect()
    }

    pub fn hud_transform(&self) -> PanelTransform {
        self.hud.world(&self.rig.camera, self.viewport.y)
    }
}
