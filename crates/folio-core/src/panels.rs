//! World-space content panels and the camera-locked navigation HUD.

use crate::camera::Camera;
use crate::constants::{HUD_DISTANCE, HUD_MARGIN_PX, PANEL_SCALE};
use crate::sections::SectionId;
use glam::{EulerRot, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Hero,
    Skills,
    Projects,
    /// Social links, shown alongside the hero panel.
    Social,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::Hero,
        PanelId::Skills,
        PanelId::Projects,
        PanelId::Social,
    ];

    /// Section whose visibility this panel follows.
    pub fn section(self) -> SectionId {
        match self {
            PanelId::Hero | PanelId::Social => SectionId::Hero,
            PanelId::Skills => SectionId::Skills,
            PanelId::Projects => SectionId::Projects,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    pub hero: Vec3,
    pub skills: Vec3,
    pub projects: Vec3,
    /// Projects takes Skills' X/Z so both frame the same way.
    pub projects_share_xz: bool,
    pub projects_offset: Vec3,
    /// Extra pitch for Projects, applied after billboarding.
    pub projects_pitch_deg: f32,
    pub social_from_hero: Vec3,
    pub scale: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            hero: Vec3::new(-1.0, 1.8, 3.0),
            skills: Vec3::new(2.0, 4.8, 1.0),
            projects: Vec3::new(0.0, 8.2, 2.8),
            projects_share_xz: true,
            projects_offset: Vec3::new(-0.4, 0.3, 1.5),
            projects_pitch_deg: -12.0,
            social_from_hero: Vec3::new(4.0, 0.0, -2.0),
            scale: PANEL_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl PanelTransform {
    /// Tilt about the panel's own X axis after its yaw, in radians.
    pub fn pitch(&self) -> f32 {
        self.rotation.to_euler(EulerRot::YXZ).1
    }
}

impl PanelLayout {
    pub fn position(&self, id: PanelId) -> Vec3 {
        match id {
            PanelId::Hero => self.hero,
            PanelId::Skills => self.skills,
            PanelId::Projects => {
                let base = if self.projects_share_xz {
                    Vec3::new(self.skills.x, self.projects.y, self.skills.z)
                } else {
                    self.projects
                };
                base + self.projects_offset
            }
            PanelId::Social => self.hero + self.social_from_hero,
        }
    }

    /// Face the camera, turning about world Y only.
    pub fn transform(&self, id: PanelId, camera_pos: Vec3) -> PanelTransform {
        let position = self.position(id);
        let mut rotation = Quat::from_rotation_y(billboard_yaw(position, camera_pos));
        if id == PanelId::Projects {
            rotation *= Quat::from_rotation_x(self.projects_pitch_deg.to_radians());
        }
        PanelTransform {
            position,
            rotation,
            scale: self.scale,
        }
    }
}

/// Yaw turning a panel's +Z toward the camera, ignoring height difference.
pub fn billboard_yaw(panel_pos: Vec3, camera_pos: Vec3) -> f32 {
    let d = camera_pos - panel_pos;
    if d.x.abs() < 1e-6 && d.z.abs() < 1e-6 {
        0.0
    } else {
        d.x.atan2(d.z)
    }
}

pub fn panel_visible(id: PanelId, current: SectionId) -> bool {
    id.section() == current
}

/// Where the nav HUD sits: parented to the camera, near the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudAnchor {
    pub distance: f32,
    pub margin_px: f32,
}

impl Default for HudAnchor {
    fn default() -> Self {
        Self {
            distance: HUD_DISTANCE,
            margin_px: HUD_MARGIN_PX,
        }
    }
}

impl HudAnchor {
    /// Offset in camera space (x right, y up, -z forward) and the world size
    /// of one screen pixel at the HUD's depth.
    pub fn local(&self, fovy_radians: f32, viewport_h: f32) -> (Vec3, f32) {
        let d = self.distance;
        let half_h = (fovy_radians / 2.0).tan() * d;
        let h = viewport_h.max(1.0);
        let margin_world = (self.margin_px / h) * (2.0 * half_h);
        let px_world = (2.0 * half_h) / h;
        (Vec3::new(0.0, half_h - margin_world, -d), px_world)
    }

    pub fn world(&self, camera: &Camera, viewport_h: f32) -> PanelTransform {
        let (local, px_world) = self.local(camera.fovy_radians, viewport_h);
        let b = camera.basis();
        let position = camera.eye + b.right * local.x + b.up * local.y - b.forward * local.z;
        let rotation = Quat::from_mat3(&glam::Mat3::from_cols(b.right, b.up, -b.forward));
        PanelTransform {
            position,
            rotation,
            scale: px_world,
        }
    }
}
