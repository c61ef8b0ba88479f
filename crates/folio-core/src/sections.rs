//! Section navigator: tweens the camera rig between three named waypoints.
//!
//! With `vertical_only` on (the default) a transition behaves like an
//! elevator: the horizontal offset between camera and look target is kept and
//! only the height comes from the waypoint. Interactive orbit control is
//! switched off for the duration of a tween.

use crate::constants::{
    FIT_BOTTOM_FRAC, FIT_MID_FRAC, FIT_PADDING, FIT_TOP_FRAC, SECTION_TWEEN_MIN_SEC,
};
use crate::controls::CameraRig;
use crate::geometry::Aabb;
use glam::Vec3;

const ELAPSED_EPS: f32 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero = 0,
    Skills = 1,
    Projects = 2,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Hero, SectionId::Skills, SectionId::Projects];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Section bound to a number key ("1" to "3").
    pub fn from_digit_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(SectionId::Hero),
            "2" => Some(SectionId::Skills),
            "3" => Some(SectionId::Projects),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub position: Vec3,
    pub look_target: Vec3,
}

impl Waypoint {
    pub fn new(position: Vec3, look_target: Vec3) -> Self {
        Self {
            position,
            look_target,
        }
    }

    /// Same waypoint moved vertically.
    pub fn shifted_y(self, dy: f32) -> Self {
        let d = Vec3::new(0.0, dy, 0.0);
        Self::new(self.position + d, self.look_target + d)
    }
}

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_target: Vec3,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    elapsed: f32,
    duration: f32,
    from: Pose,
    to: Pose,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    pub padding: f32,
    pub bottom_frac: f32,
    pub mid_frac: f32,
    pub top_frac: f32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: FIT_PADDING,
            bottom_frac: FIT_BOTTOM_FRAC,
            mid_frac: FIT_MID_FRAC,
            top_frac: FIT_TOP_FRAC,
        }
    }
}

impl FitOptions {
    pub fn with_padding(padding: f32) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }
}

/// `4t³` below the midpoint, mirrored above it.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub struct SectionNavigator {
    waypoints: [Option<Waypoint>; 3],
    tween: Option<Tween>,
    current: SectionId,
    vertical_only: bool,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    /// Navigator with stand-in waypoints that are replaced once the scene
    /// bounds are known.
    pub fn new() -> Self {
        let mut nav = Self::unconfigured();
        nav.waypoints = [
            Some(Waypoint::new(Vec3::new(3.0, 1.5, 4.0), Vec3::new(0.0, 1.0, 0.0))),
            Some(Waypoint::new(Vec3::new(3.0, 4.5, 4.0), Vec3::new(0.0, 4.5, 0.0))),
            Some(Waypoint::new(Vec3::new(3.0, 8.0, 4.0), Vec3::new(0.0, 8.0, 0.0))),
        ];
        nav
    }

    pub fn unconfigured() -> Self {
        Self {
            waypoints: [None; 3],
            tween: None,
            current: SectionId::Hero,
            vertical_only: true,
        }
    }

    pub fn set_vertical_only(&mut self, on: bool) {
        self.vertical_only = on;
    }

    pub fn vertical_only(&self) -> bool {
        self.vertical_only
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    pub fn waypoint(&self, id: SectionId) -> Option<Waypoint> {
        self.waypoints[id.index()]
    }

    pub fn set_waypoint(&mut self, id: SectionId, position: Vec3, look_target: Vec3) {
        self.waypoints[id.index()] = Some(Waypoint::new(position, look_target));
    }

    pub fn clear_waypoint(&mut self, id: SectionId) {
        self.waypoints[id.index()] = None;
    }

    /// Derive bottom/mid/top waypoints that frame `bounds` from the current
    /// horizontal viewing direction.
    pub fn configure_from_bounds(&mut self, rig: &CameraRig, bounds: Aabb, opts: FitOptions) {
        let bounds = match bounds.validated() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("[sections] configure skipped: {}", e);
                return;
            }
        };
        let bottom_frac = opts.bottom_frac.clamp(0.0, 1.0);
        let mid_frac = opts.mid_frac.clamp(0.0, 1.0);
        let top_frac = opts.top_frac.clamp(0.0, 1.0);

        let center = bounds.center();
        let size = bounds.size();
        let height = size.y;

        // Fit the bounding sphere in both directions of the frustum
        let radius = 0.5 * size.length();
        let v_fov = rig.camera.fovy_radians;
        let h_fov = 2.0 * ((v_fov / 2.0).tan() * rig.camera.aspect).atan();
        let dist_v = radius / (v_fov / 2.0).tan();
        let dist_h = radius / (h_fov / 2.0).tan();
        let dist = dist_v.max(dist_h) * opts.padding;

        let mut dir = rig.position() - rig.look_target();
        dir.y = 0.0;
        if dir.length_squared() < 1e-6 {
            dir = Vec3::Z;
        }
        let dir = dir.normalize();

        let at = |frac: f32| {
            let target = Vec3::new(center.x, bounds.min.y + height * frac, center.z);
            Waypoint::new(target + dir * dist, target)
        };
        self.waypoints = [Some(at(bottom_frac)), Some(at(mid_frac)), Some(at(top_frac))];
        log::info!(
            "[sections] configured: dist={:.2} heights=({:.2},{:.2},{:.2})",
            dist,
            bounds.min.y + height * bottom_frac,
            bounds.min.y + height * mid_frac,
            bounds.min.y + height * top_frac
        );
    }

    fn target_pose(&self, rig: &CameraRig, wp: Waypoint) -> Pose {
        if self.vertical_only {
            let from_pos = rig.position();
            let from_tar = rig.look_target();
            let look_target = Vec3::new(from_tar.x, wp.look_target.y, from_tar.z);
            Pose {
                position: look_target + (from_pos - from_tar),
                look_target,
            }
        } else {
            Pose {
                position: wp.position,
                look_target: wp.look_target,
            }
        }
    }

    /// Start an eased transition to `id`. Returns whether a tween started.
    pub fn go_to(&mut self, rig: &mut CameraRig, id: SectionId, duration_sec: f32) -> bool {
        let Some(wp) = self.waypoint(id) else {
            return false;
        };
        if id == self.current && self.tween.is_none() {
            rig.controls.enabled = true;
            return false;
        }
        rig.controls.enabled = false;

        let from = Pose {
            position: rig.position(),
            look_target: rig.look_target(),
        };
        let to = self.target_pose(rig, wp);
        self.tween = Some(Tween {
            elapsed: 0.0,
            duration: duration_sec.max(SECTION_TWEEN_MIN_SEC),
            from,
            to,
        });
        self.current = id;
        log::debug!("[sections] go_to {}", id.label());
        true
    }

    /// Jump straight to `id`, cancelling any transition in flight.
    pub fn snap_to(&mut self, rig: &mut CameraRig, id: SectionId) {
        let Some(wp) = self.waypoint(id) else {
            return;
        };
        let to = self.target_pose(rig, wp);
        self.tween = None;
        rig.set_pose(to.position, to.look_target);
        rig.controls.enabled = true;
        self.current = id;
    }

    /// Advance the transition by `dt` seconds. Non-positive or non-finite
    /// steps are dropped.
    pub fn update(&mut self, rig: &mut CameraRig, dt: f32) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        tween.elapsed += dt;
        // Absorb float drift from many small steps summing to the duration
        let k = if tween.elapsed >= tween.duration - ELAPSED_EPS {
            1.0
        } else {
            tween.elapsed / tween.duration
        };
        let e = ease_in_out_cubic(k);
        let position = tween.from.position.lerp(tween.to.position, e);
        let look_target = tween.from.look_target.lerp(tween.to.look_target, e);
        rig.set_pose(position, look_target);

        if k >= 1.0 {
            self.tween = None;
            rig.controls.enabled = true;
        }
    }
}
