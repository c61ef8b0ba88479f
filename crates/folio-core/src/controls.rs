//! Orbit-style interactive camera control and the camera rig it drives.
//!
//! Pointer drags and wheel steps only queue spherical deltas; `update` folds
//! them into the camera once per frame, with optional damping, and clamps the
//! result to the configured limits. The section navigator flips `enabled` off
//! while it animates the camera.

use crate::camera::Camera;
use glam::Vec3;
use std::f32::consts::PI;

const POLAR_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians from +Y; 0 looks straight down, π/2 is the horizon.
    pub min_polar: f32,
    pub max_polar: f32,
    /// Radians around +Y; negative is left.
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
}

impl Default for ControlsLimits {
    fn default() -> Self {
        Self {
            min_distance: 0.6,
            max_distance: 14.0,
            min_polar: 5f32.to_radians(),
            max_polar: 85f32.to_radians(),
            min_azimuth: f32::NEG_INFINITY,
            max_azimuth: f32::INFINITY,
            enable_pan: false,
            enable_zoom: true,
            enable_rotate: true,
        }
    }
}

impl ControlsLimits {
    /// The arc used by the portfolio: a narrow band around the front of the
    /// house with a short zoom range.
    pub fn site() -> Self {
        Self {
            min_distance: 0.4,
            max_distance: 9.0,
            min_polar: 65f32.to_radians(),
            max_polar: 80f32.to_radians(),
            min_azimuth: (-60f32).to_radians(),
            max_azimuth: 60f32.to_radians(),
            enable_pan: false,
            enable_zoom: true,
            enable_rotate: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
    pub limits: ControlsLimits,
    pub enable_damping: bool,
    pub damping_factor: f32,
    delta_azimuth: f32,
    delta_polar: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enabled: true,
            limits: ControlsLimits::default(),
            enable_damping: true,
            damping_factor: 0.06,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            scale: 1.0,
        }
    }

    pub fn with_limits(mut self, limits: ControlsLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Queue a rotation in radians (positive azimuth orbits to the right,
    /// positive polar tilts toward the ground).
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        if !self.enabled || !self.limits.enable_rotate {
            return;
        }
        self.delta_azimuth += d_azimuth;
        self.delta_polar += d_polar;
    }

    /// Queue a distance scale; values below 1 move closer.
    pub fn zoom(&mut self, scale: f32) {
        if !self.enabled || !self.limits.enable_zoom || !(scale > 0.0) {
            return;
        }
        self.scale *= scale;
    }

    pub fn has_pending_motion(&self) -> bool {
        self.delta_azimuth.abs() > 1e-6 || self.delta_polar.abs() > 1e-6 || (self.scale - 1.0).abs() > 1e-6
    }

    /// Fold queued motion into the camera and clamp to the limits. Disabled
    /// controls drop queued motion and leave the camera alone.
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.enabled {
            self.delta_azimuth = 0.0;
            self.delta_polar = 0.0;
            self.scale = 1.0;
            return;
        }
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        if radius < 1e-6 {
            camera.look_at(self.target);
            return;
        }
        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let k = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        azimuth += self.delta_azimuth * k;
        polar += self.delta_polar * k;

        if self.limits.min_azimuth.is_finite() && self.limits.max_azimuth.is_finite() {
            azimuth = azimuth.clamp(self.limits.min_azimuth, self.limits.max_azimuth);
        }
        polar = polar
            .clamp(self.limits.min_polar, self.limits.max_polar)
            .clamp(POLAR_EPS, PI - POLAR_EPS);
        radius = (radius * self.scale).clamp(self.limits.min_distance, self.limits.max_distance);

        let sin_p = polar.sin();
        let new_offset = Vec3::new(
            radius * sin_p * azimuth.sin(),
            radius * polar.cos(),
            radius * sin_p * azimuth.cos(),
        );
        camera.eye = self.target + new_offset;
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta_azimuth *= 1.0 - self.damping_factor;
            self.delta_polar *= 1.0 - self.damping_factor;
        } else {
            self.delta_azimuth = 0.0;
            self.delta_polar = 0.0;
        }
        self.scale = 1.0;
    }

    /// Lock zoom to the current distance.
    pub fn lock_distance_to_current(&mut self, camera: &Camera) {
        let d = camera.eye.distance(self.target);
        self.limits.min_distance = d;
        self.limits.max_distance = d;
        self.limits.enable_zoom = false;
    }

    /// Re-enable zoom with a range.
    pub fn unlock_zoom(&mut self, min: f32, max: f32) {
        self.limits.min_distance = min;
        self.limits.max_distance = max;
        self.limits.enable_zoom = true;
    }
}

/// Camera plus the orbit controls that share its pivot.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl CameraRig {
    pub fn new(camera: Camera) -> Self {
        let controls = OrbitControls::new(camera.target);
        Self { camera, controls }
    }

    /// Place the camera and keep controls and camera aimed at the same point.
    pub fn set_pose(&mut self, position: Vec3, look_target: Vec3) {
        self.camera.eye = position;
        self.controls.target = look_target;
        self.camera.look_at(look_target);
    }

    pub fn position(&self) -> Vec3 {
        self.camera.eye
    }

    pub fn look_target(&self) -> Vec3 {
        self.controls.target
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}
