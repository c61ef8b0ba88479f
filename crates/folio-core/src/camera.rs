//! Perspective camera description shared by the navigator, the follower and
//! both renderers.
//!
//! The camera is a plain value: position, look-at point and projection
//! parameters. Orientation is always derived from `eye -> target` with a world
//! `up` hint, so every consumer rebuilds the same basis each frame.

use crate::constants::{
    camera_start_pos, camera_start_target, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR,
};
use crate::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// Orthonormal view basis in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_start_pos(),
            target: camera_start_target(),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fovy_radians.to_degrees()
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn basis(&self) -> CameraBasis {
        let forward = (self.target - self.eye).try_normalize().unwrap_or(-Vec3::Z);
        let right = forward
            .cross(self.up)
            .try_normalize()
            .unwrap_or(Vec3::X);
        let up = right.cross(forward).normalize();
        CameraBasis { forward, right, up }
    }

    /// Yaw of the viewing direction around world Y (0 when looking down +Z).
    pub fn yaw(&self) -> f32 {
        let f = self.basis().forward;
        f.x.atan2(f.z)
    }

    /// World-space ray through normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let p = p.truncate() / p.w;
        let dir = (p - self.eye).try_normalize().unwrap_or(self.basis().forward);
        Ray {
            origin: self.eye,
            dir,
        }
    }

    /// Project a world point to normalized device coordinates (x, y in −1..1
    /// when on screen).
    pub fn world_to_ndc(&self, p: Vec3) -> Vec2 {
        let clip = self.view_proj() * p.extend(1.0);
        if clip.w.abs() < 1e-8 {
            return Vec2::ZERO;
        }
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}

/// Convert window client pixels to normalized device coordinates.
#[inline]
pub fn client_to_ndc(px: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new((px.x / w) * 2.0 - 1.0, -(px.y / h) * 2.0 + 1.0)
}

#[inline]
pub fn ndc_to_client(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        viewport.x * (ndc.x + 1.0) * 0.5,
        viewport.y * (1.0 - (ndc.y + 1.0) * 0.5),
    )
}
